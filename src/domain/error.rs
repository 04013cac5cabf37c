use std::io;

use thiserror::Error;

/// Library-wide error type for usecase-gen operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// Domain label is not one of the supported verticals.
    #[error("Invalid domain '{name}': must be one of Healthcare, Retail, Banking")]
    InvalidDomain { name: String },

    /// Persona or pain point was left empty.
    #[error("Please fill in both the Persona and Pain Point fields.")]
    MissingRequiredFields,

    /// Interactive form input failed.
    #[error("{0}")]
    Validation(String),

    /// Template rendering failed.
    #[error("Failed to render {template} template: {reason}")]
    TemplateRender { template: String, reason: String },

    /// JSON serialization failed.
    #[error("Failed to serialize {what}: {details}")]
    Serialization { what: String, details: String },

    /// HTTP client could not be constructed.
    #[error("Failed to create HTTP client: {0}")]
    HttpClient(String),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    /// Provide an `io::ErrorKind`-like view for callers matching on error class.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::Configuration(_)
            | AppError::InvalidDomain { .. }
            | AppError::MissingRequiredFields
            | AppError::Validation(_) => io::ErrorKind::InvalidInput,
            AppError::TemplateRender { .. } | AppError::Serialization { .. } => {
                io::ErrorKind::InvalidData
            }
            AppError::HttpClient(_) => io::ErrorKind::Other,
        }
    }
}
