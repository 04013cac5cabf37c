use thiserror::Error;

use crate::domain::Domain;

/// Output when the domain has no fallback list.
pub const GENERATION_FAILED: &str = "Use case generation failed.";

/// Why the static fallback list was served instead of model output.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FallbackReason {
    /// No API credential configured; the process runs offline.
    #[error("No Hugging Face token found. Using fallback use cases.")]
    MissingCredential,

    /// The endpoint answered with something other than 200.
    #[error("API call failed. Using fallback use cases.")]
    UnsuccessfulStatus { status: u16 },

    /// The request could not be sent or completed.
    #[error("Error: {0}")]
    Transport(String),

    /// The response body was not the expected shape.
    #[error("Error: {0}")]
    InvalidResponse(String),
}

/// How loudly a fallback is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeSeverity {
    Warning,
    Error,
}

impl FallbackReason {
    pub fn severity(&self) -> NoticeSeverity {
        match self {
            FallbackReason::MissingCredential | FallbackReason::UnsuccessfulStatus { .. } => {
                NoticeSeverity::Warning
            }
            FallbackReason::Transport(_) | FallbackReason::InvalidResponse(_) => {
                NoticeSeverity::Error
            }
        }
    }
}

/// Fallback list for a domain key joined by newlines, or [`GENERATION_FAILED`]
/// when the key is not exactly one of the supported display names.
pub fn fallback_output(domain: &str) -> String {
    match Domain::from_key(domain) {
        Some(domain) => domain.fallback_use_cases().join("\n"),
        None => GENERATION_FAILED.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_output_joins_three_entries() {
        for domain in Domain::ALL {
            let output = fallback_output(domain.display_name());
            let lines: Vec<&str> = output.lines().collect();
            assert_eq!(lines, domain.fallback_use_cases());
        }
    }

    #[test]
    fn unknown_domain_yields_failure_literal() {
        assert_eq!(fallback_output("Insurance"), "Use case generation failed.");
    }

    #[test]
    fn fallback_keys_match_exactly() {
        assert_eq!(fallback_output("healthcare"), GENERATION_FAILED);
        assert_eq!(fallback_output(" BANKING "), GENERATION_FAILED);
    }

    #[test]
    fn severities_split_warning_and_error_paths() {
        assert_eq!(FallbackReason::MissingCredential.severity(), NoticeSeverity::Warning);
        assert_eq!(
            FallbackReason::UnsuccessfulStatus { status: 503 }.severity(),
            NoticeSeverity::Warning
        );
        assert_eq!(FallbackReason::Transport("refused".into()).severity(), NoticeSeverity::Error);
    }

    #[test]
    fn notices_are_distinct() {
        assert_ne!(
            FallbackReason::MissingCredential.to_string(),
            FallbackReason::UnsuccessfulStatus { status: 500 }.to_string()
        );
        assert_eq!(
            FallbackReason::Transport("connection refused".into()).to_string(),
            "Error: connection refused"
        );
    }
}
