//! Generated result and its download formats.

use minijinja::{Environment, UndefinedBehavior, context};
use serde::{Deserialize, Serialize};

use crate::domain::request::constraints_or_default;
use crate::domain::{AppError, UseCaseRequest};

/// Default file name for the JSON export.
pub const JSON_FILE_NAME: &str = "agentic_use_cases.json";
/// Default file name for the Markdown export.
pub const MARKDOWN_FILE_NAME: &str = "agentic_use_cases.md";

const MARKDOWN_TEMPLATE: &str = "# Agentic AI Use Cases\n\n\
**Domain:** {{ domain }}  \n\
**Persona:** {{ persona }}  \n\
**Pain Point:** {{ pain_point }}  \n\
**Constraints:** {{ constraints }}\n\n\
## Use Cases\n\
{{ output }}\n";

/// Resolved output together with the request that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UseCaseReport {
    pub domain: String,
    pub persona: String,
    pub pain_point: String,
    pub constraints: String,
    pub output: String,
}

impl UseCaseReport {
    pub fn from_request(request: &UseCaseRequest, output: impl Into<String>) -> Self {
        Self {
            domain: request.domain().to_string(),
            persona: request.persona().to_string(),
            pain_point: request.pain_point().to_string(),
            constraints: request.constraints().to_string(),
            output: output.into(),
        }
    }

    /// Pretty-printed JSON with 2-space indentation.
    pub fn to_json(&self) -> Result<String, AppError> {
        serde_json::to_string_pretty(self).map_err(|e| AppError::Serialization {
            what: "use case report".to_string(),
            details: e.to_string(),
        })
    }

    pub fn to_markdown(&self) -> Result<String, AppError> {
        let mut env = Environment::new();
        env.set_keep_trailing_newline(true);
        env.set_undefined_behavior(UndefinedBehavior::Strict);

        env.render_str(
            MARKDOWN_TEMPLATE,
            context! {
                domain => self.domain,
                persona => self.persona,
                pain_point => self.pain_point,
                constraints => constraints_or_default(&self.constraints),
                output => self.output,
            },
        )
        .map_err(|err| AppError::TemplateRender {
            template: "markdown".to_string(),
            reason: err.to_string(),
        })
    }
}
