use tracing::Level;

use crate::domain::{
    FallbackReason, NoticeSeverity, UseCaseReport, UseCaseRequest, fallback_output,
};
use crate::ports::UseCaseResolver;

/// Result of one form submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateOutcome {
    pub report: UseCaseReport,
    /// Set when the static list was served instead of model output.
    pub fallback: Option<FallbackReason>,
}

impl GenerateOutcome {
    pub fn output(&self) -> &str {
        &self.report.output
    }
}

/// Build the prompt, resolve it once, and fall back to the static list on failure.
pub fn execute(resolver: &dyn UseCaseResolver, request: &UseCaseRequest) -> GenerateOutcome {
    let prompt = request.prompt();

    let (output, fallback) = match resolver.resolve(&prompt, request.domain()) {
        Ok(text) => {
            tracing::info!(domain = request.domain(), "generated use cases");
            (text, None)
        }
        Err(reason) => {
            let domain = request.domain();
            match fallback_log_level(&reason) {
                Level::INFO => tracing::info!(domain, "no API token, serving fallback use cases"),
                Level::WARN => tracing::warn!(domain, ?reason, "serving fallback use cases"),
                _ => tracing::error!(domain, error = %reason, "serving fallback use cases"),
            }
            (fallback_output(request.domain()), Some(reason))
        }
    };

    GenerateOutcome { report: UseCaseReport::from_request(request, output), fallback }
}

/// Offline mode is expected, not a fault, so it logs below warning.
fn fallback_log_level(reason: &FallbackReason) -> Level {
    match reason {
        FallbackReason::MissingCredential => Level::INFO,
        _ => match reason.severity() {
            NoticeSeverity::Warning => Level::WARN,
            NoticeSeverity::Error => Level::ERROR,
        },
    }
}
