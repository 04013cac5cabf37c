//! Use-case resolver port definition.

use crate::domain::FallbackReason;

/// Port for turning a prompt into use-case text.
///
/// Implementations make at most one attempt. A failure is reported as the
/// [`FallbackReason`] the caller should act on; choosing fallback content and
/// notifying the user are left to the caller.
pub trait UseCaseResolver {
    /// Resolve a prompt built for `domain`.
    fn resolve(&self, prompt: &str, domain: &str) -> Result<String, FallbackReason>;

    /// Whether this resolver never contacts the model.
    fn is_offline(&self) -> bool {
        false
    }
}
