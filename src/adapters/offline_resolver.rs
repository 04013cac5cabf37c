use crate::domain::FallbackReason;
use crate::ports::UseCaseResolver;

/// Resolver used when no API credential is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct OfflineResolver;

impl UseCaseResolver for OfflineResolver {
    fn resolve(&self, _prompt: &str, _domain: &str) -> Result<String, FallbackReason> {
        Err(FallbackReason::MissingCredential)
    }

    fn is_offline(&self) -> bool {
        true
    }
}
