use crate::adapters::{OfflineResolver, RemoteResolver};
use crate::domain::{AppError, InferenceConfig};
use crate::ports::UseCaseResolver;

/// Application context holding the resolver chosen for this process.
pub struct AppContext {
    resolver: Box<dyn UseCaseResolver>,
}

impl AppContext {
    /// Create a context around an explicit resolver.
    pub fn new(resolver: Box<dyn UseCaseResolver>) -> Self {
        Self { resolver }
    }

    /// Pick the remote resolver when a token is present, the offline one otherwise.
    pub fn from_credential(
        token: Option<String>,
        config: &InferenceConfig,
    ) -> Result<Self, AppError> {
        let resolver: Box<dyn UseCaseResolver> = match token {
            Some(token) => {
                tracing::info!(api_url = %config.api_url, "using hosted inference endpoint");
                Box::new(RemoteResolver::new(token, config)?)
            }
            None => {
                tracing::info!("no API token configured, running offline");
                Box::new(OfflineResolver)
            }
        };
        Ok(Self::new(resolver))
    }

    /// Select the resolver from the process-wide token with the default endpoint.
    pub fn from_process_env() -> Result<Self, AppError> {
        Self::from_credential(InferenceConfig::process_token(), &InferenceConfig::default())
    }

    /// Get a reference to the selected resolver.
    pub fn resolver(&self) -> &dyn UseCaseResolver {
        self.resolver.as_ref()
    }
}
