use std::sync::OnceLock;

use url::Url;

/// Hosted text-generation endpoint.
pub const DEFAULT_API_URL: &str =
    "https://api-inference.huggingface.co/models/HuggingFaceH4/zephyr-7b-beta";

/// Environment variable holding the bearer token.
pub const TOKEN_ENV_VAR: &str = "HF_TOKEN";

/// Inference API configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InferenceConfig {
    /// Endpoint the prompt is posted to.
    pub api_url: Url,
}

impl Default for InferenceConfig {
    fn default() -> Self {
        Self { api_url: default_api_url() }
    }
}

impl InferenceConfig {
    /// Read the bearer token. Unset or blank values count as missing.
    pub fn token_from_env() -> Option<String> {
        std::env::var(TOKEN_ENV_VAR).ok().filter(|token| !token.trim().is_empty())
    }

    /// Token read on first use and fixed for the rest of the process.
    pub fn process_token() -> Option<String> {
        static PROCESS_TOKEN: OnceLock<Option<String>> = OnceLock::new();
        PROCESS_TOKEN.get_or_init(Self::token_from_env).clone()
    }
}

fn default_api_url() -> Url {
    Url::parse(DEFAULT_API_URL).expect("Default API URL must be valid")
}
