//! Hosted inference client implementation using reqwest.

use reqwest::StatusCode;
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::{AppError, FallbackReason, InferenceConfig, extract_use_cases};
use crate::ports::UseCaseResolver;

/// HTTP transport for the text-generation endpoint.
///
/// Each call sends exactly one request. There is no retry wrapper.
#[derive(Clone)]
pub struct RemoteResolver {
    token: String,
    api_url: Url,
    client: Client,
}

impl std::fmt::Debug for RemoteResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RemoteResolver")
            .field("api_url", &self.api_url)
            .field("token", &"[REDACTED]")
            .finish()
    }
}

impl RemoteResolver {
    /// Create a resolver with the given bearer token and configuration.
    pub fn new(token: String, config: &InferenceConfig) -> Result<Self, AppError> {
        let client = Client::builder().build().map_err(|e| AppError::HttpClient(e.to_string()))?;

        Ok(Self { token, api_url: config.api_url.clone(), client })
    }

    fn send_request(&self, request: &InferenceRequest<'_>) -> Result<String, FallbackReason> {
        let response = self
            .client
            .post(self.api_url.clone())
            .bearer_auth(&self.token)
            .json(request)
            .send()
            .map_err(|e| FallbackReason::Transport(e.to_string()))?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(FallbackReason::UnsuccessfulStatus { status: status.as_u16() });
        }

        let body_text = response.text().map_err(|e| FallbackReason::Transport(e.to_string()))?;
        let generations: Vec<Generation> = serde_json::from_str(&body_text).map_err(|e| {
            FallbackReason::InvalidResponse(format!("Failed to parse response: {}", e))
        })?;

        let first = generations
            .into_iter()
            .next()
            .ok_or_else(|| FallbackReason::InvalidResponse("Empty generation list".into()))?;

        Ok(extract_use_cases(&first.generated_text))
    }
}

#[derive(Debug, Serialize)]
struct InferenceRequest<'a> {
    inputs: &'a str,
}

#[derive(Debug, Deserialize)]
struct Generation {
    generated_text: String,
}

impl UseCaseResolver for RemoteResolver {
    fn resolve(&self, prompt: &str, domain: &str) -> Result<String, FallbackReason> {
        tracing::debug!(
            domain,
            prompt_chars = prompt.len(),
            api_url = %self.api_url,
            "posting prompt"
        );
        self.send_request(&InferenceRequest { inputs: prompt })
    }
}
