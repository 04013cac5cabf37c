use std::sync::{Arc, Mutex};

use crate::domain::FallbackReason;
use crate::ports::UseCaseResolver;

/// Resolver returning a scripted result and recording every call.
#[derive(Clone)]
pub struct FakeResolver {
    pub calls: Arc<Mutex<Vec<(String, String)>>>,
    result: Result<String, FallbackReason>,
}

impl FakeResolver {
    pub fn succeeding(text: impl Into<String>) -> Self {
        Self { calls: Arc::new(Mutex::new(vec![])), result: Ok(text.into()) }
    }

    pub fn failing(reason: FallbackReason) -> Self {
        Self { calls: Arc::new(Mutex::new(vec![])), result: Err(reason) }
    }

    /// `(prompt, domain)` pairs received so far.
    pub fn get_calls(&self) -> Vec<(String, String)> {
        self.calls.lock().unwrap().clone()
    }
}

impl UseCaseResolver for FakeResolver {
    fn resolve(&self, prompt: &str, domain: &str) -> Result<String, FallbackReason> {
        self.calls.lock().unwrap().push((prompt.to_string(), domain.to_string()));
        self.result.clone()
    }
}
