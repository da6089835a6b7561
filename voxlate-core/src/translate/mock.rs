use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use super::provider::Translator;
use super::types::TranslationRequest;
use crate::error::GatewayError;

/// Behavior for the mock translator
#[derive(Debug, Clone, Default)]
pub enum MockTranslation {
    /// Return `"[<target code>] <source text>"`
    #[default]
    Echo,
    /// Always return the given text
    Fixed(String),
    /// Always fail with the given error
    Fail(GatewayError),
    /// Never complete; used to exercise cancellation
    Hang,
}

/// Mock translator for tests and the offline backend. Clones share state.
#[derive(Clone, Default)]
pub struct MockTranslator {
    behavior: Arc<Mutex<MockTranslation>>,
    requests: Arc<Mutex<Vec<TranslationRequest>>>,
}

impl MockTranslator {
    pub fn new(behavior: MockTranslation) -> Self {
        Self {
            behavior: Arc::new(Mutex::new(behavior)),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn set_behavior(&self, behavior: MockTranslation) {
        *self.behavior.lock().unwrap() = behavior;
    }

    pub fn requests(&self) -> Vec<TranslationRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl Translator for MockTranslator {
    async fn translate(&self, request: &TranslationRequest) -> Result<String, GatewayError> {
        self.requests.lock().unwrap().push(request.clone());
        let behavior = self.behavior.lock().unwrap().clone();

        match behavior {
            MockTranslation::Echo => Ok(format!(
                "[{}] {}",
                request.target_language_code, request.source_text
            )),
            MockTranslation::Fixed(text) => Ok(text),
            MockTranslation::Fail(err) => Err(err),
            MockTranslation::Hang => std::future::pending().await,
        }
    }
}
