use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use super::provider::SpeechSynthesizer;
use super::types::{AudioBuffer, SynthesisRequest};
use crate::error::GatewayError;

/// Bytes the mock returns by default: an ID3 tag header so the payload looks
/// like an MP3 to anything sniffing it.
pub const FAKE_MP3: &[u8] = b"ID3FAKEMP3";

/// Behavior for the mock synthesizer
#[derive(Debug, Clone)]
pub enum MockSynthesis {
    /// Always return the given bytes
    Bytes(Vec<u8>),
    /// Always fail with the given error
    Fail(GatewayError),
}

impl Default for MockSynthesis {
    fn default() -> Self {
        Self::Bytes(FAKE_MP3.to_vec())
    }
}

/// Mock synthesizer for tests and the offline backend. Clones share state.
#[derive(Clone, Default)]
pub struct MockSynthesizer {
    behavior: Arc<Mutex<MockSynthesis>>,
    requests: Arc<Mutex<Vec<SynthesisRequest>>>,
}

impl MockSynthesizer {
    pub fn new(behavior: MockSynthesis) -> Self {
        Self {
            behavior: Arc::new(Mutex::new(behavior)),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn set_behavior(&self, behavior: MockSynthesis) {
        *self.behavior.lock().unwrap() = behavior;
    }

    pub fn requests(&self) -> Vec<SynthesisRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl SpeechSynthesizer for MockSynthesizer {
    async fn synthesize(&self, request: &SynthesisRequest) -> Result<AudioBuffer, GatewayError> {
        self.requests.lock().unwrap().push(request.clone());
        let behavior = self.behavior.lock().unwrap().clone();

        match behavior {
            MockSynthesis::Bytes(bytes) => Ok(AudioBuffer::new(bytes, request.output_format)),
            MockSynthesis::Fail(err) => Err(err),
        }
    }
}
