use async_trait::async_trait;

use super::types::{AudioBuffer, SynthesisRequest};
use crate::error::GatewayError;

/// Trait for text-to-speech providers
#[async_trait]
pub trait SpeechSynthesizer: Send + Sync {
    /// Synthesize the request text to encoded audio
    async fn synthesize(&self, request: &SynthesisRequest) -> Result<AudioBuffer, GatewayError>;
}
