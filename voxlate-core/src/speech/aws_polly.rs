//! AWS Polly text-to-speech implementation

use async_trait::async_trait;
use aws_sdk_polly::operation::synthesize_speech::SynthesizeSpeechError;
use aws_sdk_polly::types::{Engine, OutputFormat, VoiceId};
use aws_sdk_polly::Client;

use super::provider::SpeechSynthesizer;
use super::types::{AudioBuffer, AudioFormat, SynthesisRequest};
use crate::aws::{gateway_error, load_sdk_config};
use crate::error::GatewayError;
use crate::settings::{AwsSettings, PollyEngine};

/// AWS Polly text-to-speech provider
pub struct AwsPolly {
    client: Client,
    engine: Engine,
}

impl AwsPolly {
    /// Create a new AWS Polly client
    pub async fn new(settings: &AwsSettings) -> Self {
        let sdk_config = load_sdk_config(settings, settings.polly_region()).await;
        Self::from_client(Client::new(&sdk_config), settings.engine)
    }

    pub fn from_client(client: Client, engine: PollyEngine) -> Self {
        let engine = match engine {
            PollyEngine::Standard => Engine::Standard,
            PollyEngine::Neural => Engine::Neural,
        };
        Self { client, engine }
    }

    fn parse_voice_id(voice_id: &str) -> Result<VoiceId, GatewayError> {
        if !VoiceId::values().iter().any(|known| *known == voice_id) {
            return Err(GatewayError::service(format!(
                "unknown Polly voice id: {voice_id}"
            )));
        }
        Ok(VoiceId::from(voice_id))
    }

    fn output_format(format: AudioFormat) -> OutputFormat {
        match format {
            AudioFormat::Mp3 => OutputFormat::Mp3,
        }
    }
}

fn is_transient(err: &SynthesizeSpeechError) -> bool {
    matches!(err, SynthesizeSpeechError::ServiceFailureException(_))
}

#[async_trait]
impl SpeechSynthesizer for AwsPolly {
    async fn synthesize(&self, request: &SynthesisRequest) -> Result<AudioBuffer, GatewayError> {
        let voice_id = Self::parse_voice_id(&request.voice_id)?;

        tracing::debug!(voice = %request.voice_id, "Sending SynthesizeSpeech request");

        let response = self
            .client
            .synthesize_speech()
            .text(&request.text)
            .voice_id(voice_id)
            .output_format(Self::output_format(request.output_format))
            .engine(self.engine.clone())
            .send()
            .await
            .map_err(|e| gateway_error("SynthesizeSpeech", e, is_transient))?;

        let bytes = response
            .audio_stream
            .collect()
            .await
            .map_err(|e| GatewayError::network(format!("Failed to read audio stream: {e}")))?
            .into_bytes()
            .to_vec();

        if bytes.is_empty() {
            return Err(GatewayError::parse("SynthesizeSpeech returned an empty audio stream"));
        }

        Ok(AudioBuffer::new(bytes, request.output_format))
    }
}
