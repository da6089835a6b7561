//! AWS Translate implementation

use async_trait::async_trait;
use aws_sdk_translate::operation::translate_text::TranslateTextError;
use aws_sdk_translate::Client;

use super::provider::Translator;
use super::types::TranslationRequest;
use crate::aws::{gateway_error, load_sdk_config};
use crate::error::GatewayError;
use crate::settings::AwsSettings;

/// AWS Translate provider
pub struct AwsTranslate {
    client: Client,
}

impl AwsTranslate {
    pub async fn new(settings: &AwsSettings) -> Self {
        let sdk_config = load_sdk_config(settings, settings.translate_region()).await;
        Self::from_client(Client::new(&sdk_config))
    }

    pub fn from_client(client: Client) -> Self {
        Self { client }
    }
}

fn is_transient(err: &TranslateTextError) -> bool {
    matches!(
        err,
        TranslateTextError::TooManyRequestsException(_)
            | TranslateTextError::ServiceUnavailableException(_)
            | TranslateTextError::InternalServerException(_)
    )
}

#[async_trait]
impl Translator for AwsTranslate {
    async fn translate(&self, request: &TranslationRequest) -> Result<String, GatewayError> {
        tracing::debug!(
            target_language = %request.target_language_code,
            chars = request.source_text.len(),
            "Sending TranslateText request"
        );

        let output = self
            .client
            .translate_text()
            .text(&request.source_text)
            .source_language_code(&request.source_language_code)
            .target_language_code(&request.target_language_code)
            .send()
            .await
            .map_err(|e| gateway_error("TranslateText", e, is_transient))?;

        let translated = output.translated_text();
        if translated.is_empty() {
            return Err(GatewayError::parse("TranslateText returned no translated text"));
        }

        Ok(translated.to_string())
    }
}
