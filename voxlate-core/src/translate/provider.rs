use async_trait::async_trait;

use super::types::TranslationRequest;
use crate::error::GatewayError;

/// Trait for translation providers
#[async_trait]
pub trait Translator: Send + Sync {
    /// Translate the request text, issuing at most one remote call
    async fn translate(&self, request: &TranslationRequest) -> Result<String, GatewayError>;
}
