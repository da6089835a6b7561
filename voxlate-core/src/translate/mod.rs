//! Text translation through a remote service.

pub mod aws_translate;
pub mod mock;
pub mod provider;
pub mod types;

pub use provider::Translator;
pub use types::TranslationRequest;
