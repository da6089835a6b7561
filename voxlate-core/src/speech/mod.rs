//! Speech synthesis through a remote service.

pub mod aws_polly;
pub mod mock;
pub mod provider;
pub mod types;

pub use provider::SpeechSynthesizer;
pub use types::{AudioBuffer, AudioFormat, SynthesisRequest};
