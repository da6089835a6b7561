pub mod aws;
pub mod controller;
pub mod error;
pub mod language;
pub mod playback;
pub mod settings;
pub mod speech;
pub mod translate;

// Types most surfaces need; everything else is reachable through the modules.
pub use controller::{Status, TranslatorActor, TranslatorEvent, TranslatorMessage};
pub use error::{GatewayError, GatewayErrorKind};
pub use language::{Language, LanguageEntry};
pub use settings::{Settings, SettingsManager};
