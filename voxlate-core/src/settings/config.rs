use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use crate::language::Language;

/// Polly synthesis engine. Every voice in the language registry is
/// available on the standard engine; only some have neural variants.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PollyEngine {
    #[default]
    Standard,
    Neural,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AwsSettings {
    /// Named profile from the shared AWS config; default chain when unset.
    #[serde(default)]
    pub profile: Option<String>,

    #[serde(default = "default_region")]
    pub region: String,

    /// Region for Polly when it differs from `region`.
    #[serde(default)]
    pub polly_region: Option<String>,

    #[serde(default)]
    pub engine: PollyEngine,

    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,

    #[serde(default = "default_operation_timeout_secs")]
    pub operation_timeout_secs: u64,
}

impl Default for AwsSettings {
    fn default() -> Self {
        Self {
            profile: None,
            region: default_region(),
            polly_region: None,
            engine: PollyEngine::default(),
            connect_timeout_secs: default_connect_timeout_secs(),
            operation_timeout_secs: default_operation_timeout_secs(),
        }
    }
}

impl AwsSettings {
    pub fn translate_region(&self) -> &str {
        &self.region
    }

    pub fn polly_region(&self) -> &str {
        self.polly_region.as_deref().unwrap_or(&self.region)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    pub fn operation_timeout(&self) -> Duration {
        Duration::from_secs(self.operation_timeout_secs)
    }
}

/// Canned behavior for the offline backend.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MockBehaviorConfig {
    /// Translations echo the input tagged with the target code.
    #[default]
    Echo,
    /// Every remote call fails.
    AlwaysError,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type")]
pub enum BackendConfig {
    #[serde(rename = "aws")]
    Aws(AwsSettings),
    #[serde(rename = "mock")]
    Mock {
        #[serde(default)]
        behavior: MockBehaviorConfig,
    },
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self::Aws(AwsSettings::default())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlaybackSettings {
    /// Where synthesized audio is written before playback. Relative paths
    /// resolve against the working directory.
    #[serde(default = "default_audio_path")]
    pub audio_path: PathBuf,
}

impl Default for PlaybackSettings {
    fn default() -> Self {
        Self {
            audio_path: default_audio_path(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Settings {
    /// Language preselected in the form.
    #[serde(default = "default_language")]
    pub default_language: Language,

    #[serde(default)]
    pub backend: BackendConfig,

    #[serde(default)]
    pub playback: PlaybackSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_language: default_language(),
            backend: BackendConfig::default(),
            playback: PlaybackSettings::default(),
        }
    }
}

fn default_region() -> String {
    "us-east-1".to_string()
}

fn default_connect_timeout_secs() -> u64 {
    10
}

fn default_operation_timeout_secs() -> u64 {
    60
}

fn default_audio_path() -> PathBuf {
    PathBuf::from("temp_audio.mp3")
}

fn default_language() -> Language {
    Language::French
}
