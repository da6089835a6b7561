pub mod config;
pub mod manager;


pub use config::{AwsSettings, BackendConfig, MockBehaviorConfig, PollyEngine, Settings};
pub use manager::SettingsManager;
