use serde::{Deserialize, Serialize};
use strum::Display;
use thiserror::Error;

/// Broad category of a failed call to a remote service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum GatewayErrorKind {
    /// The request never completed: connection, DNS or timeout failures.
    Network,
    /// Missing, expired or rejected credentials.
    Auth,
    /// The service answered with an error (validation, throttling, ...).
    Service,
    /// The service answered but the payload was unusable.
    Parse,
}

/// Error returned by the translation and speech gateways.
///
/// Nothing in voxlate retries, but the kind and `transient` flag are kept so
/// a caller could.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[error("{message}")]
pub struct GatewayError {
    pub kind: GatewayErrorKind,
    pub message: String,
    pub transient: bool,
}

impl GatewayError {
    pub fn new(kind: GatewayErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            transient: kind == GatewayErrorKind::Network,
        }
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self::new(GatewayErrorKind::Network, message)
    }

    pub fn auth(message: impl Into<String>) -> Self {
        Self::new(GatewayErrorKind::Auth, message)
    }

    pub fn service(message: impl Into<String>) -> Self {
        Self::new(GatewayErrorKind::Service, message)
    }

    pub fn parse(message: impl Into<String>) -> Self {
        Self::new(GatewayErrorKind::Parse, message)
    }

    pub fn with_transient(mut self, transient: bool) -> Self {
        self.transient = transient;
        self
    }

    pub fn is_transient(&self) -> bool {
        self.transient
    }
}
