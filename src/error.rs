use std::fmt;

use thiserror::Error;

/// Which of the two zone keys an operation needed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyRole {
    KeySigning,
    ZoneSigning,
}

impl fmt::Display for KeyRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyRole::KeySigning => write!(f, "KSK"),
            KeyRole::ZoneSigning => write!(f, "ZSK"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SignError {
    #[error("No RRs to sign")]
    EmptyRRSet,

    #[error("No {0} configured")]
    MissingKey(KeyRole),

    #[error("Signing failed: {0}")]
    Signing(String),

    #[error("Malformed NSEC3 hash: {0}")]
    MalformedHashInput(String),

    #[error("Cannot encode record: {0}")]
    Encoding(String),
}

impl From<std::io::Error> for SignError {
    fn from(err: std::io::Error) -> Self {
        SignError::Encoding(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, SignError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(String),

    #[error("Configuration parse error: {0}")]
    Parse(String),

    #[error("Invalid key material in {0}")]
    InvalidKey(String),

    #[error("Unsupported DNSSEC algorithm: {0}")]
    UnsupportedAlgorithm(u8),

    #[error("A KSK is configured but no ZSK")]
    MissingZoneSigningKey,
}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self {
        ConfigError::Io(err.to_string())
    }
}
