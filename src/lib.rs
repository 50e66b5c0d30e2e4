pub mod config;
pub mod dns;
pub mod dnssec;
pub mod error;
pub mod sign;
pub mod transaction;

pub use config::{DnssecConfig, SignerSettings, ZoneKey};
pub use dns::DNSPacket;
pub use error::{ConfigError, SignError};
pub use transaction::Transaction;
