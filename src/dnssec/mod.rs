pub mod algorithm;
pub mod dnskey;
pub mod nsec3;
pub mod rrsig;
pub mod signing_key;
pub mod tbs;
pub mod types;
pub mod validity;

pub use algorithm::DnsSecAlgorithm;
pub use dnskey::{Dnskey, calculate_key_tag};
pub use nsec3::{nsec3_hash, step_hash};
pub use rrsig::Rrsig;
pub use signing_key::{RsaSha256SigningKey, SigningKey};
pub use tbs::Tbs;
pub use types::{compare_types, encode_type_bitmap};
pub use validity::{ValidityWindow, max_ttl};
