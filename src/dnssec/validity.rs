use chrono::{DateTime, Utc};

use crate::dns::resource::DNSResource;

/// Grace applied on both sides of the signature lifetime for clock skew
pub const CLOCK_SKEW_SECS: i64 = 10 * 60;

/// Maximum TTL across `records`, or 0 when there are none
pub fn max_ttl(records: &[DNSResource]) -> u32 {
    records.iter().map(|rr| rr.ttl).max().unwrap_or(0)
}

/// TTL and lifetime of a signature generated at query time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidityWindow {
    pub ttl: u32,
    pub inception: u32,
    pub expiration: u32,
}

impl ValidityWindow {
    /// A signature lives for the TTL of what it covers plus the skew margin,
    /// and is back-dated by the same margin.
    pub fn new(ttl: u32, now: DateTime<Utc>) -> Self {
        let now = now.timestamp();
        Self {
            ttl,
            inception: serial_time(now - CLOCK_SKEW_SECS),
            expiration: serial_time(now + i64::from(ttl) + CLOCK_SKEW_SECS),
        }
    }

    pub fn for_records(records: &[DNSResource], now: DateTime<Utc>) -> Self {
        Self::new(max_ttl(records), now)
    }
}

/// RRSIG timestamps are seconds since the epoch modulo 2^32 (RFC 4034 §3.1.5)
fn serial_time(unix: i64) -> u32 {
    unix as u32
}
