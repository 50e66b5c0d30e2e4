use bitstream_io::BitWrite;

use super::algorithm::DnsSecAlgorithm;
use crate::dns::common::{WireComponent, WireWriter};
use crate::error::Result;

/// Zone Key flag (RFC 4034 §2.1.1)
pub const ZONE_KEY_FLAG: u16 = 0x0100;
/// Secure Entry Point flag (RFC 4034 §2.1.1)
pub const SEP_FLAG: u16 = 0x0001;

pub const KSK_FLAGS: u16 = ZONE_KEY_FLAG | SEP_FLAG;
pub const ZSK_FLAGS: u16 = ZONE_KEY_FLAG;

/// DNSKEY protocol field, always 3 (RFC 4034 §2.1.2)
pub const DNSKEY_PROTOCOL: u8 = 3;

/// DNSKEY RDATA published for one of the zone's keys
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dnskey {
    pub flags: u16,
    pub protocol: u8,
    pub algorithm: u8,
    pub public_key: Vec<u8>,
}

impl Dnskey {
    pub fn new(flags: u16, algorithm: DnsSecAlgorithm, public_key: Vec<u8>) -> Self {
        Self {
            flags,
            protocol: DNSKEY_PROTOCOL,
            algorithm: algorithm.to_u8(),
            public_key,
        }
    }

    pub fn is_zone_key(&self) -> bool {
        self.flags & ZONE_KEY_FLAG != 0
    }

    pub fn is_secure_entry_point(&self) -> bool {
        self.flags & SEP_FLAG != 0
    }

    /// Key tag as carried in RRSIG and DS records
    pub fn key_tag(&self) -> u16 {
        calculate_key_tag(self.flags, self.protocol, self.algorithm, &self.public_key)
    }
}

impl WireComponent for Dnskey {
    fn write(&self, writer: &mut WireWriter<'_>) -> Result<()> {
        writer.write_var::<u16>(16, self.flags)?;
        writer.write_var::<u8>(8, self.protocol)?;
        writer.write_var::<u8>(8, self.algorithm)?;
        writer.write_bytes(&self.public_key)?;
        Ok(())
    }
}

/// Calculate the key tag for a DNSKEY record (RFC 4034 Appendix B)
pub fn calculate_key_tag(flags: u16, protocol: u8, algorithm: u8, public_key: &[u8]) -> u16 {
    // RSAMD5 uses the low 16 bits of the modulus instead
    if algorithm == 1 {
        if public_key.len() >= 3 {
            return u16::from_be_bytes([
                public_key[public_key.len() - 3],
                public_key[public_key.len() - 2],
            ]);
        }
        return 0;
    }

    let mut rdata = Vec::with_capacity(4 + public_key.len());
    rdata.extend_from_slice(&flags.to_be_bytes());
    rdata.push(protocol);
    rdata.push(algorithm);
    rdata.extend_from_slice(public_key);

    let mut accumulator: u32 = 0;
    for (i, &byte) in rdata.iter().enumerate() {
        if i % 2 == 0 {
            accumulator += u32::from(byte) << 8;
        } else {
            accumulator += u32::from(byte);
        }
    }

    accumulator += (accumulator >> 16) & 0xFFFF;
    (accumulator & 0xFFFF) as u16
}
