use super::enums::{DNSResourceClass, DNSResourceType};
use super::resource::{DNSResource, DNSResourceData};

/// DNSSEC OK bit inside the EDNS flags (RFC 3225)
pub const DO_FLAG: u16 = 0x8000;

/// EDNS0 OPT pseudo-record
/// RFC 6891: https://tools.ietf.org/html/rfc6891
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EdnsOpt {
    /// UDP payload size that can be handled by the requestor
    pub udp_payload_size: u16,
    /// Extended RCODE (high 8 bits)
    pub extended_rcode: u8,
    /// EDNS version (currently 0)
    pub version: u8,
    /// EDNS flags (16 bits)
    pub flags: u16,
    /// Raw option data carried in the OPT RDATA
    pub options: Vec<u8>,
}

impl Default for EdnsOpt {
    fn default() -> Self {
        Self::new()
    }
}

impl EdnsOpt {
    /// Create a new EDNS OPT record with default values
    pub fn new() -> Self {
        Self {
            udp_payload_size: 4096,
            extended_rcode: 0,
            version: 0,
            flags: 0,
            options: Vec::new(),
        }
    }

    /// OPT record advertising DNSSEC support, as sent by validating resolvers
    pub fn with_dnssec_ok(payload_size: u16) -> Self {
        let mut opt = Self {
            udp_payload_size: payload_size,
            ..Self::new()
        };
        opt.set_do_flag(true);
        opt
    }

    /// Check if DNSSEC OK (DO) flag is set
    pub fn do_flag(&self) -> bool {
        (self.flags & DO_FLAG) != 0
    }

    /// Set the DNSSEC OK (DO) flag
    pub fn set_do_flag(&mut self, value: bool) {
        if value {
            self.flags |= DO_FLAG;
        } else {
            self.flags &= !DO_FLAG;
        }
    }

    /// Read the OPT fields back out of a resource record.
    ///
    /// - CLASS: UDP payload size
    /// - TTL: Extended RCODE (8 bits) | Version (8 bits) | Flags (16 bits)
    pub fn from_resource(rr: &DNSResource) -> Option<Self> {
        if rr.rtype != DNSResourceType::OPT {
            return None;
        }
        let options = match &rr.rdata {
            DNSResourceData::Raw(bytes) => bytes.clone(),
            DNSResourceData::Rrsig(_) => return None,
        };
        Some(Self {
            udp_payload_size: rr.rclass.into(),
            extended_rcode: ((rr.ttl >> 24) & 0xFF) as u8,
            version: ((rr.ttl >> 16) & 0xFF) as u8,
            flags: (rr.ttl & 0xFFFF) as u16,
            options,
        })
    }

    /// Encode as the pseudo-record carried in the additional section
    pub fn to_resource(&self) -> DNSResource {
        let ttl = ((self.extended_rcode as u32) << 24)
            | ((self.version as u32) << 16)
            | (self.flags as u32);
        DNSResource {
            labels: Vec::new(),
            rtype: DNSResourceType::OPT,
            rclass: DNSResourceClass::from(self.udp_payload_size),
            ttl,
            rdata: DNSResourceData::Raw(self.options.clone()),
        }
    }
}
