use super::common::{WireComponent, fqdn, split_labels};
use super::enums::{DNSResourceClass, DNSResourceType};
use crate::dnssec::rrsig::Rrsig;
use crate::error::Result;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DNSResource {
    pub labels: Vec<String>,
    pub rtype: DNSResourceType,
    pub rclass: DNSResourceClass,
    pub ttl: u32,
    pub rdata: DNSResourceData,
}

/// RDATA of a record. Zone data stays in uncompressed wire form; signatures
/// generated by this crate keep their fields so callers can inspect them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DNSResourceData {
    Raw(Vec<u8>),
    Rrsig(Rrsig),
}

impl Default for DNSResourceData {
    fn default() -> Self {
        DNSResourceData::Raw(Vec::new())
    }
}

impl DNSResource {
    /// Build an IN-class record from a presentation name and raw RDATA
    pub fn new(name: &str, rtype: DNSResourceType, ttl: u32, rdata: Vec<u8>) -> Self {
        Self {
            labels: split_labels(name),
            rtype,
            rclass: DNSResourceClass::IN,
            ttl,
            rdata: DNSResourceData::Raw(rdata),
        }
    }

    /// Owner name without the trailing dot
    pub fn name(&self) -> String {
        self.labels.join(".")
    }

    /// Owner name in fully-qualified form
    pub fn fqdn(&self) -> String {
        fqdn(&self.labels)
    }

    pub fn rrsig(&self) -> Option<&Rrsig> {
        match &self.rdata {
            DNSResourceData::Rrsig(sig) => Some(sig),
            DNSResourceData::Raw(_) => None,
        }
    }

    /// RDATA in uncompressed wire form
    pub fn rdata_bytes(&self) -> Result<Vec<u8>> {
        match &self.rdata {
            DNSResourceData::Raw(bytes) => Ok(bytes.clone()),
            DNSResourceData::Rrsig(sig) => sig.to_wire(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_owner_name_forms() {
        let rr = DNSResource::new("www.example.com", DNSResourceType::A, 60, vec![192, 0, 2, 1]);
        assert_eq!(rr.name(), "www.example.com");
        assert_eq!(rr.fqdn(), "www.example.com.");

        let already_fqdn = DNSResource::new("example.com.", DNSResourceType::NS, 60, vec![]);
        assert_eq!(already_fqdn.fqdn(), "example.com.");
    }

    #[test]
    fn test_raw_rdata_bytes() {
        let rr = DNSResource::new("example.com", DNSResourceType::A, 60, vec![192, 0, 2, 1]);
        assert_eq!(rr.rdata_bytes().unwrap(), vec![192, 0, 2, 1]);
        assert!(rr.rrsig().is_none());
    }
}
