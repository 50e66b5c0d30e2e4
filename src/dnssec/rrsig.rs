use bitstream_io::BitWrite;

use crate::dns::common::{WireComponent, WireWriter, fqdn, write_name};
use crate::dns::enums::{DNSResourceClass, DNSResourceType};
use crate::dns::resource::{DNSResource, DNSResourceData};
use crate::error::Result;

/// RRSIG RDATA (RFC 4034 §3.1)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rrsig {
    pub type_covered: DNSResourceType,
    pub algorithm: u8,
    pub labels: u8,
    pub original_ttl: u32,
    /// Serial-number time, seconds since the epoch modulo 2^32
    pub expiration: u32,
    pub inception: u32,
    pub key_tag: u16,
    pub signer_name: Vec<String>,
    pub signature: Vec<u8>,
}

impl Rrsig {
    pub fn signer_fqdn(&self) -> String {
        fqdn(&self.signer_name)
    }

    /// Every field except the signature. The signer name is lowercased when
    /// building signing input (RFC 4034 §3.1.8.1).
    pub fn write_unsigned(&self, writer: &mut WireWriter<'_>, canonical: bool) -> Result<()> {
        writer.write_var::<u16>(16, self.type_covered.code())?;
        writer.write_var::<u8>(8, self.algorithm)?;
        writer.write_var::<u8>(8, self.labels)?;
        writer.write_var::<u32>(32, self.original_ttl)?;
        writer.write_var::<u32>(32, self.expiration)?;
        writer.write_var::<u32>(32, self.inception)?;
        writer.write_var::<u16>(16, self.key_tag)?;
        write_name(writer, &self.signer_name, canonical)?;
        Ok(())
    }

    /// Wrap into a record owned by the covered RRset's name
    pub fn into_resource(self, owner: &[String], class: DNSResourceClass, ttl: u32) -> DNSResource {
        DNSResource {
            labels: owner.to_vec(),
            rtype: DNSResourceType::RRSIG,
            rclass: class,
            ttl,
            rdata: DNSResourceData::Rrsig(self),
        }
    }
}

impl WireComponent for Rrsig {
    fn write(&self, writer: &mut WireWriter<'_>) -> Result<()> {
        self.write_unsigned(writer, false)?;
        writer.write_bytes(&self.signature)?;
        Ok(())
    }
}

/// Value of the RRSIG Labels field for an owner name: the root and a
/// leading wildcard label are not counted (RFC 4034 §3.1.3).
pub fn count_labels(owner: &[String]) -> u8 {
    let wildcard = owner.first().is_some_and(|label| label == "*");
    let count = owner.len() - usize::from(wildcard);
    count.min(u8::MAX as usize) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dns::common::split_labels;

    fn sample() -> Rrsig {
        Rrsig {
            type_covered: DNSResourceType::A,
            algorithm: 8,
            labels: 2,
            original_ttl: 3600,
            expiration: 0x5000_0000,
            inception: 0x4F00_0000,
            key_tag: 9033,
            signer_name: split_labels("Example.net."),
            signature: vec![0xDE, 0xAD],
        }
    }

    #[test]
    fn test_count_labels() {
        assert_eq!(count_labels(&split_labels("www.example.com.")), 3);
        assert_eq!(count_labels(&split_labels("*.example.com.")), 2);
        assert_eq!(count_labels(&split_labels(".")), 0);
    }

    #[test]
    fn test_wire_layout() {
        let wire = sample().to_wire().unwrap();
        assert_eq!(&wire[..4], &[0, 1, 8, 2]);
        assert_eq!(&wire[4..8], &3600u32.to_be_bytes());
        assert_eq!(&wire[16..18], &9033u16.to_be_bytes());
        assert_eq!(&wire[18..31], b"\x07Example\x03net\x00");
        assert_eq!(&wire[31..], &[0xDE, 0xAD]);
    }

    #[test]
    fn test_unsigned_form_lowercases_signer() {
        let mut buf = Vec::new();
        {
            let mut writer = WireWriter::new(&mut buf);
            sample().write_unsigned(&mut writer, true).unwrap();
        }
        assert_eq!(buf.len(), 31);
        assert_eq!(&buf[18..], b"\x07example\x03net\x00");
    }

    #[test]
    fn test_into_resource() {
        let owner = split_labels("www.example.net");
        let rr = sample().into_resource(&owner, DNSResourceClass::IN, 300);
        assert_eq!(rr.rtype, DNSResourceType::RRSIG);
        assert_eq!(rr.fqdn(), "www.example.net.");
        assert_eq!(rr.rrsig().unwrap().signer_fqdn(), "Example.net.");
    }
}
