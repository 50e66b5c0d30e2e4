//! Data to be signed: the RRSIG RDATA followed by the covered RRset in
//! canonical form (RFC 4034 §3.1.8.1 and §6).

use bitstream_io::BitWrite;

use super::rrsig::Rrsig;
use crate::dns::common::{WireWriter, write_name};
use crate::dns::enums::DNSResourceType;
use crate::dns::resource::DNSResource;
use crate::error::{Result, SignError};

pub struct Tbs(Vec<u8>);

impl Tbs {
    /// Build the signing input for `records` under the metadata in `rrsig`.
    ///
    /// Records are put in canonical RDATA order and exact duplicates are
    /// dropped. Every record is emitted with the RRSIG's original TTL.
    pub fn new(rrsig: &Rrsig, records: &[DNSResource]) -> Result<Self> {
        let mut canonical = records
            .iter()
            .map(|rr| -> Result<(&DNSResource, Vec<u8>)> {
                Ok((rr, canonical_rdata(rr.rtype, &rr.rdata_bytes()?)?))
            })
            .collect::<Result<Vec<_>>>()?;
        canonical.sort_by(|a, b| a.1.cmp(&b.1));
        canonical.dedup_by(|a, b| a.1 == b.1);

        let mut buf = Vec::with_capacity(512);
        {
            let mut writer = WireWriter::new(&mut buf);
            rrsig.write_unsigned(&mut writer, true)?;

            for (rr, rdata) in &canonical {
                let rdlength = u16::try_from(rdata.len()).map_err(|_| {
                    SignError::Encoding(format!("RDATA of {} exceeds 65535 octets", rr.fqdn()))
                })?;
                write_name(&mut writer, &rr.labels, true)?;
                writer.write_var::<u16>(16, rrsig.type_covered.code())?;
                writer.write_var::<u16>(16, rr.rclass.into())?;
                writer.write_var::<u32>(32, rrsig.original_ttl)?;
                writer.write_var::<u16>(16, rdlength)?;
                writer.write_bytes(rdata)?;
            }
        }

        Ok(Self(buf))
    }
}

impl AsRef<[u8]> for Tbs {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

/// Lowercase the domain names embedded in RDATA for the types listed in
/// RFC 4034 §6.2 (as narrowed by RFC 6840 §5.1) that this server carries.
pub fn canonical_rdata(rtype: DNSResourceType, rdata: &[u8]) -> Result<Vec<u8>> {
    let mut out = rdata.to_vec();
    match rtype {
        DNSResourceType::NS
        | DNSResourceType::CNAME
        | DNSResourceType::PTR
        | DNSResourceType::DNAME => {
            lowercase_name_at(&mut out, 0)?;
        }
        DNSResourceType::MX | DNSResourceType::AFSDB | DNSResourceType::KX => {
            lowercase_name_at(&mut out, 2)?;
        }
        DNSResourceType::SRV => {
            lowercase_name_at(&mut out, 6)?;
        }
        DNSResourceType::SOA | DNSResourceType::RP => {
            let end = lowercase_name_at(&mut out, 0)?;
            lowercase_name_at(&mut out, end)?;
        }
        _ => {}
    }
    Ok(out)
}

/// Lowercase one uncompressed name starting at `offset`, returning the
/// offset just past it.
fn lowercase_name_at(buf: &mut [u8], mut offset: usize) -> Result<usize> {
    loop {
        let len = *buf
            .get(offset)
            .ok_or_else(|| SignError::Encoding("truncated name in RDATA".to_string()))?
            as usize;
        if len == 0 {
            return Ok(offset + 1);
        }
        if len & 0xC0 != 0 {
            return Err(SignError::Encoding(
                "compressed name in RDATA".to_string(),
            ));
        }
        let label = buf
            .get_mut(offset + 1..offset + 1 + len)
            .ok_or_else(|| SignError::Encoding("truncated label in RDATA".to_string()))?;
        label.make_ascii_lowercase();
        offset += 1 + len;
    }
}
