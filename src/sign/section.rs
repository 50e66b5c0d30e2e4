use tracing::{debug, trace};

use crate::dns::enums::DNSResourceType;
use crate::dns::resource::DNSResource;
use crate::error::Result;
use crate::transaction::Transaction;

/// Response sections that carry signatures. The additional section is
/// never signed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Answer,
    Authority,
}

impl Section {
    pub fn is_authority(self) -> bool {
        self == Section::Authority
    }
}

/// Whether an RRset of `rtype` gets an RRSIG. OPT is a pseudo-record, and
/// NS records in the authority section are a delegation owned by the child
/// zone, so neither is signed.
pub fn should_sign_type(rtype: DNSResourceType, is_authority_section: bool) -> bool {
    match rtype {
        DNSResourceType::OPT => false,
        DNSResourceType::NS => !is_authority_section,
        _ => true,
    }
}

/// Whether every type occupies one contiguous run of `records`
pub fn is_type_contiguous(records: &[DNSResource]) -> bool {
    let mut seen = Vec::new();
    for run in records.chunk_by(|a, b| a.rtype == b.rtype) {
        let rtype = run[0].rtype;
        if seen.contains(&rtype) {
            return false;
        }
        seen.push(rtype);
    }
    true
}

impl Transaction {
    /// Append RRSIGs for every signable run of same-type records in
    /// `section`.
    ///
    /// Records of one type must already be contiguous: the section is split
    /// into runs as it stands and is never re-ordered. Signatures go after all
    /// of the original records, in run order. The first signing error stops
    /// the section; signatures produced before it are kept.
    pub fn sign_section(&mut self, section: Section) -> Result<()> {
        let records = std::mem::take(self.section_mut(section));
        if records.is_empty() {
            return Ok(());
        }
        if !is_type_contiguous(&records) {
            debug!(
                "{:?} section is not grouped by type, same-type records will be signed separately",
                section
            );
        }

        let mut signatures = Vec::new();
        let mut result = Ok(());
        for run in records.chunk_by(|a, b| a.rtype == b.rtype) {
            if let Err(e) = self.sign_run(run, section.is_authority(), &mut signatures) {
                result = Err(e);
                break;
            }
        }

        let target = self.section_mut(section);
        *target = records;
        target.append(&mut signatures);
        result
    }

    fn sign_run(
        &self,
        run: &[DNSResource],
        is_authority_section: bool,
        signatures: &mut Vec<DNSResource>,
    ) -> Result<()> {
        let rtype = run[0].rtype;
        if !should_sign_type(rtype, is_authority_section) {
            trace!("not signing {} run of {} records", rtype, run.len());
            return Ok(());
        }

        // DNSKEY is signed by both keys so validators trusting either succeed
        if rtype == DNSResourceType::DNSKEY && self.config().ksk.is_some() {
            signatures.push(self.sign_rrset(run, true)?);
        }
        signatures.push(self.sign_rrset(run, false)?);
        Ok(())
    }

    fn section_mut(&mut self, section: Section) -> &mut Vec<DNSResource> {
        match section {
            Section::Answer => &mut self.response.answers,
            Section::Authority => &mut self.response.authorities,
        }
    }
}
