use tracing::debug;

use crate::dns::resource::DNSResource;
use crate::dnssec::algorithm::DnsSecAlgorithm;
use crate::dnssec::rrsig::{Rrsig, count_labels};
use crate::dnssec::tbs::Tbs;
use crate::dnssec::validity::ValidityWindow;
use crate::error::{KeyRole, Result, SignError};
use crate::transaction::Transaction;

impl Transaction {
    /// Produce one RRSIG covering `records`, which must share owner, class
    /// and type. The KSK signs when `use_ksk` is set, the ZSK otherwise.
    pub fn sign_rrset(&self, records: &[DNSResource], use_ksk: bool) -> Result<DNSResource> {
        let first = records.first().ok_or(SignError::EmptyRRSet)?;

        let role = if use_ksk {
            KeyRole::KeySigning
        } else {
            KeyRole::ZoneSigning
        };
        let key = self.config().key(role).ok_or(SignError::MissingKey(role))?;

        let window = ValidityWindow::for_records(records, self.signing_time());
        debug!(
            "signing {} {} with {} {}: maxttl {}, inception {}, expiration {}",
            first.fqdn(),
            first.rtype,
            role,
            key.key_tag(),
            window.ttl,
            window.inception,
            window.expiration
        );

        let mut rrsig = Rrsig {
            type_covered: first.rtype,
            algorithm: DnsSecAlgorithm::SIGNING.to_u8(),
            labels: count_labels(&first.labels),
            original_ttl: window.ttl,
            expiration: window.expiration,
            inception: window.inception,
            key_tag: key.key_tag(),
            signer_name: self.soa.labels.clone(),
            signature: Vec::new(),
        };

        let tbs = Tbs::new(&rrsig, records)?;
        rrsig.signature = key.signer().sign(&tbs)?;

        Ok(rrsig.into_resource(&first.labels, first.rclass, window.ttl))
    }
}
