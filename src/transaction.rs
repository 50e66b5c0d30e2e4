use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::trace;

use crate::config::DnssecConfig;
use crate::dns::DNSPacket;
use crate::dns::enums::DNSResourceType;
use crate::dns::resource::DNSResource;

/// State for answering one query. Never shared between queries; the key
/// material is the only thing transactions have in common and it is
/// read-only.
#[derive(Debug, Clone)]
pub struct Transaction {
    /// Type asked for in the question
    pub qtype: DNSResourceType,
    pub request: DNSPacket,
    /// Response under construction
    pub response: DNSPacket,
    /// First error code recorded for the response, 0 while unset
    pub rcode: u8,
    /// SOA of the zone answering; its owner signs every RRSIG
    pub soa: DNSResource,
    config: Arc<DnssecConfig>,
    /// Fixed signing time for testing
    signing_time: Option<DateTime<Utc>>,
}

impl Transaction {
    pub fn new(request: DNSPacket, soa: DNSResource, config: Arc<DnssecConfig>) -> Self {
        let qtype = request.qtype().unwrap_or_default();
        let response = DNSPacket::response_to(&request);
        Self {
            qtype,
            request,
            response,
            rcode: 0,
            soa,
            config,
            signing_time: None,
        }
    }

    pub fn config(&self) -> &DnssecConfig {
        &self.config
    }

    /// Set the signing time for testing
    pub fn set_signing_time(&mut self, now: DateTime<Utc>) {
        self.signing_time = Some(now);
    }

    pub(crate) fn signing_time(&self) -> DateTime<Utc> {
        self.signing_time.unwrap_or_else(Utc::now)
    }

    /// Whether the query should be treated as asking for `rtype`: true for
    /// an exact match and for ANY queries.
    pub fn matches_type(&self, rtype: DNSResourceType) -> bool {
        self.qtype == rtype || self.qtype == DNSResourceType::ANY
    }

    /// Whether the client asked for DNSSEC records and the zone can sign
    pub fn dnssec_requested(&self) -> bool {
        if !self.config.is_enabled() {
            return false;
        }
        match self.request.edns() {
            Some(opt) => opt.do_flag(),
            None => false,
        }
    }

    /// Record an error code for the response. Only the first error sticks,
    /// so the client sees the code of whatever failed first.
    pub fn record_failure(&mut self, code: u8) {
        if self.rcode == 0 {
            trace!("response code set to {}", code);
            self.rcode = code;
        }
    }

    /// Finished response carrying the recorded code
    pub fn into_response(self) -> DNSPacket {
        let mut response = self.response;
        response.header.rcode = self.rcode;
        response
    }
}
