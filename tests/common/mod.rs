//! Shared helpers for the signing integration tests

#![allow(dead_code)] // Not every test file uses every helper

use std::path::PathBuf;
use std::sync::Arc;

use heimdall_signer::config::{DnssecConfig, ZoneKey};
use heimdall_signer::dns::DNSPacket;
use heimdall_signer::dns::edns::EdnsOpt;
use heimdall_signer::dns::enums::DNSResourceType;
use heimdall_signer::dns::resource::DNSResource;
use heimdall_signer::dnssec::algorithm::DnsSecAlgorithm;
use heimdall_signer::dnssec::dnskey::{KSK_FLAGS, ZSK_FLAGS};
use heimdall_signer::dnssec::signing_key::SigningKey;
use heimdall_signer::dnssec::tbs::Tbs;
use heimdall_signer::error::SignError;
use heimdall_signer::transaction::Transaction;
use ring::digest;

pub const ZONE: &str = "example.com";

/// Deterministic stand-in for an RSA key: the "signature" is the SHA-256
/// of the signing input, so tests can check exactly what was signed.
pub struct DigestKey {
    public: Vec<u8>,
    fail: bool,
}

impl DigestKey {
    pub fn new(public: &[u8]) -> Self {
        Self {
            public: public.to_vec(),
            fail: false,
        }
    }

    pub fn failing(public: &[u8]) -> Self {
        Self {
            public: public.to_vec(),
            fail: true,
        }
    }
}

impl SigningKey for DigestKey {
    fn algorithm(&self) -> DnsSecAlgorithm {
        DnsSecAlgorithm::RsaSha256
    }

    fn sign(&self, tbs: &Tbs) -> Result<Vec<u8>, SignError> {
        if self.fail {
            return Err(SignError::Signing("key material corrupted".to_string()));
        }
        Ok(digest::digest(&digest::SHA256, tbs.as_ref()).as_ref().to_vec())
    }

    fn public_key(&self) -> Vec<u8> {
        self.public.clone()
    }
}

pub fn ksk() -> ZoneKey {
    ZoneKey::new(KSK_FLAGS, Arc::new(DigestKey::new(b"key-signing key")))
}

pub fn zsk() -> ZoneKey {
    ZoneKey::new(ZSK_FLAGS, Arc::new(DigestKey::new(b"zone-signing key")))
}

pub fn signing_config() -> Arc<DnssecConfig> {
    Arc::new(DnssecConfig::new(Some(ksk()), Some(zsk())).unwrap())
}

/// ZSK only: the zone has DNSSEC turned off
pub fn zsk_only_config() -> Arc<DnssecConfig> {
    Arc::new(DnssecConfig::new(None, Some(zsk())).unwrap())
}

pub fn soa() -> DNSResource {
    DNSResource::new(ZONE, DNSResourceType::SOA, 3600, soa_rdata())
}

fn soa_rdata() -> Vec<u8> {
    let mut rdata = b"\x03ns1\x07example\x03com\x00\x0ahostmaster\x07example\x03com\x00".to_vec();
    for value in [2024010101u32, 7200, 3600, 1209600, 300] {
        rdata.extend_from_slice(&value.to_be_bytes());
    }
    rdata
}

pub fn a(name: &str, ttl: u32, last_octet: u8) -> DNSResource {
    DNSResource::new(name, DNSResourceType::A, ttl, vec![192, 0, 2, last_octet])
}

pub fn txt(name: &str, ttl: u32, text: &str) -> DNSResource {
    let mut rdata = vec![text.len() as u8];
    rdata.extend_from_slice(text.as_bytes());
    DNSResource::new(name, DNSResourceType::TXT, ttl, rdata)
}

pub fn ns(name: &str, ttl: u32, target: &str) -> DNSResource {
    let mut rdata = Vec::new();
    for label in target.split('.').filter(|l| !l.is_empty()) {
        rdata.push(label.len() as u8);
        rdata.extend_from_slice(label.as_bytes());
    }
    rdata.push(0);
    DNSResource::new(name, DNSResourceType::NS, ttl, rdata)
}

pub fn dnskey_rrset(config: &DnssecConfig) -> Vec<DNSResource> {
    config.dnskey_rrset(ZONE, 3600).unwrap()
}

pub fn query(name: &str, qtype: DNSResourceType, dnssec_ok: bool) -> DNSPacket {
    let mut opt = EdnsOpt::new();
    opt.set_do_flag(dnssec_ok);
    DNSPacket::query(4242, name, qtype).with_edns(opt)
}

/// Transaction for a DO-bit query against `config`
pub fn transaction(config: Arc<DnssecConfig>, qtype: DNSResourceType) -> Transaction {
    Transaction::new(query("www.example.com", qtype, true), soa(), config)
}

pub fn rrsigs(records: &[DNSResource]) -> Vec<&DNSResource> {
    records
        .iter()
        .filter(|rr| rr.rtype == DNSResourceType::RRSIG)
        .collect()
}

pub fn test_data(file: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("test-data")
        .join(file)
}
