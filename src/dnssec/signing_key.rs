use ring::rand::SystemRandom;
use ring::signature::{RSA_PKCS1_SHA256, RsaKeyPair, RsaPublicKeyComponents};

use super::algorithm::DnsSecAlgorithm;
use super::tbs::Tbs;
use crate::error::{ConfigError, Result, SignError};

/// A private key able to produce RRSIG signatures.
///
/// Implementations receive the complete canonical signing input and return
/// the raw signature field.
pub trait SigningKey: Send + Sync {
    fn algorithm(&self) -> DnsSecAlgorithm;

    fn sign(&self, tbs: &Tbs) -> Result<Vec<u8>>;

    /// Public key in the DNSKEY encoding of the algorithm
    fn public_key(&self) -> Vec<u8>;
}

/// RSA/SHA-256 signing key pair backed by ring
pub struct RsaSha256SigningKey {
    inner: RsaKeyPair,
    rng: SystemRandom,
}

impl RsaSha256SigningKey {
    /// Decode a signing key pair from DER-encoded PKCS#8 bytes
    pub fn from_pkcs8(bytes: &[u8]) -> std::result::Result<Self, ConfigError> {
        let inner = RsaKeyPair::from_pkcs8(bytes)
            .map_err(|e| ConfigError::InvalidKey(format!("PKCS#8 RSA key rejected: {}", e)))?;
        Ok(Self {
            inner,
            rng: SystemRandom::new(),
        })
    }
}

impl SigningKey for RsaSha256SigningKey {
    fn algorithm(&self) -> DnsSecAlgorithm {
        DnsSecAlgorithm::RsaSha256
    }

    fn sign(&self, tbs: &Tbs) -> Result<Vec<u8>> {
        let mut signature = vec![0; self.inner.public().modulus_len()];
        self.inner
            .sign(&RSA_PKCS1_SHA256, &self.rng, tbs.as_ref(), &mut signature)
            .map_err(|e| SignError::Signing(format!("RSA/SHA-256: {}", e)))?;
        Ok(signature)
    }

    fn public_key(&self) -> Vec<u8> {
        let components = RsaPublicKeyComponents::<Vec<u8>>::from(self.inner.public());
        rsa_dnskey_public_key(&components.e, &components.n)
    }
}

/// RSA public key layout used by DNSKEY (RFC 3110 §2)
pub fn rsa_dnskey_public_key(exponent: &[u8], modulus: &[u8]) -> Vec<u8> {
    let mut encoded = Vec::with_capacity(3 + exponent.len() + modulus.len());
    if exponent.len() <= u8::MAX as usize {
        encoded.push(exponent.len() as u8);
    } else {
        encoded.push(0);
        encoded.extend_from_slice(&(exponent.len() as u16).to_be_bytes());
    }
    encoded.extend_from_slice(exponent);
    encoded.extend_from_slice(modulus);
    encoded
}
