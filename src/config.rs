use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::Deserialize;
use tracing::{debug, info};

use crate::dns::common::{WireComponent, split_labels};
use crate::dns::enums::DNSResourceType;
use crate::dns::resource::{DNSResource, DNSResourceData};
use crate::dnssec::dnskey::{Dnskey, KSK_FLAGS, ZSK_FLAGS};
use crate::dnssec::signing_key::{RsaSha256SigningKey, SigningKey};
use crate::error::{ConfigError, KeyRole};

/// One zone key: the published DNSKEY plus the private half that signs.
#[derive(Clone)]
pub struct ZoneKey {
    dnskey: Dnskey,
    key_tag: u16,
    signer: Arc<dyn SigningKey>,
}

impl ZoneKey {
    pub fn new(flags: u16, signer: Arc<dyn SigningKey>) -> Self {
        let dnskey = Dnskey::new(flags, signer.algorithm(), signer.public_key());
        let key_tag = dnskey.key_tag();
        Self {
            dnskey,
            key_tag,
            signer,
        }
    }

    /// Load an RSA/SHA-256 key from a DER-encoded PKCS#8 file
    pub fn from_pkcs8_file(path: &Path, flags: u16) -> Result<Self, ConfigError> {
        let der = std::fs::read(path)
            .map_err(|e| ConfigError::Io(format!("{}: {}", path.display(), e)))?;
        let signer = RsaSha256SigningKey::from_pkcs8(&der)
            .map_err(|_| ConfigError::InvalidKey(path.display().to_string()))?;
        Ok(Self::new(flags, Arc::new(signer)))
    }

    pub fn dnskey(&self) -> &Dnskey {
        &self.dnskey
    }

    pub fn key_tag(&self) -> u16 {
        self.key_tag
    }

    pub fn signer(&self) -> &dyn SigningKey {
        self.signer.as_ref()
    }
}

impl fmt::Debug for ZoneKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ZoneKey")
            .field("flags", &self.dnskey.flags)
            .field("algorithm", &self.dnskey.algorithm)
            .field("key_tag", &self.key_tag)
            .finish()
    }
}

/// Key material available to every transaction. Loaded once and never
/// mutated; a zone without a KSK is served unsigned.
#[derive(Debug, Clone, Default)]
pub struct DnssecConfig {
    pub ksk: Option<ZoneKey>,
    pub zsk: Option<ZoneKey>,
}

impl DnssecConfig {
    pub fn new(ksk: Option<ZoneKey>, zsk: Option<ZoneKey>) -> Result<Self, ConfigError> {
        if ksk.is_some() && zsk.is_none() {
            return Err(ConfigError::MissingZoneSigningKey);
        }
        for key in ksk.iter().chain(zsk.iter()) {
            let algorithm = key.signer().algorithm();
            if !algorithm.can_sign() {
                return Err(ConfigError::UnsupportedAlgorithm(algorithm.to_u8()));
            }
        }
        Ok(Self { ksk, zsk })
    }

    /// Configuration for a zone served without DNSSEC
    pub fn disabled() -> Self {
        Self::default()
    }

    pub fn is_enabled(&self) -> bool {
        self.ksk.is_some()
    }

    pub fn key(&self, role: KeyRole) -> Option<&ZoneKey> {
        match role {
            KeyRole::KeySigning => self.ksk.as_ref(),
            KeyRole::ZoneSigning => self.zsk.as_ref(),
        }
    }

    /// DNSKEY RRset to publish at the zone apex
    pub fn dnskey_rrset(&self, apex: &str, ttl: u32) -> crate::error::Result<Vec<DNSResource>> {
        self.ksk
            .iter()
            .chain(self.zsk.iter())
            .map(|key| -> crate::error::Result<DNSResource> {
                Ok(DNSResource {
                    labels: split_labels(apex),
                    rtype: DNSResourceType::DNSKEY,
                    ttl,
                    rdata: DNSResourceData::Raw(key.dnskey().to_wire()?),
                    ..DNSResource::default()
                })
            })
            .collect()
    }
}

/// Where signing keys come from. Read from a TOML file or from the
/// `HEIMDALL_DNSSEC_*` environment variables.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SignerSettings {
    /// PKCS#8 DER file holding the key-signing key
    pub ksk_private_key: Option<PathBuf>,

    /// PKCS#8 DER file holding the zone-signing key
    pub zsk_private_key: Option<PathBuf>,

    /// DNSKEY flags published for the KSK
    pub ksk_flags: u16,

    /// DNSKEY flags published for the ZSK
    pub zsk_flags: u16,
}

impl Default for SignerSettings {
    fn default() -> Self {
        Self {
            ksk_private_key: None,
            zsk_private_key: None,
            ksk_flags: KSK_FLAGS,
            zsk_flags: ZSK_FLAGS,
        }
    }
}

impl SignerSettings {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from any variable source, falling back to defaults
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut settings = Self::default();

        if let Some(path) = lookup("HEIMDALL_DNSSEC_KSK_FILE") {
            settings.ksk_private_key = Some(PathBuf::from(path));
        }

        if let Some(path) = lookup("HEIMDALL_DNSSEC_ZSK_FILE") {
            settings.zsk_private_key = Some(PathBuf::from(path));
        }

        if let Some(flags) = lookup("HEIMDALL_DNSSEC_KSK_FLAGS") {
            settings.ksk_flags = flags
                .parse::<u16>()
                .map_err(|_| ConfigError::Parse(format!("Invalid KSK flags: {}", flags)))?;
        }

        if let Some(flags) = lookup("HEIMDALL_DNSSEC_ZSK_FLAGS") {
            settings.zsk_flags = flags
                .parse::<u16>()
                .map_err(|_| ConfigError::Parse(format!("Invalid ZSK flags: {}", flags)))?;
        }

        settings.validate()?;
        Ok(settings)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(format!("{}: {}", path.display(), e)))?;
        let settings: SignerSettings =
            toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.ksk_private_key.is_some() && self.zsk_private_key.is_none() {
            return Err(ConfigError::MissingZoneSigningKey);
        }
        Ok(())
    }

    /// Read the key files. Without a KSK the zone is served unsigned.
    pub fn load(&self) -> Result<DnssecConfig, ConfigError> {
        self.validate()?;

        let ksk = self
            .ksk_private_key
            .as_deref()
            .map(|path| ZoneKey::from_pkcs8_file(path, self.ksk_flags))
            .transpose()?;
        let zsk = self
            .zsk_private_key
            .as_deref()
            .map(|path| ZoneKey::from_pkcs8_file(path, self.zsk_flags))
            .transpose()?;

        match (&ksk, &zsk) {
            (Some(k), Some(z)) => info!(
                "DNSSEC online signing enabled: KSK tag {}, ZSK tag {}",
                k.key_tag(),
                z.key_tag()
            ),
            _ => debug!("No KSK configured, responses will not be signed"),
        }

        DnssecConfig::new(ksk, zsk)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_default_settings_are_valid() {
        let settings = SignerSettings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.ksk_flags, 257);
        assert_eq!(settings.zsk_flags, 256);
    }

    #[test]
    fn test_default_settings_load_disabled() {
        let config = SignerSettings::default().load().unwrap();
        assert!(!config.is_enabled());
        assert!(config.dnskey_rrset("example.com", 3600).unwrap().is_empty());
    }

    #[test]
    fn test_ksk_without_zsk_rejected() {
        let settings = SignerSettings {
            ksk_private_key: Some(PathBuf::from("ksk.pk8")),
            ..Default::default()
        };
        assert_eq!(settings.validate(), Err(ConfigError::MissingZoneSigningKey));
    }

    #[test]
    fn test_from_lookup() {
        let settings = SignerSettings::from_lookup(lookup(&[
            ("HEIMDALL_DNSSEC_KSK_FILE", "/etc/heimdall/ksk.pk8"),
            ("HEIMDALL_DNSSEC_ZSK_FILE", "/etc/heimdall/zsk.pk8"),
            ("HEIMDALL_DNSSEC_ZSK_FLAGS", "384"),
        ]))
        .unwrap();
        assert_eq!(
            settings.ksk_private_key,
            Some(PathBuf::from("/etc/heimdall/ksk.pk8"))
        );
        assert_eq!(settings.ksk_flags, 257);
        assert_eq!(settings.zsk_flags, 384);
    }

    #[test]
    fn test_from_lookup_bad_flags() {
        let result = SignerSettings::from_lookup(lookup(&[("HEIMDALL_DNSSEC_KSK_FLAGS", "ksk")]));
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_missing_key_file() {
        let settings = SignerSettings {
            ksk_private_key: Some(PathBuf::from("/nonexistent/ksk.pk8")),
            zsk_private_key: Some(PathBuf::from("/nonexistent/zsk.pk8")),
            ..Default::default()
        };
        assert!(matches!(settings.load(), Err(ConfigError::Io(_))));
    }
}
