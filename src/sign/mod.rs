//! Online DNSSEC signing of responses.
//!
//! Signatures are computed per query from the key material in
//! [`DnssecConfig`](crate::config::DnssecConfig) instead of being stored with
//! the zone.

pub mod rrset;
pub mod section;

pub use section::{Section, is_type_contiguous, should_sign_type};

use tracing::{debug, warn};

use crate::error::Result;
use crate::transaction::Transaction;

impl Transaction {
    /// Append RRSIGs to the answer and authority sections of the response.
    ///
    /// Does nothing unless the client set the DO bit and the zone has a KSK.
    /// Records in the additional section are not signed. Stops at the first
    /// error without removing signatures already added; the caller must not
    /// send such a response as-is.
    pub fn sign_response(&mut self) -> Result<()> {
        if !self.dnssec_requested() {
            return Ok(());
        }

        for section in [Section::Answer, Section::Authority] {
            if let Err(e) = self.sign_section(section) {
                warn!("failed to sign {:?} section: {}", section, e);
                return Err(e);
            }
        }

        debug!(
            "signed response {}: {} answers, {} authorities",
            self.response.header.id,
            self.response.answers.len(),
            self.response.authorities.len()
        );
        Ok(())
    }
}
