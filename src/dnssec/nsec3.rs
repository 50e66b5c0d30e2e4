use base32::Alphabet;
use ring::digest;
use tracing::trace;

use crate::dns::common::{name_to_wire, split_labels};
use crate::error::{Result, SignError};

/// The only NSEC3 hash algorithm defined (RFC 5155 §11)
pub const NSEC3_HASH_SHA1: u8 = 1;

/// Upper bound on extra hash iterations accepted from configuration
pub const MAX_NSEC3_ITERATIONS: u16 = 2500;

const UPPER: Alphabet = Alphabet::Rfc4648Hex { padding: false };
const LOWER: Alphabet = Alphabet::Rfc4648HexLower { padding: false };

/// Successor of a base32hex-encoded NSEC3 hash.
///
/// NSEC3 ranges are half-open, so covering exactly the owner hash `h` takes
/// the range `[h, step(h))`. The hash is treated as a big-endian unsigned
/// integer and incremented by one; the all-ones hash wraps to all zeros.
/// The base32hex alphabet sorts like the bytes it encodes, so the result is
/// also the lexicographic successor of the input. Case is preserved.
pub fn step_hash(hash: &str) -> Result<String> {
    if hash.is_empty() {
        return Ok(String::new());
    }

    let mut bytes = decode_hash(hash)?;
    for byte in bytes.iter_mut().rev() {
        *byte = byte.wrapping_add(1);
        if *byte != 0 {
            break;
        }
    }

    let lowercase = hash.bytes().any(|b| b.is_ascii_lowercase());
    let stepped = base32::encode(if lowercase { LOWER } else { UPPER }, &bytes);
    trace!("stepped NSEC3 hash {} -> {}", hash, stepped);
    Ok(stepped)
}

/// Hashed owner name (RFC 5155 §5), base32hex-encoded in lowercase
pub fn nsec3_hash(name: &str, salt: &[u8], iterations: u16) -> Result<String> {
    if iterations > MAX_NSEC3_ITERATIONS {
        return Err(SignError::Encoding(format!(
            "{} NSEC3 iterations exceeds the limit of {}",
            iterations, MAX_NSEC3_ITERATIONS
        )));
    }

    let wire = name_to_wire(&split_labels(name), true)?;
    let mut input = wire;
    input.extend_from_slice(salt);
    let mut hash = digest::digest(&digest::SHA1_FOR_LEGACY_USE_ONLY, &input);

    for _ in 0..iterations {
        let mut next = hash.as_ref().to_vec();
        next.extend_from_slice(salt);
        hash = digest::digest(&digest::SHA1_FOR_LEGACY_USE_ONLY, &next);
    }

    Ok(base32::encode(LOWER, hash.as_ref()))
}

/// Decode a hash that must fill whole 40-bit base32 groups, so re-encoding
/// gives back the same width.
fn decode_hash(hash: &str) -> Result<Vec<u8>> {
    if hash.len() % 8 != 0 {
        return Err(SignError::MalformedHashInput(format!(
            "{}: length {} is not a multiple of 8",
            hash,
            hash.len()
        )));
    }
    let upper = hash.to_ascii_uppercase();
    if !upper
        .bytes()
        .all(|b| b.is_ascii_digit() || (b'A'..=b'V').contains(&b))
    {
        return Err(SignError::MalformedHashInput(format!(
            "{}: not base32hex",
            hash
        )));
    }
    base32::decode(UPPER, &upper)
        .ok_or_else(|| SignError::MalformedHashInput(hash.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_empty() {
        assert_eq!(step_hash("").unwrap(), "");
    }

    #[test]
    fn test_step_increments_last_symbol() {
        assert_eq!(
            step_hash("0P9MHAVEQVM6T7VBL5LOP2U3T2RP3TOM").unwrap(),
            "0P9MHAVEQVM6T7VBL5LOP2U3T2RP3TON"
        );
        assert_eq!(step_hash("00000000").unwrap(), "00000001");
    }

    #[test]
    fn test_step_preserves_lowercase() {
        assert_eq!(
            step_hash("0p9mhaveqvm6t7vbl5lop2u3t2rp3tom").unwrap(),
            "0p9mhaveqvm6t7vbl5lop2u3t2rp3ton"
        );
    }

    #[test]
    fn test_step_carries() {
        assert_eq!(step_hash("0000000V").unwrap(), "00000010");
        assert_eq!(step_hash("0VVVVVVV").unwrap(), "10000000");
    }

    #[test]
    fn test_step_wraps_all_max() {
        assert_eq!(step_hash("VVVVVVVV").unwrap(), "00000000");
        assert_eq!(step_hash(&"v".repeat(32)).unwrap(), "0".repeat(32));
    }

    #[test]
    fn test_step_rejects_malformed() {
        assert!(matches!(
            step_hash("WXYZ0000"),
            Err(SignError::MalformedHashInput(_))
        ));
        assert!(matches!(
            step_hash("0000"),
            Err(SignError::MalformedHashInput(_))
        ));
        assert!(matches!(
            step_hash("0000000="),
            Err(SignError::MalformedHashInput(_))
        ));
    }

    #[test]
    fn test_nsec3_hash_rfc5155_vectors() {
        let salt = hex::decode("aabbccdd").unwrap();
        assert_eq!(
            nsec3_hash("example", &salt, 12).unwrap(),
            "0p9mhaveqvm6t7vbl5lop2u3t2rp3tom"
        );
        assert_eq!(
            nsec3_hash("A.Example.", &salt, 12).unwrap(),
            "35mthgpgcu1qg68fab165klnsnk3dpvl"
        );
    }

    #[test]
    fn test_stepped_hash_sorts_after() {
        let hash = nsec3_hash("example", &[], 0).unwrap();
        let next = step_hash(&hash).unwrap();
        assert!(next > hash);
        assert_eq!(next.len(), hash.len());
    }
}
