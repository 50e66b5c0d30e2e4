use std::cmp::Ordering;

use crate::dns::enums::DNSResourceType;

/// Total order over type codes for `sort_by` and friends
pub fn compare_types(a: &u16, b: &u16) -> Ordering {
    a.cmp(b)
}

/// Sort and deduplicate type codes into canonical order
pub fn canonical_types(types: impl IntoIterator<Item = DNSResourceType>) -> Vec<u16> {
    let mut codes: Vec<u16> = types.into_iter().map(DNSResourceType::code).collect();
    codes.sort_by(compare_types);
    codes.dedup();
    codes
}

/// NSEC/NSEC3 type bit map (RFC 4034 §4.1.2): one block per 256-type
/// window holding only the octets up to the last set bit.
pub fn encode_type_bitmap(types: impl IntoIterator<Item = DNSResourceType>) -> Vec<u8> {
    let mut out = Vec::new();
    let mut window: Option<u8> = None;
    let mut bits = [0u8; 32];
    let mut used = 0usize;

    for code in canonical_types(types) {
        let [hi, lo] = code.to_be_bytes();
        if window != Some(hi) {
            if let Some(w) = window {
                flush_window(&mut out, w, &bits[..used]);
            }
            window = Some(hi);
            bits = [0u8; 32];
        }
        let octet = (lo / 8) as usize;
        bits[octet] |= 0x80 >> (lo % 8);
        used = octet + 1;
    }
    if let Some(w) = window {
        flush_window(&mut out, w, &bits[..used]);
    }
    out
}

fn flush_window(out: &mut Vec<u8>, window: u8, bits: &[u8]) {
    out.push(window);
    out.push(bits.len() as u8);
    out.extend_from_slice(bits);
}
