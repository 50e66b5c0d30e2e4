use std::cmp::Ordering;
use std::fmt;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum DNSResourceType {
    #[default]
    A,
    NS,
    CNAME,
    SOA,
    PTR,
    HINFO,
    MX,
    TXT,
    RP,
    AFSDB,
    AAAA,
    SRV,
    KX,
    DNAME,
    OPT,
    DS,
    SSHFP,
    RRSIG,
    NSEC,
    DNSKEY,
    NSEC3,
    NSEC3PARAM,
    TLSA,
    HTTPS,
    AXFR,
    ANY,
    CAA,
    /// Any type code without a dedicated variant. Kept verbatim so the
    /// signer covers the exact code the zone carries.
    Unknown(u16),
}

impl DNSResourceType {
    /// Numeric type code as carried on the wire.
    pub fn code(self) -> u16 {
        self.into()
    }

    /// Pseudo-types that never appear as signable zone data.
    pub fn is_pseudo(self) -> bool {
        matches!(self, Self::OPT | Self::AXFR | Self::ANY)
    }
}

impl From<u16> for DNSResourceType {
    fn from(value: u16) -> Self {
        match value {
            1 => DNSResourceType::A,
            2 => DNSResourceType::NS,
            5 => DNSResourceType::CNAME,
            6 => DNSResourceType::SOA,
            12 => DNSResourceType::PTR,
            13 => DNSResourceType::HINFO,
            15 => DNSResourceType::MX,
            16 => DNSResourceType::TXT,
            17 => DNSResourceType::RP,
            18 => DNSResourceType::AFSDB,
            28 => DNSResourceType::AAAA,
            33 => DNSResourceType::SRV,
            36 => DNSResourceType::KX,
            39 => DNSResourceType::DNAME,
            41 => DNSResourceType::OPT,
            43 => DNSResourceType::DS,
            44 => DNSResourceType::SSHFP,
            46 => DNSResourceType::RRSIG,
            47 => DNSResourceType::NSEC,
            48 => DNSResourceType::DNSKEY,
            50 => DNSResourceType::NSEC3,
            51 => DNSResourceType::NSEC3PARAM,
            52 => DNSResourceType::TLSA,
            65 => DNSResourceType::HTTPS,
            252 => DNSResourceType::AXFR,
            255 => DNSResourceType::ANY,
            257 => DNSResourceType::CAA,
            x => DNSResourceType::Unknown(x),
        }
    }
}

impl From<DNSResourceType> for u16 {
    fn from(rtype: DNSResourceType) -> Self {
        match rtype {
            DNSResourceType::A => 1,
            DNSResourceType::NS => 2,
            DNSResourceType::CNAME => 5,
            DNSResourceType::SOA => 6,
            DNSResourceType::PTR => 12,
            DNSResourceType::HINFO => 13,
            DNSResourceType::MX => 15,
            DNSResourceType::TXT => 16,
            DNSResourceType::RP => 17,
            DNSResourceType::AFSDB => 18,
            DNSResourceType::AAAA => 28,
            DNSResourceType::SRV => 33,
            DNSResourceType::KX => 36,
            DNSResourceType::DNAME => 39,
            DNSResourceType::OPT => 41,
            DNSResourceType::DS => 43,
            DNSResourceType::SSHFP => 44,
            DNSResourceType::RRSIG => 46,
            DNSResourceType::NSEC => 47,
            DNSResourceType::DNSKEY => 48,
            DNSResourceType::NSEC3 => 50,
            DNSResourceType::NSEC3PARAM => 51,
            DNSResourceType::TLSA => 52,
            DNSResourceType::HTTPS => 65,
            DNSResourceType::AXFR => 252,
            DNSResourceType::ANY => 255,
            DNSResourceType::CAA => 257,
            DNSResourceType::Unknown(x) => x,
        }
    }
}

// Types order by their numeric code, which is the order type bit maps and
// canonical type sequences use.
impl Ord for DNSResourceType {
    fn cmp(&self, other: &Self) -> Ordering {
        self.code().cmp(&other.code())
    }
}

impl PartialOrd for DNSResourceType {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for DNSResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unknown(code) => write!(f, "TYPE{}", code),
            other => write!(f, "{:?}", other),
        }
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum DNSResourceClass {
    #[default]
    IN,
    CS,
    CH,
    HS,
    /// Class field reused for something else, e.g. the OPT payload size.
    Other(u16),
}

impl From<u16> for DNSResourceClass {
    fn from(value: u16) -> Self {
        match value {
            1 => DNSResourceClass::IN,
            2 => DNSResourceClass::CS,
            3 => DNSResourceClass::CH,
            4 => DNSResourceClass::HS,
            x => DNSResourceClass::Other(x),
        }
    }
}

impl From<DNSResourceClass> for u16 {
    fn from(class: DNSResourceClass) -> Self {
        match class {
            DNSResourceClass::IN => 1,
            DNSResourceClass::CS => 2,
            DNSResourceClass::CH => 3,
            DNSResourceClass::HS => 4,
            DNSResourceClass::Other(x) => x,
        }
    }
}

/// Response codes a transaction can end with (RFC 1035, RFC 2136)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum ResponseCode {
    NoError = 0,
    FormatError = 1,
    ServerFailure = 2,
    NameError = 3,
    NotImplemented = 4,
    Refused = 5,
    YXDomain = 6,
    YXRRSet = 7,
    NXRRSet = 8,
    NotAuth = 9,
    NotZone = 10,
}

impl ResponseCode {
    pub fn to_u8(self) -> u8 {
        self as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_code_mapping() {
        assert_eq!(DNSResourceType::from(48), DNSResourceType::DNSKEY);
        assert_eq!(DNSResourceType::DNSKEY.code(), 48);
        assert_eq!(DNSResourceType::from(255), DNSResourceType::ANY);
        assert_eq!(DNSResourceType::from(50), DNSResourceType::NSEC3);
    }

    #[test]
    fn test_unknown_type_is_preserved() {
        let rtype = DNSResourceType::from(65280);
        assert_eq!(rtype, DNSResourceType::Unknown(65280));
        assert_eq!(rtype.code(), 65280);
        assert_eq!(rtype.to_string(), "TYPE65280");
    }

    #[test]
    fn test_types_order_by_code() {
        assert!(DNSResourceType::A < DNSResourceType::NS);
        assert!(DNSResourceType::RRSIG < DNSResourceType::DNSKEY);
        assert!(DNSResourceType::ANY < DNSResourceType::CAA);
        assert!(DNSResourceType::Unknown(100) > DNSResourceType::HTTPS);
    }

    #[test]
    fn test_class_round_trip_keeps_raw_value() {
        assert_eq!(u16::from(DNSResourceClass::from(1232)), 1232);
        assert_eq!(DNSResourceClass::from(1), DNSResourceClass::IN);
    }
}
