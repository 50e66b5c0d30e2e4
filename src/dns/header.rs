#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DNSHeader {
    pub id: u16,
    pub qr: bool,
    pub opcode: u8,
    pub aa: bool,
    pub tc: bool,
    pub rd: bool,
    pub ra: bool,
    /// Authenticated data (RFC 4035 §3.2.3)
    pub ad: bool,
    /// Checking disabled (RFC 4035 §3.2.2)
    pub cd: bool,
    pub rcode: u8,
}

impl DNSHeader {
    /// Header for an authoritative answer to `request`
    pub fn response_to(request: &DNSHeader) -> Self {
        Self {
            id: request.id,
            qr: true,
            opcode: request.opcode,
            aa: true,
            rd: request.rd,
            cd: request.cd,
            ..Self::default()
        }
    }
}
