pub mod common;
pub mod edns;
pub mod enums;
pub mod header;
pub mod question;
pub mod resource;

use edns::EdnsOpt;
use enums::DNSResourceType;
use header::DNSHeader;
use question::DNSQuestion;
use resource::DNSResource;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DNSPacket {
    pub header: DNSHeader,
    pub questions: Vec<DNSQuestion>,
    pub answers: Vec<DNSResource>,
    pub authorities: Vec<DNSResource>,
    pub resources: Vec<DNSResource>,
    /// EDNS0 OPT record if present (kept apart from the additional records)
    pub edns: Option<EdnsOpt>,
}

impl DNSPacket {
    /// Single-question query with recursion desired cleared, as sent to an
    /// authoritative server
    pub fn query(id: u16, name: &str, qtype: DNSResourceType) -> Self {
        Self {
            header: DNSHeader {
                id,
                ..DNSHeader::default()
            },
            questions: vec![DNSQuestion::new(name, qtype)],
            ..Self::default()
        }
    }

    pub fn with_edns(mut self, opt: EdnsOpt) -> Self {
        self.edns = Some(opt);
        self
    }

    /// Empty response echoing the request's id and question
    pub fn response_to(request: &DNSPacket) -> Self {
        Self {
            header: DNSHeader::response_to(&request.header),
            questions: request.questions.clone(),
            ..Self::default()
        }
    }

    /// Requested type of the first question, if any
    pub fn qtype(&self) -> Option<DNSResourceType> {
        self.questions.first().map(|q| q.qtype)
    }

    /// Extended options of the message. The OPT pseudo-record is looked up in
    /// the additional section when it was not split out already.
    pub fn edns(&self) -> Option<EdnsOpt> {
        self.edns.clone().or_else(|| {
            self.resources
                .iter()
                .find(|rr| rr.rtype == DNSResourceType::OPT)
                .and_then(EdnsOpt::from_resource)
        })
    }
}
