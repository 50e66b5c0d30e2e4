use super::common::split_labels;
use super::enums::{DNSResourceClass, DNSResourceType};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DNSQuestion {
    pub labels: Vec<String>,
    pub qtype: DNSResourceType,
    pub qclass: DNSResourceClass,
}

impl DNSQuestion {
    pub fn new(name: &str, qtype: DNSResourceType) -> Self {
        Self {
            labels: split_labels(name),
            qtype,
            qclass: DNSResourceClass::IN,
        }
    }
}
