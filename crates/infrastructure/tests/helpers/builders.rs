#![allow(dead_code)]
use rootwalk_domain::{Header, RecordType};
use rootwalk_infrastructure::dns::wire::{encode_name, MessageBuilder};
use std::net::Ipv4Addr;

const CLASS_IN: u16 = 1;
const RESPONSE_FLAG: u16 = 0x8000;
const RCODE_NXDOMAIN: u16 = 3;

/// Builds uncompressed response messages section by section.
pub struct ResponseBuilder {
    id: u16,
    flags: u16,
    question: Option<(String, RecordType)>,
    answers: Vec<Vec<u8>>,
    authorities: Vec<Vec<u8>>,
    additionals: Vec<Vec<u8>>,
}

impl ResponseBuilder {
    pub fn new(domain: &str, record_type: RecordType) -> Self {
        Self {
            id: 0,
            flags: RESPONSE_FLAG,
            question: Some((domain.to_string(), record_type)),
            answers: Vec::new(),
            authorities: Vec::new(),
            additionals: Vec::new(),
        }
    }

    pub fn id(mut self, id: u16) -> Self {
        self.id = id;
        self
    }

    pub fn nxdomain(mut self) -> Self {
        self.flags |= RCODE_NXDOMAIN;
        self
    }

    pub fn answer_a(mut self, name: &str, ip: &str) -> Self {
        self.answers.push(a_record(name, ip));
        self
    }

    pub fn answer_ns(mut self, name: &str, ns: &str) -> Self {
        self.answers.push(ns_record(name, ns));
        self
    }

    pub fn answer_raw(mut self, name: &str, record_type: RecordType, data: &[u8]) -> Self {
        self.answers.push(record(name, record_type, data));
        self
    }

    pub fn authority_ns(mut self, zone: &str, ns: &str) -> Self {
        self.authorities.push(ns_record(zone, ns));
        self
    }

    pub fn authority_raw(mut self, name: &str, record_type: RecordType, data: &[u8]) -> Self {
        self.authorities.push(record(name, record_type, data));
        self
    }

    pub fn additional_a(mut self, name: &str, ip: &str) -> Self {
        self.additionals.push(a_record(name, ip));
        self
    }

    pub fn additional_raw(mut self, name: &str, record_type: RecordType, data: &[u8]) -> Self {
        self.additionals.push(record(name, record_type, data));
        self
    }

    pub fn build(self) -> Vec<u8> {
        let header = Header {
            id: self.id,
            flags: self.flags,
            num_questions: self.question.is_some() as u16,
            num_answers: self.answers.len() as u16,
            num_authorities: self.authorities.len() as u16,
            num_additionals: self.additionals.len() as u16,
        };

        let mut out = MessageBuilder::encode_header(&header).to_vec();
        if let Some((domain, record_type)) = &self.question {
            out.extend(encode_name(domain).unwrap());
            out.extend(record_type.to_u16().to_be_bytes());
            out.extend(CLASS_IN.to_be_bytes());
        }
        for section in [&self.answers, &self.authorities, &self.additionals] {
            for rr in section {
                out.extend(rr);
            }
        }
        out
    }
}

pub fn record(name: &str, record_type: RecordType, data: &[u8]) -> Vec<u8> {
    let mut out = encode_name(name).unwrap();
    out.extend(record_type.to_u16().to_be_bytes());
    out.extend(CLASS_IN.to_be_bytes());
    out.extend(3600u32.to_be_bytes());
    out.extend((data.len() as u16).to_be_bytes());
    out.extend(data);
    out
}

pub fn a_record(name: &str, ip: &str) -> Vec<u8> {
    let ip: Ipv4Addr = ip.parse().unwrap();
    record(name, RecordType::A, &ip.octets())
}

pub fn ns_record(name: &str, ns: &str) -> Vec<u8> {
    record(name, RecordType::NS, &encode_name(ns).unwrap())
}
