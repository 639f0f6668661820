use super::question::class_name;
use crate::RecordType;
use std::fmt;
use std::net::Ipv4Addr;

/// Record payload, interpreted by record type at decode time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordData {
    /// `A` payload of exactly four bytes.
    Ipv4(Ipv4Addr),
    /// `NS` payload, a (possibly compressed) domain name.
    Name(String),
    /// Everything else, exactly `data_len` bytes.
    Opaque(Vec<u8>),
}

impl RecordData {
    pub fn as_ipv4(&self) -> Option<Ipv4Addr> {
        match self {
            RecordData::Ipv4(addr) => Some(*addr),
            _ => None,
        }
    }

    pub fn as_name(&self) -> Option<&str> {
        match self {
            RecordData::Name(name) => Some(name),
            _ => None,
        }
    }
}

impl fmt::Display for RecordData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordData::Ipv4(addr) => write!(f, "{}", addr),
            RecordData::Name(name) => write!(f, "{}.", name),
            RecordData::Opaque(bytes) => {
                // RFC 3597 generic presentation
                write!(f, "\\# {}", bytes.len())?;
                if !bytes.is_empty() {
                    write!(f, " ")?;
                    for b in bytes {
                        write!(f, "{:02x}", b)?;
                    }
                }
                Ok(())
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub name: String,
    pub record_type: RecordType,
    pub class: u16,
    pub ttl: u32,
    pub data: RecordData,
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.\t{}\t{}\t{}\t{}",
            self.name,
            self.ttl,
            class_name(self.class),
            self.record_type,
            self.data
        )
    }
}
