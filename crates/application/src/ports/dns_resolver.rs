use async_trait::async_trait;
use rootwalk_domain::{DnsQuery, DomainError, RecordData};
use std::net::Ipv4Addr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnsResolution {
    /// Payload of the first answer record matching the requested type.
    pub data: RecordData,
    /// Nameserver that supplied the answer.
    pub nameserver: Ipv4Addr,
    /// Queries sent to reach the answer, nested sub-resolutions included.
    pub queries_sent: usize,
}

impl DnsResolution {
    pub fn new(data: RecordData, nameserver: Ipv4Addr, queries_sent: usize) -> Self {
        Self {
            data,
            nameserver,
            queries_sent,
        }
    }
}

#[async_trait]
pub trait DnsResolver: Send + Sync {
    async fn resolve(&self, query: &DnsQuery) -> Result<DnsResolution, DomainError>;

    /// Short label used in logs ("iterative", "forwarding", ...).
    fn strategy_name(&self) -> &'static str;
}
