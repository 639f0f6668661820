use async_trait::async_trait;
use rootwalk_application::ports::{DnsResolution, DnsResolver};
use rootwalk_domain::{DnsQuery, DomainError, RecordData};
use std::collections::HashMap;
use std::net::Ipv4Addr;
use std::sync::{Arc, Mutex};

/// Resolver returning scripted results keyed by domain, recording every
/// query it is handed.
#[derive(Clone, Default)]
pub struct MockDnsResolver {
    responses: Arc<Mutex<HashMap<String, Result<DnsResolution, DomainError>>>>,
    seen: Arc<Mutex<Vec<DnsQuery>>>,
}

impl MockDnsResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_response(&self, domain: &str, resolution: DnsResolution) {
        self.responses
            .lock()
            .unwrap()
            .insert(domain.to_string(), Ok(resolution));
    }

    pub fn set_error(&self, domain: &str, error: DomainError) {
        self.responses
            .lock()
            .unwrap()
            .insert(domain.to_string(), Err(error));
    }

    pub fn seen(&self) -> Vec<DnsQuery> {
        self.seen.lock().unwrap().clone()
    }
}

#[async_trait]
impl DnsResolver for MockDnsResolver {
    async fn resolve(&self, query: &DnsQuery) -> Result<DnsResolution, DomainError> {
        self.seen.lock().unwrap().push(query.clone());
        self.responses
            .lock()
            .unwrap()
            .get(&*query.domain)
            .cloned()
            .unwrap_or_else(|| {
                Err(DomainError::NoUsableResponse {
                    domain: query.domain.to_string(),
                    nameserver: "198.41.0.4".to_string(),
                })
            })
    }

    fn strategy_name(&self) -> &'static str {
        "mock"
    }
}

pub fn resolution(ip: &str) -> DnsResolution {
    DnsResolution::new(
        RecordData::Ipv4(ip.parse().unwrap()),
        Ipv4Addr::new(199, 43, 135, 53),
        3,
    )
}
