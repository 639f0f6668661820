use super::outcome::dead_end_error;
use crate::dns::client::NameserverClient;
use async_trait::async_trait;
use rootwalk_application::ports::{DnsResolution, DnsResolver};
use rootwalk_domain::{DnsQuery, DomainError};
use std::net::Ipv4Addr;
use tracing::info;

/// Sends the query to one recursive server and takes the first matching
/// answer, without walking the hierarchy.
pub struct ForwardingResolver {
    client: NameserverClient,
    server: Ipv4Addr,
}

impl ForwardingResolver {
    /// `client` should normally have the RD bit enabled.
    pub fn new(client: NameserverClient, server: Ipv4Addr) -> Self {
        info!(server = %server, "Forwarding resolver created");
        Self { client, server }
    }
}

#[async_trait]
impl DnsResolver for ForwardingResolver {
    async fn resolve(&self, query: &DnsQuery) -> Result<DnsResolution, DomainError> {
        let response = self
            .client
            .query(self.server, &query.domain, query.record_type)
            .await?;

        response
            .answers()
            .iter()
            .find(|record| record.record_type == query.record_type)
            .map(|record| DnsResolution::new(record.data.clone(), self.server, 1))
            .ok_or_else(|| dead_end_error(&response, &query.domain, self.server))
    }

    fn strategy_name(&self) -> &'static str {
        "forwarding"
    }
}
