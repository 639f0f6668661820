use crate::ports::{DnsResolution, DnsResolver};
use rootwalk_domain::{DnsQuery, DomainError};
use std::sync::Arc;
use std::time::Instant;
use tracing::{info, warn};

const MAX_DOMAIN_LEN: usize = 253;
const MAX_LABEL_LEN: usize = 63;

/// Validates a user-supplied query and runs it through the configured resolver.
pub struct ResolveDomainUseCase {
    resolver: Arc<dyn DnsResolver>,
}

impl ResolveDomainUseCase {
    pub fn new(resolver: Arc<dyn DnsResolver>) -> Self {
        Self { resolver }
    }

    pub async fn execute(&self, query: &DnsQuery) -> Result<DnsResolution, DomainError> {
        let query = normalize(query)?;
        let start = Instant::now();

        match self.resolver.resolve(&query).await {
            Ok(resolution) => {
                info!(
                    domain = %query.domain,
                    record_type = %query.record_type,
                    answer = %resolution.data,
                    nameserver = %resolution.nameserver,
                    queries = resolution.queries_sent,
                    strategy = self.resolver.strategy_name(),
                    elapsed_ms = start.elapsed().as_millis() as u64,
                    "Resolution complete"
                );
                Ok(resolution)
            }
            Err(e) => {
                warn!(
                    domain = %query.domain,
                    record_type = %query.record_type,
                    strategy = self.resolver.strategy_name(),
                    elapsed_ms = start.elapsed().as_millis() as u64,
                    error = %e,
                    "Resolution failed"
                );
                Err(e)
            }
        }
    }
}

/// Trims whitespace and one trailing dot, then checks label shape.
fn normalize(query: &DnsQuery) -> Result<DnsQuery, DomainError> {
    let trimmed = query.domain.trim();
    let domain = trimmed.strip_suffix('.').unwrap_or(trimmed);

    if domain.is_empty() {
        return Err(DomainError::InvalidDomainName(
            "domain name is empty".to_string(),
        ));
    }
    if domain.len() > MAX_DOMAIN_LEN {
        return Err(DomainError::InvalidDomainName(format!(
            "'{}' is longer than {} characters",
            domain, MAX_DOMAIN_LEN
        )));
    }
    for label in domain.split('.') {
        if label.is_empty() {
            return Err(DomainError::InvalidDomainName(format!(
                "'{}' contains an empty label",
                domain
            )));
        }
        if label.len() > MAX_LABEL_LEN {
            return Err(DomainError::InvalidDomainName(format!(
                "label '{}' is longer than {} bytes",
                label, MAX_LABEL_LEN
            )));
        }
    }

    Ok(DnsQuery::new(domain, query.record_type))
}
