//! Iterative resolution from the root zone down.
//!
//! Each step queries the current nameserver and classifies the response:
//! an answer ends the walk, glue moves to the supplied address, a name-only
//! referral resolves the nameserver's address with a nested walk from the
//! root, and anything else fails.

use super::budget::{ReferralTrail, ResolutionBudget};
use super::outcome::{classify, dead_end_error, ResponseOutcome};
use crate::dns::client::NameserverClient;
use async_trait::async_trait;
use futures::future::{BoxFuture, FutureExt};
use rootwalk_application::ports::{DnsResolution, DnsResolver};
use rootwalk_domain::{DnsQuery, DomainError, RecordData, RecordType, ResolverConfig};
use std::net::Ipv4Addr;
use tracing::{debug, info};

pub struct IterativeResolver {
    client: NameserverClient,
    root_server: Ipv4Addr,
    max_hops: usize,
    max_depth: usize,
}

impl IterativeResolver {
    pub fn new(client: NameserverClient, config: &ResolverConfig) -> Self {
        info!(
            root = %config.root_server,
            max_hops = config.max_hops,
            max_depth = config.max_depth,
            "Iterative resolver created"
        );

        Self {
            client,
            root_server: config.root_server,
            max_hops: config.max_hops,
            max_depth: config.max_depth,
        }
    }

    /// Walks from the root until `domain` resolves, returning the answer and
    /// the nameserver that gave it.
    fn walk<'a>(
        &'a self,
        domain: &'a str,
        record_type: RecordType,
        depth: usize,
        budget: &'a mut ResolutionBudget,
    ) -> BoxFuture<'a, Result<(RecordData, Ipv4Addr), DomainError>> {
        async move {
            let mut nameserver = self.root_server;
            let mut trail = ReferralTrail::new();

            loop {
                trail.visit(nameserver, domain, record_type)?;
                budget.charge_query(domain)?;
                let response = self.client.query(nameserver, domain, record_type).await?;

                match classify(&response, record_type) {
                    ResponseOutcome::Answer(data) => {
                        debug!(
                            domain = %domain,
                            record_type = %record_type,
                            nameserver = %nameserver,
                            answer = %data,
                            depth,
                            "Answer found"
                        );
                        return Ok((data.clone(), nameserver));
                    }
                    ResponseOutcome::Glue(next) => {
                        debug!(
                            domain = %domain,
                            from = %nameserver,
                            next = %next,
                            depth,
                            "Following referral with glue"
                        );
                        nameserver = next;
                    }
                    ResponseOutcome::Referral(ns_name) => {
                        budget.check_nesting(depth)?;
                        let ns_name = ns_name.to_string();

                        debug!(
                            domain = %domain,
                            from = %nameserver,
                            nameserver_name = %ns_name,
                            depth,
                            "Referral without glue, resolving nameserver address"
                        );

                        let (data, _) = self
                            .walk(&ns_name, RecordType::A, depth + 1, budget)
                            .await?;

                        nameserver = data.as_ipv4().ok_or_else(|| DomainError::NoUsableResponse {
                            domain: ns_name.clone(),
                            nameserver: nameserver.to_string(),
                        })?;
                    }
                    ResponseOutcome::DeadEnd => {
                        return Err(dead_end_error(&response, domain, nameserver));
                    }
                }
            }
        }
        .boxed()
    }
}

#[async_trait]
impl DnsResolver for IterativeResolver {
    async fn resolve(&self, query: &DnsQuery) -> Result<DnsResolution, DomainError> {
        let mut budget = ResolutionBudget::new(self.max_hops, self.max_depth);
        let (data, nameserver) = self
            .walk(&query.domain, query.record_type, 0, &mut budget)
            .await?;

        Ok(DnsResolution::new(data, nameserver, budget.queries_sent()))
    }

    fn strategy_name(&self) -> &'static str {
        "iterative"
    }
}
