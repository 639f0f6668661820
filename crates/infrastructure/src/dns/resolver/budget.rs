use rootwalk_domain::{DomainError, RecordType};
use std::collections::HashSet;
use std::net::Ipv4Addr;
use std::sync::Arc;

/// Termination guard shared by one resolution and all of its nested
/// sub-resolutions.
///
/// Every query is charged against `max_hops` and nesting is capped at
/// `max_depth`. Referral cycles are caught per walk by [`ReferralTrail`].
#[derive(Debug)]
pub struct ResolutionBudget {
    max_hops: usize,
    max_depth: usize,
    queries_sent: usize,
}

impl ResolutionBudget {
    pub fn new(max_hops: usize, max_depth: usize) -> Self {
        Self {
            max_hops,
            max_depth,
            queries_sent: 0,
        }
    }

    /// Charges one query for `domain` against the hop limit.
    pub fn charge_query(&mut self, domain: &str) -> Result<(), DomainError> {
        if self.queries_sent >= self.max_hops {
            return Err(DomainError::ResolutionDepthExceeded(format!(
                "{} queries sent without reaching an answer for {}",
                self.max_hops, domain
            )));
        }

        self.queries_sent += 1;
        Ok(())
    }

    /// Checks that a sub-resolution may be nested below `depth`.
    pub fn check_nesting(&self, depth: usize) -> Result<(), DomainError> {
        if depth + 1 > self.max_depth {
            return Err(DomainError::ResolutionDepthExceeded(format!(
                "nameserver lookups nested deeper than {}",
                self.max_depth
            )));
        }
        Ok(())
    }

    pub fn queries_sent(&self) -> usize {
        self.queries_sent
    }
}

/// Nameservers already asked during one walk.
///
/// Each nested walk keeps its own trail, so resolving the same nameserver
/// name twice in one resolution is fine; only asking the same server the
/// same question twice within a walk is a cycle.
#[derive(Debug, Default)]
pub struct ReferralTrail {
    visited: HashSet<(Ipv4Addr, Arc<str>, RecordType)>,
}

impl ReferralTrail {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn visit(
        &mut self,
        nameserver: Ipv4Addr,
        domain: &str,
        record_type: RecordType,
    ) -> Result<(), DomainError> {
        let key: Arc<str> = domain.to_ascii_lowercase().into();
        if !self.visited.insert((nameserver, key, record_type)) {
            return Err(DomainError::ResolutionDepthExceeded(format!(
                "referral cycle: {} was already asked for {} {}",
                nameserver, domain, record_type
            )));
        }
        Ok(())
    }
}
