use super::transport::DatagramTransport;
use super::wire::builder::FLAG_RECURSION_DESIRED;
use super::wire::{MessageBuilder, MessageParser, WireReader};
use rootwalk_domain::{DomainError, Message, RecordType};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::sync::Arc;
use tracing::{debug, warn};

/// Datagrams dropped as stale before a query gives up waiting.
const MAX_DISCARDED_RESPONSES: usize = 16;

/// Performs one query/response exchange with a single nameserver.
#[derive(Clone)]
pub struct NameserverClient {
    transport: Arc<dyn DatagramTransport>,
    port: u16,
    flags: u16,
}

impl NameserverClient {
    /// Client sending plain queries (all flags cleared) to `port`.
    pub fn new(transport: Arc<dyn DatagramTransport>, port: u16) -> Self {
        Self {
            transport,
            port,
            flags: 0,
        }
    }

    /// Sets the RD bit on every query, for talking to recursive servers.
    pub fn with_recursion_desired(mut self) -> Self {
        self.flags |= FLAG_RECURSION_DESIRED;
        self
    }

    /// Sends one query and returns the first response that answers it.
    ///
    /// Datagrams carrying another ID or another question (late replies to
    /// earlier, timed-out queries) are dropped and the receive is retried.
    pub async fn query(
        &self,
        server: Ipv4Addr,
        domain: &str,
        record_type: RecordType,
    ) -> Result<Message, DomainError> {
        let (id, request) = MessageBuilder::build_query_with_id(domain, record_type, self.flags)?;
        let destination = SocketAddr::new(IpAddr::V4(server), self.port);

        debug!(
            nameserver = %server,
            domain = %domain,
            record_type = %record_type,
            id,
            transport = self.transport.protocol_name(),
            "Querying nameserver"
        );

        self.transport.send(&request, destination).await?;

        for _ in 0..=MAX_DISCARDED_RESPONSES {
            let response = self.transport.receive().await?;

            let response_id = WireReader::new(&response).read_u16()?;
            if response_id != id {
                warn!(
                    nameserver = %server,
                    expected = id,
                    received = response_id,
                    "Discarding response with mismatched ID"
                );
                continue;
            }

            let message = MessageParser::parse(&response)?;
            if !answers_question(&message, domain, record_type) {
                warn!(
                    nameserver = %server,
                    domain = %domain,
                    id,
                    "Discarding response for a different question"
                );
                continue;
            }

            debug!(
                nameserver = %server,
                answers = message.answers().len(),
                authorities = message.authorities().len(),
                additionals = message.additionals().len(),
                rcode = message.header().rcode(),
                "Response decoded"
            );
            return Ok(message);
        }

        Err(DomainError::TransportFailure(format!(
            "no response from {} matched query {} after {} stale datagrams",
            destination,
            id,
            MAX_DISCARDED_RESPONSES + 1
        )))
    }
}

/// A response without a question section is matched on ID alone.
fn answers_question(message: &Message, domain: &str, record_type: RecordType) -> bool {
    let asked = domain.strip_suffix('.').unwrap_or(domain);
    match message.questions().first() {
        Some(question) => {
            question.record_type == record_type && question.name.eq_ignore_ascii_case(asked)
        }
        None => true,
    }
}
