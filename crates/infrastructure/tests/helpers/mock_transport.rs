#![allow(dead_code)]
use async_trait::async_trait;
use rootwalk_domain::DomainError;
use rootwalk_infrastructure::dns::transport::DatagramTransport;
use rootwalk_infrastructure::dns::wire::{MessageParser, WireReader};
use std::collections::{HashMap, VecDeque};
use std::net::{Ipv4Addr, SocketAddr};
use std::sync::Mutex;

/// Scripted transport: answers each query with the response registered for
/// (destination IP, question name), echoing the query ID back.
#[derive(Default)]
pub struct MockTransport {
    responses: Mutex<HashMap<(Ipv4Addr, String), Vec<u8>>>,
    failures: Mutex<HashMap<Ipv4Addr, DomainError>>,
    pending: Mutex<VecDeque<Result<Vec<u8>, DomainError>>>,
    stale: Mutex<VecDeque<Vec<u8>>>,
    sent: Mutex<Vec<(SocketAddr, String)>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(&self, server: &str, domain: &str, response: Vec<u8>) {
        self.responses
            .lock()
            .unwrap()
            .insert((server.parse().unwrap(), domain.to_string()), response);
    }

    pub fn fail(&self, server: &str, error: DomainError) {
        self.failures
            .lock()
            .unwrap()
            .insert(server.parse().unwrap(), error);
    }

    /// Queues a datagram delivered ahead of the reply to the next query,
    /// as a late answer to an earlier query would be. Sent verbatim.
    pub fn deliver_stale(&self, datagram: Vec<u8>) {
        self.stale.lock().unwrap().push_back(datagram);
    }

    /// Destinations and question names in the order they were sent.
    pub fn sent(&self) -> Vec<(SocketAddr, String)> {
        self.sent.lock().unwrap().clone()
    }

    pub fn sent_servers(&self) -> Vec<String> {
        self.sent()
            .into_iter()
            .map(|(addr, _)| addr.ip().to_string())
            .collect()
    }
}

#[async_trait]
impl DatagramTransport for MockTransport {
    async fn send(
        &self,
        message_bytes: &[u8],
        destination: SocketAddr,
    ) -> Result<(), DomainError> {
        let mut reader = WireReader::new(message_bytes);
        let header = MessageParser::parse_header(&mut reader).unwrap();
        let question = MessageParser::parse_question_uncompressed(&mut reader).unwrap();

        self.sent
            .lock()
            .unwrap()
            .push((destination, question.name.clone()));

        let ip = match destination.ip() {
            std::net::IpAddr::V4(ip) => ip,
            std::net::IpAddr::V6(_) => panic!("resolver sent to an IPv6 address"),
        };

        let scripted = if let Some(error) = self.failures.lock().unwrap().get(&ip) {
            Err(error.clone())
        } else {
            match self.responses.lock().unwrap().get(&(ip, question.name.clone())) {
                Some(bytes) => {
                    let mut bytes = bytes.clone();
                    bytes[..2].copy_from_slice(&header.id.to_be_bytes());
                    Ok(bytes)
                }
                None => Err(DomainError::TransportTimeout {
                    server: destination.to_string(),
                }),
            }
        };

        let mut pending = self.pending.lock().unwrap();
        pending.extend(self.stale.lock().unwrap().drain(..).map(Ok));
        pending.push_back(scripted);
        Ok(())
    }

    async fn receive(&self) -> Result<Vec<u8>, DomainError> {
        self.pending
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(DomainError::TransportFailure("receive before send".into())))
    }

    fn protocol_name(&self) -> &'static str {
        "MOCK"
    }
}
