pub mod udp;

use async_trait::async_trait;
use rootwalk_domain::DomainError;
use std::net::SocketAddr;

pub use udp::UdpTransport;

/// Connectionless datagram exchange used by the resolvers.
///
/// One `send` is always followed by one `receive` before the next query is
/// sent; implementations never see overlapping exchanges.
#[async_trait]
pub trait DatagramTransport: Send + Sync {
    async fn send(&self, message_bytes: &[u8], destination: SocketAddr)
        -> Result<(), DomainError>;

    async fn receive(&self) -> Result<Vec<u8>, DomainError>;

    fn protocol_name(&self) -> &'static str;
}
