//! UDP Transport for DNS queries (RFC 1035 §4.2.1)
//!
//! Messages are sent as-is (no framing). Responses larger than the receive
//! buffer are cut off; there is no TCP fallback for truncated answers.

use super::DatagramTransport;
use async_trait::async_trait;
use rootwalk_domain::DomainError;
use std::net::SocketAddr;
use std::sync::Mutex;
use std::time::Duration;
use tokio::net::UdpSocket;
use tracing::{debug, warn};

/// DNS over UDP transport bound to one ephemeral IPv4 port.
pub struct UdpTransport {
    socket: UdpSocket,
    receive_timeout: Duration,
    receive_buffer_size: usize,
    last_destination: Mutex<Option<SocketAddr>>,
}

impl UdpTransport {
    pub async fn bind(
        receive_timeout: Duration,
        receive_buffer_size: usize,
    ) -> Result<Self, DomainError> {
        let bind_addr = SocketAddr::from(([0, 0, 0, 0], 0));
        let socket = UdpSocket::bind(bind_addr).await.map_err(|e| {
            DomainError::TransportFailure(format!("Failed to bind UDP socket: {}", e))
        })?;

        debug!(
            local_addr = ?socket.local_addr().ok(),
            timeout_ms = receive_timeout.as_millis() as u64,
            buffer = receive_buffer_size,
            "UDP transport bound"
        );

        Ok(Self {
            socket,
            receive_timeout,
            receive_buffer_size,
            last_destination: Mutex::new(None),
        })
    }

    fn expected_source(&self) -> Option<SocketAddr> {
        self.last_destination.lock().ok().and_then(|guard| *guard)
    }
}

#[async_trait]
impl DatagramTransport for UdpTransport {
    async fn send(
        &self,
        message_bytes: &[u8],
        destination: SocketAddr,
    ) -> Result<(), DomainError> {
        let bytes_sent = self
            .socket
            .send_to(message_bytes, destination)
            .await
            .map_err(|e| {
                DomainError::TransportFailure(format!(
                    "Failed to send UDP query to {}: {}",
                    destination, e
                ))
            })?;

        if let Ok(mut guard) = self.last_destination.lock() {
            *guard = Some(destination);
        }

        debug!(server = %destination, bytes_sent, "UDP query sent");
        Ok(())
    }

    async fn receive(&self) -> Result<Vec<u8>, DomainError> {
        let expected = self.expected_source();
        let server = expected
            .map(|addr| addr.to_string())
            .unwrap_or_else(|| "<none>".to_string());

        let mut recv_buf = vec![0u8; self.receive_buffer_size];

        let (bytes_received, from_addr) =
            tokio::time::timeout(self.receive_timeout, self.socket.recv_from(&mut recv_buf))
                .await
                .map_err(|_| DomainError::TransportTimeout {
                    server: server.clone(),
                })?
                .map_err(|e| {
                    DomainError::TransportFailure(format!(
                        "Failed to receive UDP response from {}: {}",
                        server, e
                    ))
                })?;

        if let Some(expected) = expected {
            if from_addr.ip() != expected.ip() {
                warn!(
                    expected = %expected,
                    received_from = %from_addr,
                    "UDP response from unexpected source"
                );
            }
        }

        recv_buf.truncate(bytes_received);

        debug!(server = %from_addr, bytes_received, "UDP response received");
        Ok(recv_buf)
    }

    fn protocol_name(&self) -> &'static str {
        "UDP"
    }
}
