#![allow(dead_code)]
use std::net::{Ipv4Addr, SocketAddr};
use tokio::net::UdpSocket;
use tokio::sync::oneshot;

#[derive(Debug, Clone, Copy)]
enum Behavior {
    Answer(Ipv4Addr),
    Silent,
    /// Reply to each query twice: first as a late answer to some other query
    /// would look, then correctly.
    StaleFirst { answer: Ipv4Addr, same_id: bool },
}

/// Loopback UDP nameserver that answers every query with one A record.
pub struct MockDnsServer {
    addr: SocketAddr,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl MockDnsServer {
    pub async fn start(answer: Ipv4Addr) -> Result<Self, std::io::Error> {
        Self::spawn(Behavior::Answer(answer)).await
    }

    /// Server that reads queries and never replies.
    pub async fn start_silent() -> Result<Self, std::io::Error> {
        Self::spawn(Behavior::Silent).await
    }

    /// Server that precedes every real reply with a reply for
    /// `stale.test` (A 6.6.6.6). With `same_id` the stale reply reuses the
    /// query's ID; otherwise its ID differs.
    pub async fn start_stale_first(
        answer: Ipv4Addr,
        same_id: bool,
    ) -> Result<Self, std::io::Error> {
        Self::spawn(Behavior::StaleFirst { answer, same_id }).await
    }

    async fn spawn(behavior: Behavior) -> Result<Self, std::io::Error> {
        let socket = UdpSocket::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let addr = socket.local_addr()?;

        let (shutdown_tx, mut shutdown_rx) = oneshot::channel();

        tokio::spawn(async move {
            let mut buf = vec![0u8; 512];

            loop {
                tokio::select! {
                    _ = &mut shutdown_rx => {
                        break;
                    }
                    result = socket.recv_from(&mut buf) => {
                        let Ok((len, peer)) = result else { continue };
                        let query = &buf[..len];

                        let answer = match behavior {
                            Behavior::Silent => continue,
                            Behavior::Answer(answer) => answer,
                            Behavior::StaleFirst { answer, same_id } => {
                                let stale = Self::build_stale_response(query, same_id);
                                let _ = socket.send_to(&stale, peer).await;
                                answer
                            }
                        };

                        let response = Self::build_response(query, answer);
                        let _ = socket.send_to(&response, peer).await;
                    }
                }
            }
        });

        Ok(Self {
            addr,
            shutdown_tx: Some(shutdown_tx),
        })
    }

    pub fn port(&self) -> u16 {
        self.addr.port()
    }

    /// Echoes the query's ID and question, then appends an A answer whose
    /// owner name points back at the question.
    fn build_response(query: &[u8], answer: Ipv4Addr) -> Vec<u8> {
        if query.len() < 12 {
            return vec![];
        }

        let mut response = Vec::with_capacity(query.len() + 16);
        response.extend_from_slice(&query[0..2]);
        response.extend_from_slice(&[0x84, 0x00]);
        response.extend_from_slice(&query[4..6]);
        response.extend_from_slice(&[0x00, 0x01, 0x00, 0x00, 0x00, 0x00]);
        response.extend_from_slice(&query[12..]);

        response.extend_from_slice(&[
            0xc0, 0x0c, // name -> question
            0x00, 0x01, // A
            0x00, 0x01, // IN
            0x00, 0x00, 0x0e, 0x10, // ttl 3600
            0x00, 0x04,
        ]);
        response.extend_from_slice(&answer.octets());

        response
    }

    fn build_stale_response(query: &[u8], same_id: bool) -> Vec<u8> {
        if query.len() < 12 {
            return vec![];
        }

        let id = u16::from_be_bytes([query[0], query[1]]);
        let id = if same_id { id } else { id.wrapping_add(1) };

        let mut stale = Vec::with_capacity(12 + 16 + 16);
        stale.extend_from_slice(&id.to_be_bytes());
        stale.extend_from_slice(&[0x84, 0x00, 0x00, 0x01, 0x00, 0x01, 0x00, 0x00, 0x00, 0x00]);
        stale.extend_from_slice(b"\x05stale\x04test\x00\x00\x01\x00\x01");
        stale.extend_from_slice(&[
            0xc0, 0x0c, 0x00, 0x01, 0x00, 0x01, 0x00, 0x00, 0x0e, 0x10, 0x00, 0x04, 6, 6, 6, 6,
        ]);
        stale
    }

    pub fn shutdown(mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

impl Drop for MockDnsServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}
