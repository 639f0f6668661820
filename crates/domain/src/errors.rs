use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Truncated message: needed {needed} byte(s) at offset {offset}")]
    TruncatedMessage { offset: usize, needed: usize },

    #[error("Invalid name: {0}")]
    InvalidName(String),

    #[error("Cannot encode domain name: {0}")]
    UnsupportedEncodeInput(String),

    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("No usable response from {nameserver} for {domain}")]
    NoUsableResponse { domain: String, nameserver: String },

    #[error("Domain not found (NXDOMAIN)")]
    NxDomain,

    #[error("Resolution depth exceeded: {0}")]
    ResolutionDepthExceeded(String),

    #[error("Transport failure: {0}")]
    TransportFailure(String),

    #[error("Transport timeout waiting for {server}")]
    TransportTimeout { server: String },
}

impl DomainError {
    /// True for failures raised by the datagram transport rather than by the
    /// codec or the resolution algorithm.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            DomainError::TransportFailure(_) | DomainError::TransportTimeout { .. }
        )
    }

    pub fn truncated(offset: usize, needed: usize) -> Self {
        DomainError::TruncatedMessage { offset, needed }
    }
}
