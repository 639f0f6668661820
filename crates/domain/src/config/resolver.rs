use serde::{Deserialize, Serialize};
use std::net::Ipv4Addr;

/// Iterative resolution settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ResolverConfig {
    /// Root server every resolution starts from (a.root-servers.net)
    #[serde(default = "default_root_server")]
    pub root_server: Ipv4Addr,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Total nameserver queries allowed for one resolution, nested
    /// sub-resolutions included
    #[serde(default = "default_max_hops")]
    pub max_hops: usize,

    /// Maximum nesting of NS-name sub-resolutions
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,

    #[serde(default = "default_query_timeout_ms")]
    pub query_timeout_ms: u64,

    #[serde(default = "default_receive_buffer_size")]
    pub receive_buffer_size: usize,

    /// Recursive server to forward to instead of walking from the root
    #[serde(default)]
    pub forwarder: Option<Ipv4Addr>,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            root_server: default_root_server(),
            port: default_port(),
            max_hops: default_max_hops(),
            max_depth: default_max_depth(),
            query_timeout_ms: default_query_timeout_ms(),
            receive_buffer_size: default_receive_buffer_size(),
            forwarder: None,
        }
    }
}

fn default_root_server() -> Ipv4Addr {
    Ipv4Addr::new(198, 41, 0, 4)
}

fn default_port() -> u16 {
    53
}

fn default_max_hops() -> usize {
    32
}

fn default_max_depth() -> usize {
    8
}

fn default_query_timeout_ms() -> u64 {
    5000
}

fn default_receive_buffer_size() -> usize {
    1024
}
