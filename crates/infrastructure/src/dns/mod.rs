pub mod client;
pub mod resolver;
pub mod transport;
pub mod wire;

pub use client::NameserverClient;
pub use resolver::{ForwardingResolver, IterativeResolver, ResolutionBudget, ResponseOutcome};
pub use transport::{DatagramTransport, UdpTransport};
pub use wire::{MessageBuilder, MessageParser, WireReader};
