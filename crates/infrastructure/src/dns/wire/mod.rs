//! DNS wire format (RFC 1035 §4.1)
//!
//! Queries are emitted without compression; responses are decoded with full
//! support for compression pointers.

pub mod builder;
pub mod name;
pub mod parser;
pub mod reader;

pub use builder::MessageBuilder;
pub use name::{decode_name, decode_name_uncompressed, encode_name};
pub use parser::MessageParser;
pub use reader::WireReader;

/// Size of the fixed DNS header.
pub const HEADER_LEN: usize = 12;
