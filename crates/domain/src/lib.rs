//! Rootwalk Domain Layer
pub mod config;
pub mod dns_query;
pub mod errors;
pub mod message;
pub mod record_type;

pub use config::{
    CliOverrides, Config, ConfigError, LogFormat, LoggingConfig, ResolverConfig,
};
pub use dns_query::DnsQuery;
pub use errors::DomainError;
pub use message::{Header, Message, Question, Record, RecordData, CLASS_IN};
pub use record_type::RecordType;
