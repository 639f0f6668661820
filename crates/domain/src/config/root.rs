use serde::{Deserialize, Serialize};
use std::net::Ipv4Addr;

use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::resolver::ResolverConfig;

const LOCAL_CONFIG_PATH: &str = "rootwalk.toml";
const SYSTEM_CONFIG_PATH: &str = "/etc/rootwalk/config.toml";

/// Main configuration structure for Rootwalk
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Resolution configuration (root server, limits, transport)
    #[serde(default)]
    pub resolver: ResolverConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. rootwalk.toml in current directory
    /// 3. /etc/rootwalk/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if std::path::Path::new(LOCAL_CONFIG_PATH).exists() {
            Self::from_file(LOCAL_CONFIG_PATH)?
        } else if std::path::Path::new(SYSTEM_CONFIG_PATH).exists() {
            Self::from_file(SYSTEM_CONFIG_PATH)?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides);
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a specific file
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.to_string(),
            reason: e.to_string(),
        })?;
        toml::from_str(&contents).map_err(|e| ConfigError::Parse {
            path: path.to_string(),
            reason: e.to_string(),
        })
    }

    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(root) = overrides.root_server {
            self.resolver.root_server = root;
        }
        if let Some(forwarder) = overrides.forwarder {
            self.resolver.forwarder = Some(forwarder);
        }
        if let Some(max_hops) = overrides.max_hops {
            self.resolver.max_hops = max_hops;
        }
        if let Some(timeout) = overrides.query_timeout_ms {
            self.resolver.query_timeout_ms = timeout;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    /// Rejects limits that would make every resolution fail up front.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let resolver = &self.resolver;

        if resolver.port == 0 {
            return Err(invalid("resolver.port", "cannot be 0"));
        }
        if resolver.max_hops == 0 {
            return Err(invalid("resolver.max_hops", "must be at least 1"));
        }
        if resolver.max_depth == 0 {
            return Err(invalid("resolver.max_depth", "must be at least 1"));
        }
        if resolver.query_timeout_ms == 0 {
            return Err(invalid("resolver.query_timeout_ms", "cannot be 0"));
        }
        if !(12..=65535).contains(&resolver.receive_buffer_size) {
            return Err(invalid(
                "resolver.receive_buffer_size",
                format!(
                    "must be between 12 and 65535, got {}",
                    resolver.receive_buffer_size
                ),
            ));
        }
        if resolver.forwarder.is_some_and(|ip| ip.is_unspecified()) {
            return Err(invalid("resolver.forwarder", "cannot be 0.0.0.0"));
        }
        if self.logging.level.trim().is_empty() {
            return Err(invalid("logging.level", "cannot be empty"));
        }

        Ok(())
    }

    /// Save configuration to file
    pub fn save(&self, path: &str) -> Result<(), ConfigError> {
        let toml_string =
            toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))?;
        std::fs::write(path, toml_string).map_err(|e| ConfigError::Write {
            path: path.to_string(),
            reason: e.to_string(),
        })
    }
}

fn invalid(field: &'static str, reason: impl Into<String>) -> ConfigError {
    ConfigError::Invalid {
        field,
        reason: reason.into(),
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub root_server: Option<Ipv4Addr>,
    pub forwarder: Option<Ipv4Addr>,
    pub max_hops: Option<usize>,
    pub query_timeout_ms: Option<u64>,
    pub log_level: Option<String>,
}
