/// Errors raised while loading, validating or saving a [`super::Config`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Cannot read config file {path}: {reason}")]
    Read { path: String, reason: String },

    #[error("Cannot write config file {path}: {reason}")]
    Write { path: String, reason: String },

    #[error("Invalid TOML in {path}: {reason}")]
    Parse { path: String, reason: String },

    #[error("Failed to serialize config: {0}")]
    Serialize(String),

    #[error("Invalid value for {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}
