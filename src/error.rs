use thiserror::Error;

/// Errors raised at the edges of the crate (configuration, CLI, session I/O).
///
/// The conversion core never fails: unparseable input degrades to the empty
/// display string instead.
#[derive(Debug, Error)]
pub enum ThermoError {
    #[error("Failed to read config {path}: {source}")]
    ConfigRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Invalid config value for {key}: {reason}")]
    InvalidConfig { key: String, reason: String },

    #[error("Unknown scale: {0} (expected c, f, celsius or fahrenheit)")]
    UnknownScale(String),

    #[error("Failed to serialize view: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ThermoError>;
