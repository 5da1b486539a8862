use std::path::PathBuf;

/// Rejected input. Always recoverable: the layer that detects it reports it
/// and asks again.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    #[error("not a valid number: {0:?}")]
    Malformed(String),

    #[error("selection {value} is out of range (1-{max})")]
    OutOfRange { value: i64, max: usize },

    #[error("column {} is already full", .0 + 1)]
    ColumnFull(usize),
}

/// Errors that end a game session.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("input closed")]
    InputClosed,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}
