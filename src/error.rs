use thiserror::Error;

/// Result type alias using the crate `Error`.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for burden-calc operations.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Rejected configuration values.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{name} must be a positive finite number, got {value}")]
    NotPositive { name: &'static str, value: f64 },

    #[error("combinations_to_save must be at least 1")]
    NothingToSave,

    #[error("unknown catalog '{0}', expected one of standard, e3, e6, e12, e24")]
    UnknownCatalog(String),

    #[error("could not parse {name} from '{input}': {reason}")]
    Parse {
        name: &'static str,
        input: String,
        reason: String,
    },

    #[error("input ended before {0} was entered")]
    MissingInput(&'static str),
}

/// Rejected catalog contents.
#[derive(Debug, Error, PartialEq)]
pub enum CatalogError {
    #[error("resistor values must be positive, got {0}")]
    InvalidValue(f64),

    #[error("catalog contains no finite resistor values")]
    Empty,
}
