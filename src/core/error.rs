use thiserror::Error;

/// An environment override could not be parsed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },
}

/// Errors surfaced by the run loop.
///
/// Dying is not an error; it is the normal end of a run.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Player still alive after {0} ticks")]
    TickLimitReached(u64),
}

pub type Result<T> = std::result::Result<T, SimError>;
