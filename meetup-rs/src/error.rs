use thiserror::Error;

/// Errors raised by this crate.
///
/// `InvalidState` is the only error a round can produce. The remaining variants
/// come from loading populations and configuration files.
#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid health state: {0}")]
    InvalidState(String),

    #[error("config error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// True for errors that come from an agent carrying or reaching a state
    /// outside of the health scale.
    pub fn is_invalid_state(&self) -> bool {
        matches!(self, Error::InvalidState(_))
    }
}

pub type Result<T> = std::result::Result<T, Error>;
