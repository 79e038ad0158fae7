// error.rs - Error types for probe design runs

use thiserror::Error;

/// Errors surfaced by the input, configuration and output layers.
///
/// The design core itself is infallible: degenerate inputs produce fewer probes, never an error.
#[derive(Error, Debug)]
pub enum ProbeError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid FASTA format: {message}")]
    InvalidFasta { message: String },

    #[error("No sequence found in FASTA input")]
    EmptyInput,

    #[error("Expected a single-sequence FASTA, found {count} sequences")]
    MultipleSequences { count: usize },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Validation error: {message}")]
    Validation { message: String },
}

impl ProbeError {
    pub fn invalid_fasta<S: Into<String>>(message: S) -> Self {
        Self::InvalidFasta {
            message: message.into(),
        }
    }

    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }
}

impl From<toml::de::Error> for ProbeError {
    fn from(err: toml::de::Error) -> Self {
        Self::config(format!("TOML parsing error: {}", err))
    }
}

impl From<csv::Error> for ProbeError {
    fn from(err: csv::Error) -> Self {
        Self::Io(std::io::Error::new(std::io::ErrorKind::Other, err.to_string()))
    }
}

impl From<serde_json::Error> for ProbeError {
    fn from(err: serde_json::Error) -> Self {
        Self::Io(std::io::Error::new(std::io::ErrorKind::Other, err.to_string()))
    }
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, ProbeError>;
