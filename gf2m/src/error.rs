//! error types for gf2m

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("invalid character {character:?} at position {position} (expected '0' or '1')")]
    InvalidCharacter { character: char, position: usize },

    #[error("division by the zero polynomial")]
    DivisionByZero,

    #[error("no generator installed")]
    UninitializedGenerator,

    #[error("generator already installed")]
    GeneratorAlreadySet,

    #[error("zero has no multiplicative inverse")]
    NotInvertible,

    // === config errors ===
    #[error("config error: {0}")]
    Config(String),
}

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Error::Config(e.to_string())
    }
}
