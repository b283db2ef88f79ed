use thiserror::Error;

pub type Result<T> = std::result::Result<T, ReconError>;

#[derive(Debug, Error)]
pub enum ReconError {
    #[error("invalid digit {digit:?} at position {position} for base {base}")]
    InvalidDigit {
        digit: char,
        position: usize,
        base: u32,
    },

    #[error("division by zero")]
    DivisionByZero,

    #[error("result {0} is not an integer")]
    NonIntegerResult(String),

    #[error("invalid base {0:?}, expected an integer in 2..=36")]
    InvalidBase(String),

    #[error("invalid x-coordinate {0:?}")]
    InvalidCoordinate(String),

    #[error("invalid threshold k = {k} for n = {n}")]
    InvalidThreshold { k: usize, n: usize },

    #[error("need {k} points, only {available} available")]
    InsufficientPoints { k: usize, available: usize },

    #[error("duplicate x-coordinate {0}")]
    DuplicateCoordinate(String),

    #[error("task descriptor has no `keys` record")]
    MissingKeys,

    #[error("cannot share a negative secret")]
    NegativeSecret,

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    TomlDe(#[from] toml::de::Error),

    #[error(transparent)]
    TomlSer(#[from] toml::ser::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
