use thiserror::Error;

/// Reasons a colour wheel refuses to build.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum WheelError {
    #[error("ring count must be at least 1")]
    NoRings,
    #[error("piece count must be at least 1")]
    NoPieces,
    #[error("{rings} rings by {pieces} pieces exceeds the {max} segment limit")]
    TooManySegments {
        rings: usize,
        pieces: usize,
        max: usize,
    },
    #[error("wheel radius must be a positive finite number, got {0}")]
    InvalidRadius(f32),
    #[error("wheel origin must be finite, got ({0}, {1})")]
    InvalidOrigin(f32, f32),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HexError {
    #[error("hex colour must start with '#': {0:?}")]
    MissingHash(String),
    #[error("hex colour must have 3 or 6 digits: {0:?}")]
    BadLength(String),
    #[error("invalid hex digit in {0:?}")]
    BadDigit(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read settings: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed settings: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unknown log level {0:?}")]
    UnknownLevel(String),
    #[error(transparent)]
    Wheel(#[from] WheelError),
}
