use thiserror::Error;

#[derive(Debug, Error)]
pub enum AmbeError {
    #[error("Invalid frame size: expected {expected} bytes, got {got}")]
    InvalidFrameSize { expected: usize, got: usize },

    #[error("PCM frame must be {expected} samples, got {got}")]
    InvalidPcmSize { expected: usize, got: usize },

    #[error("Vocoder not initialized")]
    NotInitialized,

    #[error("Vocoder is closed")]
    Closed,

    #[error("Initialization failed: {0}")]
    InitFailed(String),

    #[error("Encoding failed: {0}")]
    EncodeFailed(String),

    #[error("Decoding failed: {0}")]
    DecodeFailed(String),

    #[error("Vocoder engine error: {0}")]
    Engine(String),
}

pub type Result<T> = std::result::Result<T, AmbeError>;
