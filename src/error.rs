//! Error types for the Rover gateway

use thiserror::Error;

/// Result type alias for Rover operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in the Rover gateway
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// A command was issued before `open()` (or after `close()`)
    #[error("session not open: call open() before issuing commands")]
    SessionNotOpen,

    /// Session lifecycle misuse (double open, reopen after close)
    #[error("session error: {0}")]
    Session(String),

    /// Robot transport or hardware fault
    #[error("robot error: {0}")]
    Robot(String),

    /// Audio decoding or format error
    #[error("audio error: {0}")]
    Audio(String),

    /// Text-to-speech synthesis error
    #[error("TTS error: {0}")]
    Tts(String),

    /// External transcoder failure
    #[error("transcode error: {0}")]
    Transcode(String),

    /// IO error
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// HTTP error
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// Serialization error
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("toml error: {0}")]
    Toml(#[from] toml::de::Error),
}
