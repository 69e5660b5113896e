//! Error types for the face tracking library.

use thiserror::Error;

/// Main error type for the library.
#[derive(Error, Debug)]
pub enum Error {
    /// Frame buffer does not match its declared layout.
    #[error("Invalid frame: {0}")]
    InvalidFrame(String),

    /// Frame source could not be opened.
    #[error("Frame source unavailable: {0}")]
    SourceUnavailable(String),

    /// Reading a frame failed mid-stream.
    #[error("Frame read failed: {0}")]
    ReadFailed(String),

    /// Detector backend failed.
    #[error("Detector error: {0}")]
    Detector(String),

    /// Display sink failed.
    #[error("Display error: {0}")]
    Display(String),

    /// Configuration is invalid.
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration file is not valid TOML.
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// `OpenCV` operation failed.
    #[cfg(feature = "opencv-backend")]
    #[error("OpenCV error: {0}")]
    OpenCV(#[from] opencv::Error),
}

/// Convenience type alias for Results with our Error type.
pub type Result<T> = std::result::Result<T, Error>;

impl From<std::convert::Infallible> for Error {
    fn from(never: std::convert::Infallible) -> Self {
        match never {}
    }
}
