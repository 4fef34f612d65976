//! Unified error type for deck building.
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for picdeck operations.
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The images root directory does not exist
    #[error("Images directory '{}' not found", .0.display())]
    RootNotFound(PathBuf),

    /// The images root directory exists but could not be listed
    #[error("Could not list items in '{}': {source}", path.display())]
    RootUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Image header could not be decoded
    #[error("Image error: {0}")]
    Image(String),

    /// Image reports a zero width or height, or does not fit the canvas
    #[error("Image '{}' has degenerate size {width}x{height}", path.display())]
    DegenerateImage {
        path: PathBuf,
        width: u32,
        height: u32,
    },

    /// Invalid or unsupported file format
    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    /// An operation needed a slide and the presentation has none
    #[error("Presentation has no slides")]
    NoSlides,

    /// Deck configuration could not be loaded
    #[error("Configuration error: {0}")]
    Config(String),

    /// XML serialization error
    #[error("XML error: {0}")]
    XmlError(String),

    /// ZIP archive error
    #[error("ZIP error: {0}")]
    ZipError(String),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

/// Result type for picdeck operations.
pub type Result<T> = std::result::Result<T, Error>;
