use std::path::PathBuf;

use thiserror::Error;

/// Errors originating from the core pipeline.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Invalid configuration value (palette too short, zero width...).
    #[error("invalid configuration: {0}")]
    Config(String),

    /// Referenced input file does not exist or is not a regular file.
    #[error("file not found: '{}'", path.display())]
    FileNotFound {
        /// Path that was not found.
        path: PathBuf,
    },

    /// The file exists but could not be decoded as a supported image.
    #[error("could not open image '{}': {reason}", path.display())]
    Decode {
        /// Path of the offending file.
        path: PathBuf,
        /// Decoder message.
        reason: String,
    },

    /// Invalid width/height dimensions.
    #[error("invalid dimensions: {width}×{height}")]
    InvalidDimensions {
        /// Width value.
        width: u32,
        /// Height value.
        height: u32,
    },

    /// Destination file or directory is not writable.
    #[error("could not write file '{}': {source}", path.display())]
    Write {
        /// Destination path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}
