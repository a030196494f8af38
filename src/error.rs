use std::path::PathBuf;

use thiserror::Error;

/// Failures that abort a composition run.
///
/// A missing title font is not listed here: it is recovered by falling back
/// to the built-in face.
#[derive(Debug, Error)]
pub enum ComposeError {
    /// The `image` crate was built without an encoder the run needs.
    #[error("{format} support is not compiled into the image library")]
    MissingCapability { format: &'static str },

    /// An input screenshot is missing or is not a decodable image.
    #[error("failed to decode screenshot {path:?}")]
    Decode {
        path: PathBuf,
        #[source]
        source: anyhow::Error,
    },

    /// The output file could not be created, encoded or flushed.
    #[error("failed to write feature graphic {path:?}")]
    Write {
        path: PathBuf,
        #[source]
        source: anyhow::Error,
    },
}

pub type Result<T> = std::result::Result<T, ComposeError>;
