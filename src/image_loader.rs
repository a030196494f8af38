use std::io::Cursor;
use std::path::Path;

use anyhow::Context;
use image::{DynamicImage, ImageReader};
use tracing::trace;

use crate::error::{ComposeError, Result};

/// Decodes a screenshot. The format is sniffed from the file contents, so a
/// misleading extension does not matter; animated formats give their first frame.
pub fn open_image(path: &Path) -> Result<DynamicImage> {
    decode(path).map_err(|source| ComposeError::Decode {
        path: path.to_path_buf(),
        source,
    })
}

fn decode(path: &Path) -> anyhow::Result<DynamicImage> {
    let bytes = std::fs::read(path).with_context(|| format!("Failed to read image: {:?}", path))?;
    let reader = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .context("Failed to guess image format")?;
    trace!(?path, format = ?reader.format(), "Decoding screenshot");

    reader
        .decode()
        .with_context(|| format!("Failed to decode image: {:?}", path))
}
