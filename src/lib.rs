//! Store feature graphic composer.
//!
//! Lays out screenshots in a centered row on a fixed-size canvas, draws a
//! title banner across the top and writes the result as PNG.

pub mod compose;
pub mod config;
pub mod error;
pub mod image_loader;
pub mod layout;
pub mod text;

pub use compose::{compose, ensure_png_support, GraphicComposer};
pub use config::ComposerConfig;
pub use error::{ComposeError, Result};
