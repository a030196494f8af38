//! Title rendering for the feature graphic.
//!
//! - `TitleFont` - TrueType face or the built-in bitmap fallback
//! - `TitleBanner` - centered caption on a filled background

pub mod banner;
pub mod builtin;
pub mod font;

pub use banner::TitleBanner;
pub use font::TitleFont;
