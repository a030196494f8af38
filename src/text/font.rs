//! Title font loading with a built-in fallback.

use std::path::Path;

use image::{Rgb, RgbImage};
use rusttype::{point, Font, Scale};
use tracing::{debug, warn};

use super::builtin;

/// The face used to render the title.
pub enum TitleFont {
    /// A TrueType/OpenType face rendered at `scale`.
    TrueType { font: Font<'static>, scale: Scale },
    /// Fixed-size bitmap face; used when the preferred font is unavailable.
    Builtin,
}

impl std::fmt::Debug for TitleFont {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TrueType { scale, .. } => f
                .debug_struct("TrueType")
                .field("scale", &scale.y)
                .finish_non_exhaustive(),
            Self::Builtin => f.write_str("Builtin"),
        }
    }
}

impl TitleFont {
    /// Loads the font at `path` sized to `size` pixels per em.
    ///
    /// Never fails: a missing path, unreadable file or unparsable font data
    /// all yield the built-in face.
    pub fn load(path: Option<&Path>, size: f32) -> Self {
        let Some(path) = path else {
            debug!("No title font configured, using built-in face");
            return Self::Builtin;
        };

        let bytes = match std::fs::read(path) {
            Ok(bytes) => bytes,
            Err(e) => {
                warn!(?path, error = %e, "Title font unavailable, using built-in face");
                return Self::Builtin;
            }
        };

        Self::from_bytes(bytes, size).unwrap_or_else(|| {
            warn!(?path, "Title font could not be parsed, using built-in face");
            Self::Builtin
        })
    }

    /// Parses raw font data. Returns `None` if the data is not a usable font.
    pub fn from_bytes(bytes: Vec<u8>, size: f32) -> Option<Self> {
        let font = Font::try_from_vec(bytes)?;
        let scale = em_scale(&font, size.max(1.0));
        Some(Self::TrueType { font, scale })
    }

    pub fn is_builtin(&self) -> bool {
        matches!(self, Self::Builtin)
    }

    /// Bounding box of `text` drawn at the origin, as `(right, bottom)`.
    ///
    /// The origin is the top of the ascender, so the height includes the
    /// space above the tallest glyph.
    pub fn measure(&self, text: &str) -> (u32, u32) {
        match self {
            Self::TrueType { font, scale } => {
                let ascent = font.v_metrics(*scale).ascent;
                let mut right = 0i32;
                let mut bottom = 0i32;
                for glyph in font.layout(text, *scale, point(0.0, ascent)) {
                    if let Some(bb) = glyph.pixel_bounding_box() {
                        right = right.max(bb.max.x);
                        bottom = bottom.max(bb.max.y);
                    }
                }
                (right.max(0) as u32, bottom.max(0) as u32)
            }
            Self::Builtin => builtin::measure(text),
        }
    }

    /// Draws `text` with the top of its line box at (`x`, `y`).
    pub fn draw(&self, canvas: &mut RgbImage, x: f32, y: f32, text: &str, color: Rgb<u8>) {
        match self {
            Self::TrueType { font, scale } => {
                let ascent = font.v_metrics(*scale).ascent;
                draw_glyphs(canvas, font, *scale, x, y + ascent, text, color);
            }
            Self::Builtin => {
                builtin::draw(canvas, x.round() as i64, y.round() as i64, text, color)
            }
        }
    }
}

/// rusttype scales by line height (ascent - descent); convert a pixels-per-em size.
fn em_scale(font: &Font<'static>, em_px: f32) -> Scale {
    let units_per_em = font.units_per_em() as f32;
    let metrics = font.v_metrics_unscaled();
    let line_units = metrics.ascent - metrics.descent;
    if units_per_em <= 0.0 || line_units <= 0.0 {
        return Scale::uniform(em_px);
    }
    Scale::uniform(em_px * line_units / units_per_em)
}

fn draw_glyphs(
    canvas: &mut RgbImage,
    font: &Font<'static>,
    scale: Scale,
    x: f32,
    baseline_y: f32,
    text: &str,
    color: Rgb<u8>,
) {
    let (canvas_w, canvas_h) = (canvas.width() as i32, canvas.height() as i32);

    for glyph in font.layout(text, scale, point(x, baseline_y)) {
        let Some(bb) = glyph.pixel_bounding_box() else {
            continue;
        };
        glyph.draw(|gx, gy, coverage| {
            let px = gx as i32 + bb.min.x;
            let py = gy as i32 + bb.min.y;
            if px < 0 || py < 0 || px >= canvas_w || py >= canvas_h {
                return;
            }
            let alpha = coverage.clamp(0.0, 1.0);
            if alpha <= 0.0 {
                return;
            }
            let dst = canvas.get_pixel_mut(px as u32, py as u32);
            let inv = 1.0 - alpha;
            for c in 0..3 {
                dst.0[c] = (color.0[c] as f32 * alpha + dst.0[c] as f32 * inv).round() as u8;
            }
        });
    }
}
