//! Built-in 8x8 bitmap face used when no TrueType font can be loaded.
//!
//! Glyphs come from `font8x8`: one byte per row, bit 0 is the leftmost pixel.
//! The face has a fixed size and ignores any requested point size.

use font8x8::{UnicodeFonts, BASIC_FONTS};
use image::{Rgb, RgbImage};

const GLYPH_SIZE: u32 = 8;
/// Integer upscale applied to every glyph pixel.
pub const SCALE: u32 = 2;

/// Bitmap for `ch`; anything outside the basic Latin set renders as `?`.
fn glyph(ch: char) -> [u8; 8] {
    BASIC_FONTS
        .get(ch)
        .or_else(|| BASIC_FONTS.get('?'))
        .unwrap_or([0; 8])
}

/// Width and height of `text` in canvas pixels.
pub fn measure(text: &str) -> (u32, u32) {
    let count = text.chars().count() as u32;
    if count == 0 {
        return (0, 0);
    }
    (count * GLYPH_SIZE * SCALE, GLYPH_SIZE * SCALE)
}

/// Draws `text` with its top-left corner at (`x`, `y`). Off-canvas pixels are skipped.
pub fn draw(canvas: &mut RgbImage, x: i64, y: i64, text: &str, color: Rgb<u8>) {
    let scale = SCALE as i64;
    let advance = (GLYPH_SIZE * SCALE) as i64;
    let (canvas_w, canvas_h) = (canvas.width() as i64, canvas.height() as i64);

    for (i, ch) in text.chars().enumerate() {
        let origin_x = x + i as i64 * advance;
        for (row, bits) in glyph(ch).iter().enumerate() {
            for col in 0..GLYPH_SIZE {
                if bits & (1 << col) == 0 {
                    continue;
                }
                for dy in 0..scale {
                    for dx in 0..scale {
                        let px = origin_x + col as i64 * scale + dx;
                        let py = y + row as i64 * scale + dy;
                        if px < 0 || py < 0 || px >= canvas_w || py >= canvas_h {
                            continue;
                        }
                        canvas.put_pixel(px as u32, py as u32, color);
                    }
                }
            }
        }
    }
}
