use image::{Rgb, RgbImage};

use super::font::TitleFont;

/// Distance from the canvas top to the top of the title line box.
pub const TEXT_TOP: f32 = 10.0;
/// Horizontal margin of the background around the text.
pub const MARGIN_X: f32 = 10.0;
/// Vertical margin of the background around the text.
pub const MARGIN_Y: f32 = 5.0;

pub const BANNER_FILL: Rgb<u8> = Rgb([0, 0, 0]);
pub const TEXT_FILL: Rgb<u8> = Rgb([255, 255, 255]);

/// A title caption on a filled background, centered horizontally.
#[derive(Debug, Clone, PartialEq)]
pub struct TitleBanner {
    pub text: String,
    pub text_x: f32,
    pub text_y: f32,
    pub text_width: u32,
    pub text_height: u32,
}

impl TitleBanner {
    /// Measures `text` with `font` and centers it on a canvas `canvas_width` wide.
    pub fn new(canvas_width: u32, text: &str, font: &TitleFont) -> Self {
        let (text_width, text_height) = font.measure(text);
        Self {
            text: text.to_string(),
            text_x: (canvas_width as f32 - text_width as f32) / 2.0,
            text_y: TEXT_TOP,
            text_width,
            text_height,
        }
    }

    /// Background rectangle as inclusive `(x0, y0, x1, y1)` corners.
    pub fn background(&self) -> (f32, f32, f32, f32) {
        (
            self.text_x - MARGIN_X,
            self.text_y - MARGIN_Y,
            self.text_x + self.text_width as f32 + MARGIN_X,
            self.text_y + self.text_height as f32 + MARGIN_Y,
        )
    }

    pub fn draw(&self, canvas: &mut RgbImage, font: &TitleFont) {
        let (x0, y0, x1, y1) = self.background();
        fill_rect(
            canvas,
            x0.round() as i64,
            y0.round() as i64,
            x1.round() as i64,
            y1.round() as i64,
            BANNER_FILL,
        );
        font.draw(canvas, self.text_x, self.text_y, &self.text, TEXT_FILL);
    }
}

/// Fills the inclusive rectangle `[x0, x1] x [y0, y1]`, clipped to the canvas.
pub fn fill_rect(canvas: &mut RgbImage, x0: i64, y0: i64, x1: i64, y1: i64, color: Rgb<u8>) {
    if canvas.width() == 0 || canvas.height() == 0 {
        return;
    }
    let max_x = canvas.width() as i64 - 1;
    let max_y = canvas.height() as i64 - 1;
    let (x0, x1) = (x0.max(0), x1.min(max_x));
    let (y0, y1) = (y0.max(0), y1.min(max_y));
    if x0 > x1 || y0 > y1 {
        return;
    }

    for y in y0..=y1 {
        for x in x0..=x1 {
            canvas.put_pixel(x as u32, y as u32, color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::builtin;

    const WHITE: Rgb<u8> = Rgb([255, 255, 255]);

    #[test]
    fn test_banner_is_centered() {
        let font = TitleFont::Builtin;
        let banner = TitleBanner::new(1024, "Focus", &font);
        let (w, h) = builtin::measure("Focus");

        assert_eq!((banner.text_width, banner.text_height), (w, h));
        assert_eq!(banner.text_x, (1024.0 - w as f32) / 2.0);
        assert_eq!(banner.text_y, 10.0);
    }

    #[test]
    fn test_background_margins() {
        let banner = TitleBanner {
            text: "x".into(),
            text_x: 100.0,
            text_y: 10.0,
            text_width: 50,
            text_height: 20,
        };
        assert_eq!(banner.background(), (90.0, 5.0, 160.0, 35.0));
    }

    #[test]
    fn test_fill_rect_is_inclusive() {
        let mut canvas = RgbImage::from_pixel(10, 10, WHITE);
        fill_rect(&mut canvas, 2, 3, 4, 5, BANNER_FILL);

        let filled = canvas.pixels().filter(|p| **p == BANNER_FILL).count();
        assert_eq!(filled, 9);
        assert_eq!(*canvas.get_pixel(2, 3), BANNER_FILL);
        assert_eq!(*canvas.get_pixel(4, 5), BANNER_FILL);
        assert_eq!(*canvas.get_pixel(5, 5), WHITE);
    }

    #[test]
    fn test_fill_rect_clips() {
        let mut canvas = RgbImage::from_pixel(10, 10, WHITE);
        fill_rect(&mut canvas, -20, -20, 100, 0, BANNER_FILL);
        let filled = canvas.pixels().filter(|p| **p == BANNER_FILL).count();
        assert_eq!(filled, 10);

        fill_rect(&mut canvas, 20, 20, 30, 30, BANNER_FILL);
        assert_eq!(canvas.pixels().filter(|p| **p == BANNER_FILL).count(), 10);
    }

    #[test]
    fn test_truetype_title_stays_inside_banner() {
        let font = TitleFont::from_bytes(
            include_bytes!("../../tests/fixtures/DejaVuSans-Bold.ttf").to_vec(),
            40.0,
        )
        .unwrap();
        let red = Rgb([200, 0, 0]);
        let mut canvas = RgbImage::from_pixel(1024, 120, red);
        let banner = TitleBanner::new(1024, "Pomodoro Timer: Focus & Productivity", &font);
        assert!(banner.text_width > 0 && banner.text_height > 0);
        assert!(banner.text_height <= 60);
        banner.draw(&mut canvas, &font);

        let (x0, y0, x1, y1) = banner.background();
        let (x0, y0, x1, y1) = (x0.round(), y0.round(), x1.round(), y1.round());
        let mut white = 0;
        for (x, y, p) in canvas.enumerate_pixels() {
            let (fx, fy) = (x as f32, y as f32);
            let inside = fx >= x0 && fx <= x1 && fy >= y0 && fy <= y1;
            if inside {
                // Glyph coverage blends white over the black fill.
                assert!(p.0[0] == p.0[1] && p.0[1] == p.0[2], "({}, {}) is {:?}", x, y, p);
                if *p == TEXT_FILL {
                    white += 1;
                }
            } else {
                assert_eq!(*p, red, "pixel ({}, {}) outside banner", x, y);
            }
        }
        assert!(white > 0);
    }

    #[test]
    fn test_draw_paints_black_box_with_white_text() {
        let font = TitleFont::Builtin;
        let mut canvas = RgbImage::from_pixel(200, 60, WHITE);
        let banner = TitleBanner::new(200, "Go", &font);
        banner.draw(&mut canvas, &font);

        let (x0, y0, _, _) = banner.background();
        assert_eq!(*canvas.get_pixel(x0.round() as u32, y0.round() as u32), BANNER_FILL);
        // Canvas corners stay untouched.
        assert_eq!(*canvas.get_pixel(0, 0), WHITE);
        assert_eq!(*canvas.get_pixel(199, 59), WHITE);

        // Some white text pixels inside the text box.
        let tx = banner.text_x.round() as u32;
        let ty = banner.text_y as u32;
        let lit = (ty..ty + banner.text_height)
            .flat_map(|y| (tx..tx + banner.text_width).map(move |x| (x, y)))
            .filter(|&(x, y)| *canvas.get_pixel(x, y) == WHITE)
            .count();
        assert!(lit > 0);
    }
}
