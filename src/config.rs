//! Settings for a composition run.

use std::path::PathBuf;

/// Default canvas width in pixels.
pub const DEFAULT_CANVAS_WIDTH: u32 = 1024;

/// Default canvas height in pixels.
pub const DEFAULT_CANVAS_HEIGHT: u32 = 500;

/// Space above and below the screenshot row.
pub const DEFAULT_PADDING: u32 = 20;

/// Title point size for TrueType faces.
pub const DEFAULT_FONT_SIZE: f32 = 40.0;

pub const DEFAULT_FONT_PATH: &str = "flutter/pomodoro_timer/assets/fonts/Quicksand-Bold.ttf";

pub const DEFAULT_TITLE: &str = "Pomodoro Timer: Focus & Productivity";

pub const DEFAULT_OUTPUT: &str = "feature_graphic.png";

/// Everything the composer needs to produce one feature graphic.
#[derive(Debug, Clone, PartialEq)]
pub struct ComposerConfig {
    /// Screenshots in left-to-right order.
    pub screenshots: Vec<PathBuf>,
    /// Where the PNG is written.
    pub output_path: PathBuf,
    pub canvas_width: u32,
    pub canvas_height: u32,
    /// Vertical padding; the row height is `canvas_height - 2 * padding`.
    pub padding: u32,
    /// Preferred title font. `None` goes straight to the built-in face.
    pub font_path: Option<PathBuf>,
    pub font_size: f32,
    pub title_text: String,
}

impl Default for ComposerConfig {
    fn default() -> Self {
        Self {
            screenshots: Vec::new(),
            output_path: PathBuf::from(DEFAULT_OUTPUT),
            canvas_width: DEFAULT_CANVAS_WIDTH,
            canvas_height: DEFAULT_CANVAS_HEIGHT,
            padding: DEFAULT_PADDING,
            font_path: Some(PathBuf::from(DEFAULT_FONT_PATH)),
            font_size: DEFAULT_FONT_SIZE,
            title_text: DEFAULT_TITLE.to_string(),
        }
    }
}

impl ComposerConfig {
    /// Default settings for the given screenshots and output path.
    pub fn new(screenshots: Vec<PathBuf>, output_path: PathBuf) -> Self {
        Self {
            screenshots,
            output_path,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_feature_graphic_size() {
        let config = ComposerConfig::default();
        assert_eq!(config.canvas_width, 1024);
        assert_eq!(config.canvas_height, 500);
        assert_eq!(config.padding, 20);
        assert_eq!(config.output_path, PathBuf::from("feature_graphic.png"));
        assert!(config.screenshots.is_empty());
    }

    #[test]
    fn test_new_keeps_other_defaults() {
        let config = ComposerConfig::new(vec![PathBuf::from("a.png")], PathBuf::from("out.png"));
        assert_eq!(config.screenshots, vec![PathBuf::from("a.png")]);
        assert_eq!(config.output_path, PathBuf::from("out.png"));
        assert_eq!(config.title_text, DEFAULT_TITLE);
        assert_eq!(config.font_size, DEFAULT_FONT_SIZE);
    }
}
