//! Feature graphic composition.
//!
//! Screenshots are scaled to a shared height, packed into a centered row on a
//! white canvas, captioned with a title banner and written out as PNG.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;
use image::codecs::png::PngEncoder;
use image::imageops::{self, FilterType};
use image::{DynamicImage, GenericImageView, ImageFormat, Rgb, RgbImage};
use tracing::{debug, info};

use crate::config::ComposerConfig;
use crate::error::{ComposeError, Result};
use crate::image_loader::open_image;
use crate::layout::{RowLayout, RowPlan};
use crate::text::{TitleBanner, TitleFont};

const BACKGROUND: Rgb<u8> = Rgb([255, 255, 255]);

/// Fails with `MissingCapability` if the image library cannot write PNG.
pub fn ensure_png_support() -> Result<()> {
    if ImageFormat::Png.writing_enabled() {
        Ok(())
    } else {
        Err(ComposeError::MissingCapability { format: "PNG" })
    }
}

/// Composes `screenshots` into a feature graphic at `output` with default settings.
pub fn compose(screenshots: &[PathBuf], output: &Path) -> Result<PathBuf> {
    GraphicComposer::new(ComposerConfig::new(screenshots.to_vec(), output.to_path_buf())).compose()
}

pub struct GraphicComposer {
    config: ComposerConfig,
}

impl GraphicComposer {
    pub fn new(config: ComposerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ComposerConfig {
        &self.config
    }

    fn layout(&self) -> RowLayout {
        RowLayout::new(
            self.config.canvas_width,
            self.config.canvas_height,
            self.config.padding,
        )
    }

    /// Runs the whole pipeline and returns the path that was written.
    ///
    /// All screenshots are decoded before the output file is created, so a
    /// decode failure leaves nothing behind.
    pub fn compose(&self) -> Result<PathBuf> {
        let canvas = self.render()?;
        save_png(&canvas, &self.config.output_path)?;
        info!(
            output = ?self.config.output_path,
            screenshots = self.config.screenshots.len(),
            "Saved feature graphic"
        );
        Ok(self.config.output_path.clone())
    }

    /// Produces the composed canvas without writing it anywhere.
    pub fn render(&self) -> Result<RgbImage> {
        let images = self
            .config
            .screenshots
            .iter()
            .map(|path| open_image(path))
            .collect::<Result<Vec<_>>>()?;

        let mut canvas = RgbImage::from_pixel(
            self.config.canvas_width,
            self.config.canvas_height,
            BACKGROUND,
        );

        let plan = self.paste_row(&mut canvas, &images);
        debug!(
            total_width = plan.total_width,
            x_offset = plan.x_offset,
            "Placed screenshot row"
        );

        let font = TitleFont::load(self.config.font_path.as_deref(), self.config.font_size);
        let banner = TitleBanner::new(self.config.canvas_width, &self.config.title_text, &font);
        debug!(
            builtin_font = font.is_builtin(),
            text_width = banner.text_width,
            text_height = banner.text_height,
            "Drawing title banner"
        );
        banner.draw(&mut canvas, &font);

        Ok(canvas)
    }

    fn paste_row(&self, canvas: &mut RgbImage, images: &[DynamicImage]) -> RowPlan {
        let sources: Vec<(u32, u32)> = images.iter().map(|img| img.dimensions()).collect();
        let plan = self.layout().plan(&sources);

        for (img, placement) in images.iter().zip(&plan.placements) {
            let resized = img
                .resize_exact(placement.width, placement.height, FilterType::Lanczos3)
                .to_rgb8();
            // Pixels beyond the canvas edge are dropped.
            imageops::replace(canvas, &resized, placement.x, placement.y);
        }

        plan
    }
}

fn save_png(canvas: &RgbImage, dst: &Path) -> Result<()> {
    write_png(canvas, dst).map_err(|source| ComposeError::Write {
        path: dst.to_path_buf(),
        source,
    })
}

fn write_png(canvas: &RgbImage, dst: &Path) -> anyhow::Result<()> {
    let file = File::create(dst).with_context(|| format!("Failed to create file: {:?}", dst))?;
    let mut writer = BufWriter::new(file);

    let encoder = PngEncoder::new(&mut writer);
    canvas
        .write_with_encoder(encoder)
        .with_context(|| format!("Failed to encode PNG: {:?}", dst))?;
    writer
        .flush()
        .with_context(|| format!("Failed to flush PNG: {:?}", dst))?;

    debug!(?dst, "Wrote PNG");
    Ok(())
}
