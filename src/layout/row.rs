/// Geometry for a single centered row of screenshots.
///
/// Every tile shares the same height (`canvas_height - 2 * padding`) and its
/// width follows the source aspect ratio. Tiles are packed left-to-right with
/// no gaps and the packed block is centered horizontally. The row is never
/// wrapped or scaled to fit: a block wider than the canvas gets a negative
/// offset and its edges fall off the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowLayout {
    pub canvas_width: u32,
    pub canvas_height: u32,
    /// Space above and below the row in pixels (default: 20)
    pub padding: u32,
}

/// Where one resized screenshot lands on the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub x: i64,
    pub y: i64,
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowPlan {
    pub placements: Vec<Placement>,
    /// Sum of all tile widths.
    pub total_width: u64,
    /// Left edge of the first tile. Negative when the row overflows.
    pub x_offset: i64,
}

impl RowLayout {
    pub fn new(canvas_width: u32, canvas_height: u32, padding: u32) -> Self {
        Self {
            canvas_width,
            canvas_height,
            padding,
        }
    }

    /// Height every screenshot is scaled to.
    pub fn target_height(&self) -> u32 {
        self.canvas_height
            .saturating_sub(self.padding.saturating_mul(2))
            .max(1)
    }

    /// Scaled size of a `src_width` x `src_height` screenshot.
    ///
    /// Width is `round(target_height * src_width / src_height)`, never below 1.
    /// Degenerate sources get a square tile.
    pub fn resized_dimensions(&self, src_width: u32, src_height: u32) -> (u32, u32) {
        let target_height = self.target_height();
        if src_width == 0 || src_height == 0 {
            return (target_height, target_height);
        }

        let aspect_ratio = src_height as f64 / src_width as f64;
        let width = (target_height as f64 / aspect_ratio).round() as u32;
        (width.max(1), target_height)
    }

    /// Computes placements for screenshots of the given source dimensions.
    ///
    /// # Algorithm
    /// 1. Scale each source to the shared target height.
    /// 2. Sum the scaled widths.
    /// 3. Start at `floor((canvas_width - total_width) / 2)` and advance the
    ///    cursor by each tile width.
    pub fn plan(&self, sources: &[(u32, u32)]) -> RowPlan {
        let sizes: Vec<(u32, u32)> = sources
            .iter()
            .map(|&(w, h)| self.resized_dimensions(w, h))
            .collect();

        let total_width: u64 = sizes.iter().map(|&(w, _)| w as u64).sum();
        let x_offset = (self.canvas_width as i64 - total_width as i64).div_euclid(2);
        let y = self.padding as i64;

        let mut cursor = x_offset;
        let placements = sizes
            .into_iter()
            .map(|(width, height)| {
                let placement = Placement {
                    x: cursor,
                    y,
                    width,
                    height,
                };
                cursor += width as i64;
                placement
            })
            .collect();

        RowPlan {
            placements,
            total_width,
            x_offset,
        }
    }
}

impl Default for RowLayout {
    fn default() -> Self {
        Self::new(
            crate::config::DEFAULT_CANVAS_WIDTH,
            crate::config::DEFAULT_CANVAS_HEIGHT,
            crate::config::DEFAULT_PADDING,
        )
    }
}
