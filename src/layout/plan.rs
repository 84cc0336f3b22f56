use crate::foundation::{config::RenderConfig, core::FrameIndex};

/// Canvas geometry for one timeline, derived once before any frame is drawn.
///
/// Untiled, every frame is one full-width row. Tiled, the timeline is cut into tiles of
/// `rows_per_tile` frames placed left to right, with a gutter between neighbouring tiles only.
/// The last tile gets no trailing gutter, so its unused rows and the area right of it are never
/// reserved.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LayoutPlan {
    /// Output width in pixels.
    pub canvas_width: u32,
    /// Output height in pixels.
    pub canvas_height: u32,
    /// Number of tiles laid side by side (always 1 when not tiling).
    pub columns_per_tile: u32,
    /// Frames per tile.
    pub rows_per_tile: u32,
    /// Whether the plan was made in tile mode.
    pub tile_mode: bool,
    /// Frames the plan was sized for.
    pub frame_count: u64,
    /// Pixel width of one LED block.
    pub num_leds: u32,
    /// Pixel width of the gutter after each non-final tile.
    pub gutter_px: u32,
}

/// Where a frame lands on the canvas.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Placement {
    /// Tile holding the frame.
    pub tile: u32,
    /// Canvas column of LED 0.
    pub x: u32,
    /// Canvas row.
    pub y: u32,
    /// First gutter column to the right of the LED block, if this tile has a neighbour.
    pub gutter_x: Option<u32>,
}

/// Size the canvas for `frame_count` frames.
///
/// Never fails; arithmetic saturates so oversized inputs produce an oversized plan rather than a
/// wrapped one.
pub fn plan(cfg: &RenderConfig, frame_count: u64, tile_mode: bool) -> LayoutPlan {
    let num_leds = cfg.num_leds;
    let gutter_px = cfg.gutter_px;
    let rows_per_tile = cfg.rows_per_tile.max(1);

    if !tile_mode {
        return LayoutPlan {
            canvas_width: num_leds,
            canvas_height: u32::try_from(frame_count).unwrap_or(u32::MAX),
            columns_per_tile: 1,
            rows_per_tile,
            tile_mode,
            frame_count,
            num_leds,
            gutter_px,
        };
    }

    let columns = frame_count.div_ceil(u64::from(rows_per_tile)).max(1);
    let columns = u32::try_from(columns).unwrap_or(u32::MAX);
    let canvas_width = columns
        .saturating_mul(num_leds)
        .saturating_add(gutter_px.saturating_mul(columns - 1));

    LayoutPlan {
        canvas_width,
        canvas_height: rows_per_tile,
        columns_per_tile: columns,
        rows_per_tile,
        tile_mode,
        frame_count,
        num_leds,
        gutter_px,
    }
}

impl LayoutPlan {
    /// Horizontal distance between the origins of neighbouring tiles.
    pub fn tile_stride(&self) -> u32 {
        self.num_leds.saturating_add(self.gutter_px)
    }

    /// Number of pixels in the canvas.
    pub fn pixel_count(&self) -> u64 {
        u64::from(self.canvas_width) * u64::from(self.canvas_height)
    }

    /// Map a frame index to its canvas position, or `None` if it falls outside the plan.
    pub fn place(&self, frame: FrameIndex) -> Option<Placement> {
        if !self.tile_mode {
            let y = u32::try_from(frame.0).ok()?;
            if y >= self.canvas_height {
                return None;
            }
            return Some(Placement {
                tile: 0,
                x: 0,
                y,
                gutter_x: None,
            });
        }

        let rows = u64::from(self.rows_per_tile);
        let tile = u32::try_from(frame.0 / rows).ok()?;
        if tile >= self.columns_per_tile {
            return None;
        }
        let y = u32::try_from(frame.0 % rows).ok()?;
        let x = tile.checked_mul(self.tile_stride())?;
        let gutter_x = if tile + 1 < self.columns_per_tile {
            x.checked_add(self.num_leds)
        } else {
            None
        };

        Some(Placement {
            tile,
            x,
            y,
            gutter_x,
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/plan.rs"]
mod tests;
