use std::{fs::File, io::BufReader, path::Path};

use anyhow::Context as _;

use crate::foundation::{
    core::Rgb8,
    error::{LedTraceError, LedTraceResult},
};

/// LEDs on the strips this tool was built for.
pub const DEFAULT_NUM_LEDS: u32 = 240;
/// Frames stacked vertically in one tile.
pub const DEFAULT_ROWS_PER_TILE: u32 = 2000;
/// Width of the separator between tiles.
pub const DEFAULT_GUTTER_PX: u32 = 10;
/// Frames between progress notifications.
pub const DEFAULT_PROGRESS_EVERY: u64 = 1000;

/// Settings shared by the layout planner and the rasterizer.
///
/// Every field has a default, so a JSON config file only needs the keys it overrides.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderConfig {
    /// LEDs per frame; also the width of one tile in pixels.
    pub num_leds: u32,
    /// Frames per tile when tiling.
    pub rows_per_tile: u32,
    /// Separator width between tiles.
    pub gutter_px: u32,
    /// Separator color.
    pub gutter_rgb: Rgb8,
    /// Canvas fill for pixels no frame touches.
    pub background_rgb: Rgb8,
    /// Emit a progress notification every this many frames.
    pub progress_every: u64,
    /// Draw the final LED too. When off, the last LED column stays at background, matching
    /// previously rendered timelines.
    pub draw_last_led: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            num_leds: DEFAULT_NUM_LEDS,
            rows_per_tile: DEFAULT_ROWS_PER_TILE,
            gutter_px: DEFAULT_GUTTER_PX,
            gutter_rgb: Rgb8::GUTTER,
            background_rgb: Rgb8::BLACK,
            progress_every: DEFAULT_PROGRESS_EVERY,
            draw_last_led: false,
        }
    }
}

impl RenderConfig {
    /// Load a config from a JSON file and validate it.
    pub fn from_path(path: &Path) -> LedTraceResult<Self> {
        let f = File::open(path)
            .with_context(|| format!("open render config '{}'", path.display()))?;
        let cfg: Self = serde_json::from_reader(BufReader::new(f))
            .with_context(|| format!("parse render config '{}'", path.display()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Reject settings that would produce an empty or undefined layout.
    pub fn validate(&self) -> LedTraceResult<()> {
        if self.num_leds == 0 {
            return Err(LedTraceError::validation("num_leds must be > 0"));
        }
        if self.rows_per_tile == 0 {
            return Err(LedTraceError::validation("rows_per_tile must be > 0"));
        }
        if self.progress_every == 0 {
            return Err(LedTraceError::validation("progress_every must be > 0"));
        }
        Ok(())
    }

    /// Number of input fields a row must carry to form a complete frame.
    pub fn fields_per_row(&self) -> usize {
        usize::try_from(self.num_leds)
            .unwrap_or(usize::MAX)
            .saturating_mul(3)
    }

    /// Number of leading LEDs the rasterizer draws for each frame.
    pub fn drawn_leds(&self) -> u32 {
        if self.draw_last_led {
            self.num_leds
        } else {
            self.num_leds.saturating_sub(1)
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/config.rs"]
mod tests;
