use crate::{
    foundation::{
        config::RenderConfig,
        core::{Frame, FrameIndex, Rgb8},
    },
    input::rows::{MalformedRow, RowParse},
    layout::plan::LayoutPlan,
    render::{canvas::Canvas, progress::ProgressObserver},
};

/// What a rasterization pass did.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RasterReport {
    /// Frames consumed before the pass ended, including any that fell off the canvas.
    pub frames_consumed: u64,
    /// Frames that fell outside the planned canvas (input longer than the plan).
    pub frames_off_canvas: u64,
    /// The row that stopped the pass, if one did.
    pub truncated: Option<MalformedRow>,
}

impl RasterReport {
    /// `true` when every row was consumed.
    pub fn is_complete(&self) -> bool {
        self.truncated.is_none()
    }
}

/// Draws frames onto a canvas following a [`LayoutPlan`].
///
/// Only the first `num_leds - 1` LEDs of each frame are drawn unless
/// [`RenderConfig::draw_last_led`] is set.
#[derive(Debug)]
pub struct Rasterizer {
    plan: LayoutPlan,
    drawn_leds: u32,
    gutter_rgb: Rgb8,
    progress_every: u64,
    canvas: Canvas,
}

impl Rasterizer {
    /// Allocate a background-filled canvas for `plan`.
    pub fn new(cfg: &RenderConfig, plan: LayoutPlan) -> Self {
        Self {
            plan,
            drawn_leds: cfg.drawn_leds(),
            gutter_rgb: cfg.gutter_rgb,
            progress_every: cfg.progress_every.max(1),
            canvas: Canvas::for_plan(&plan, cfg.background_rgb),
        }
    }

    /// Give up the canvas once drawing is complete.
    pub fn finish(self) -> Canvas {
        self.canvas
    }

    /// Draw one frame, plus its gutter slice when the tile has a neighbour.
    ///
    /// Returns `false` (and draws nothing) when the plan has no place for `idx`.
    pub fn draw_frame(&mut self, idx: FrameIndex, frame: &Frame) -> bool {
        let Some(at) = self.plan.place(idx) else {
            return false;
        };

        for (v, &color) in (0..self.drawn_leds).zip(frame.leds()) {
            self.canvas.put(at.x.saturating_add(v), at.y, color);
        }

        if let Some(gx) = at.gutter_x {
            for g in 0..self.plan.gutter_px {
                self.canvas.put(gx.saturating_add(g), at.y, self.gutter_rgb);
            }
        }
        true
    }

    /// Draw rows in order until they run out or one is malformed.
    ///
    /// A malformed row ends the pass: rows already drawn stay, everything after it is left at
    /// background. This is reported, never raised.
    pub fn run<I>(&mut self, rows: I, observer: &mut dyn ProgressObserver) -> RasterReport
    where
        I: IntoIterator<Item = RowParse>,
    {
        let mut report = RasterReport::default();
        let mut idx = FrameIndex(0);
        observer.started(self.plan.frame_count);

        for row in rows {
            let frame = match row {
                RowParse::Frame(frame) => frame,
                RowParse::Malformed(bad) => {
                    observer.truncated(report.frames_consumed, &bad);
                    report.truncated = Some(bad);
                    break;
                }
            };

            if !self.draw_frame(idx, &frame) {
                report.frames_off_canvas += 1;
                tracing::debug!(frame = idx.0, "frame outside planned canvas; skipped");
            }
            idx = idx.next();
            report.frames_consumed += 1;
            if report.frames_consumed % self.progress_every == 0 {
                observer.progress(report.frames_consumed);
            }
        }

        observer.finished(report.frames_consumed);
        report
    }
}

/// Rasterize a whole row sequence onto a fresh canvas for `plan`.
pub fn rasterize<I>(
    cfg: &RenderConfig,
    plan: LayoutPlan,
    rows: I,
    observer: &mut dyn ProgressObserver,
) -> (Canvas, RasterReport)
where
    I: IntoIterator<Item = RowParse>,
{
    let mut r = Rasterizer::new(cfg, plan);
    let report = r.run(rows, observer);
    (r.finish(), report)
}

#[cfg(test)]
#[path = "../../tests/unit/render/raster.rs"]
mod tests;
