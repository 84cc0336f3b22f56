use std::path::{Path, PathBuf};

use crate::{
    encode::png::{default_output_path, write_png},
    foundation::{config::RenderConfig, error::LedTraceResult},
    input::rows::{FrameReader, count_frames},
    layout::plan::{LayoutPlan, plan},
    render::{
        canvas::Canvas,
        progress::ProgressObserver,
        raster::{RasterReport, rasterize},
    },
};

/// One input table to turn into one timeline image.
#[derive(Clone, Debug)]
pub struct RenderJob {
    /// CSV table, one frame per row.
    pub input: PathBuf,
    /// Destination PNG.
    pub output: PathBuf,
    /// Stack the timeline into fixed-height tiles.
    pub tile_mode: bool,
    /// Geometry and colors.
    pub config: RenderConfig,
}

impl RenderJob {
    /// A job writing next to `input` with default settings.
    pub fn new(input: impl Into<PathBuf>, tile_mode: bool) -> Self {
        let input = input.into();
        Self {
            output: default_output_path(&input),
            input,
            tile_mode,
            config: RenderConfig::default(),
        }
    }
}

/// Result of a completed job.
#[derive(Clone, Debug)]
pub struct RenderOutcome {
    /// Where the image was written.
    pub output: PathBuf,
    /// Geometry used.
    pub plan: LayoutPlan,
    /// What the rasterizer consumed.
    pub report: RasterReport,
}

/// Plan and rasterize the table at `input` without writing anything.
///
/// Reads the file twice: once to count frames for the plan, once to draw them.
#[tracing::instrument(skip(cfg, observer))]
pub fn render_timeline(
    input: &Path,
    cfg: &RenderConfig,
    tile_mode: bool,
    observer: &mut dyn ProgressObserver,
) -> LedTraceResult<(Canvas, LayoutPlan, RasterReport)> {
    cfg.validate()?;

    let frame_count = count_frames(input)?;
    let layout = plan(cfg, frame_count, tile_mode);
    tracing::debug!(
        frame_count,
        width = layout.canvas_width,
        height = layout.canvas_height,
        columns = layout.columns_per_tile,
        pixels = layout.pixel_count(),
        "planned canvas"
    );

    let rows = FrameReader::open(input, cfg)?;
    let (canvas, report) = rasterize(cfg, layout, rows, observer);
    Ok((canvas, layout, report))
}

/// Run a whole job: plan, rasterize, write the PNG.
///
/// A malformed row does not fail the job; the image is still written with the rows drawn before
/// it, and [`RasterReport::truncated`] says where drawing stopped.
#[tracing::instrument(skip(job, observer), fields(input = %job.input.display()))]
pub fn convert_file(
    job: &RenderJob,
    observer: &mut dyn ProgressObserver,
) -> LedTraceResult<RenderOutcome> {
    let (canvas, layout, report) =
        render_timeline(&job.input, &job.config, job.tile_mode, observer)?;
    write_png(canvas, &job.output)?;
    tracing::info!(output = %job.output.display(), "wrote timeline");

    Ok(RenderOutcome {
        output: job.output.clone(),
        plan: layout,
        report,
    })
}
