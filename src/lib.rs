//! ledtrace turns captured LED strip color histories into timeline images.
//!
//! Input is a headerless CSV table with one row per captured frame and three integer channel
//! values (`r,g,b`) per LED. Output is an RGB PNG where each pixel column is one LED and each
//! pixel row is one frame.
//!
//! # Pipeline overview
//!
//! 1. **Count**: one pass over the table to learn the frame count
//! 2. **Plan**: `frame count + RenderConfig -> LayoutPlan` (canvas size and per-frame placement)
//! 3. **Rasterize**: rows are drawn in order onto a [`Canvas`]
//! 4. **Encode**: the finished canvas is written as PNG
//!
//! Long timelines can be tiled: frames are cut into fixed-height tiles placed side by side with a
//! dark gutter between them.
//!
//! A malformed row (too few fields, a non-integer channel) stops drawing at that row. The image is
//! still written, and the stop is reported in [`RasterReport`] and logged as a warning.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod encode;
mod foundation;
mod input;
mod layout;
mod pipeline;
mod render;

pub use encode::png::{default_output_path, ensure_parent_dir, write_png};
pub use foundation::config::{
    DEFAULT_GUTTER_PX, DEFAULT_NUM_LEDS, DEFAULT_PROGRESS_EVERY, DEFAULT_ROWS_PER_TILE,
    RenderConfig,
};
pub use foundation::core::{Frame, FrameIndex, Rgb8};
pub use foundation::error::{LedTraceError, LedTraceResult};
pub use input::rows::{
    FrameReader, MalformedRow, RowDefect, RowParse, count_frames, count_rows, parse_record,
};
pub use layout::plan::{LayoutPlan, Placement, plan};
pub use pipeline::{RenderJob, RenderOutcome, convert_file, render_timeline};
pub use render::canvas::Canvas;
pub use render::progress::{NoProgress, ProgressObserver, TracingProgress};
pub use render::raster::{RasterReport, Rasterizer, rasterize};
