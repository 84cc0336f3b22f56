use crate::input::rows::MalformedRow;

/// Receives informational notifications while a timeline is rasterized.
///
/// Observers never influence the output canvas.
pub trait ProgressObserver {
    /// Called once before the first frame with the planned frame count.
    fn started(&mut self, total_frames: u64);

    /// Called each time the number of consumed frames reaches a multiple of the progress interval.
    fn progress(&mut self, frames_consumed: u64);

    /// Called when a malformed row ends the pass early.
    fn truncated(&mut self, frames_consumed: u64, row: &MalformedRow);

    /// Called once after the last frame.
    fn finished(&mut self, frames_consumed: u64) {
        let _ = frames_consumed;
    }
}

/// Reports progress as `tracing` events.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingProgress;

impl ProgressObserver for TracingProgress {
    fn started(&mut self, total_frames: u64) {
        tracing::info!(total_frames, "renders: {total_frames}");
    }

    fn progress(&mut self, frames_consumed: u64) {
        tracing::info!(frames_consumed, "{frames_consumed}");
    }

    fn truncated(&mut self, frames_consumed: u64, row: &MalformedRow) {
        tracing::warn!(
            frames_consumed,
            line = row.line,
            "stopped at malformed row ({}); remaining rows left blank",
            row.defect
        );
    }

    fn finished(&mut self, frames_consumed: u64) {
        tracing::debug!(frames_consumed, "rasterization finished");
    }
}

/// Discards every notification.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoProgress;

impl ProgressObserver for NoProgress {
    fn started(&mut self, _total_frames: u64) {}

    fn progress(&mut self, _frames_consumed: u64) {}

    fn truncated(&mut self, _frames_consumed: u64, _row: &MalformedRow) {}
}
