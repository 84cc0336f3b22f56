use std::path::{Path, PathBuf};

use crate::{
    foundation::error::{LedTraceError, LedTraceResult},
    render::canvas::Canvas,
};

/// Default output location: the input path with `.png` appended (`colors.csv` -> `colors.csv.png`).
pub fn default_output_path(input: &Path) -> PathBuf {
    let mut name = input.as_os_str().to_os_string();
    name.push(".png");
    PathBuf::from(name)
}

/// Create `path`'s parent directory if it does not exist yet.
pub fn ensure_parent_dir(path: &Path) -> LedTraceResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| {
            LedTraceError::encode(format!("create output dir '{}': {e}", parent.display()))
        })?;
    }
    Ok(())
}

/// Write a finished canvas to `path` as an RGB8 PNG.
pub fn write_png(canvas: Canvas, path: &Path) -> LedTraceResult<()> {
    if canvas.width() == 0 || canvas.height() == 0 {
        return Err(LedTraceError::encode(format!(
            "cannot write a {}x{} image to '{}'",
            canvas.width(),
            canvas.height(),
            path.display()
        )));
    }
    ensure_parent_dir(path)?;

    canvas
        .into_image()
        .save_with_format(path, image::ImageFormat::Png)
        .map_err(|e| LedTraceError::encode(format!("write png '{}': {e}", path.display())))
}

#[cfg(test)]
#[path = "../../tests/unit/encode/png.rs"]
mod tests;
