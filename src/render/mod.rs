pub(crate) mod canvas;
pub(crate) mod progress;
pub(crate) mod raster;
