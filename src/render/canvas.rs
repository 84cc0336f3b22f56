use crate::{foundation::core::Rgb8, layout::plan::LayoutPlan};

/// Owned RGB8 pixel grid the rasterizer draws into.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Canvas {
    img: image::RgbImage,
}

impl Canvas {
    /// A `width` x `height` canvas filled with `background`.
    pub fn new(width: u32, height: u32, background: Rgb8) -> Self {
        Self {
            img: image::RgbImage::from_pixel(width, height, background.into()),
        }
    }

    /// A canvas sized by `plan`.
    pub fn for_plan(plan: &LayoutPlan, background: Rgb8) -> Self {
        Self::new(plan.canvas_width, plan.canvas_height, background)
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.img.width()
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.img.height()
    }

    /// Set one pixel. Writes outside the canvas are dropped; returns whether the write landed.
    pub fn put(&mut self, x: u32, y: u32, color: Rgb8) -> bool {
        match self.img.get_pixel_mut_checked(x, y) {
            Some(px) => {
                *px = color.into();
                true
            }
            None => false,
        }
    }

    /// Read one pixel.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgb8> {
        self.img.get_pixel_checked(x, y).map(|&px| px.into())
    }

    /// Packed RGB bytes, row-major.
    pub fn as_raw(&self) -> &[u8] {
        self.img.as_raw()
    }

    /// Hand the pixels over for encoding.
    pub fn into_image(self) -> image::RgbImage {
        self.img
    }
}
