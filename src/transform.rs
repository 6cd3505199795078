//! Model-to-pixel coordinate transform.
//!
//! The diagram lives in a mathematical coordinate system centered on the
//! viewport: one model unit maps to a fixed number of pixels, the x axis
//! grows to the right and the y axis grows **up**, while pixel rows grow
//! down. All geometry is produced in `f64` and only rounded to integer
//! pixels at the drawing edge.

/// Pixels per model unit.
pub const PIXELS_PER_UNIT: f64 = 45.0;

/// Pixel viewport the scene is projected into.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
    /// Pixels per model unit.
    pub scale: f64,
}

impl Viewport {
    /// Viewport with the default scale of [`PIXELS_PER_UNIT`].
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            scale: PIXELS_PER_UNIT,
        }
    }

    /// Pixel coordinates of the model origin (the viewport center).
    pub fn center(&self) -> (f64, f64) {
        (f64::from(self.width) / 2.0, f64::from(self.height) / 2.0)
    }

    /// Projects a model point to fractional pixel coordinates.
    ///
    /// `px = cx + x * scale`, `py = cy - y * scale` (y grows up in model
    /// space, down in pixel space).
    pub fn to_pixel(&self, x: f64, y: f64) -> (f64, f64) {
        let (cx, cy) = self.center();
        (cx + x * self.scale, cy - y * self.scale)
    }
}
