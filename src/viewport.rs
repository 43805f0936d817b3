use nalgebra::Vector2;

use crate::config::{BOX_HEIGHT, BOX_WIDTH};

/// Current window size in pixels. Updated on resize, read by the physics
/// (wall margins) and by the renderer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Viewport {
        Viewport { width, height }
    }

    pub fn pixel_x(&self, x_mm: f64) -> i32 {
        (x_mm * self.width as f64 / BOX_WIDTH) as i32
    }

    pub fn pixel_y(&self, y_mm: f64) -> i32 {
        (y_mm * self.height as f64 / BOX_HEIGHT) as i32
    }

    /// Screen position of a simulation point. Screen y grows downward.
    pub fn to_screen(&self, position: &Vector2<f64>) -> (i32, i32) {
        (
            self.pixel_x(position.x),
            self.height as i32 - self.pixel_y(position.y),
        )
    }

    /// Radii scale with the horizontal axis.
    pub fn pixel_radius(&self, radius_mm: f64) -> i32 {
        self.pixel_x(radius_mm)
    }

    pub fn x_mm(&self, pixel_x: i32) -> f64 {
        pixel_x as f64 * BOX_WIDTH / self.width as f64
    }
}
