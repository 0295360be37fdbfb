use serde::{Deserialize, Serialize};

#[cfg(test)]
#[path = "scale_test.rs"]
mod scale_test;

/// A point in either screen or image space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Static magnification between image pixels and screen (canvas) pixels.
///
/// `factor` is always finite and positive; construct through [`Scale::new`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scale {
    factor: f64,
}

impl Default for Scale {
    fn default() -> Self {
        Self { factor: 1.0 }
    }
}

impl Scale {
    /// Wrap a scale factor. Returns `None` unless it is finite and positive.
    #[must_use]
    pub fn new(factor: f64) -> Option<Self> {
        (factor.is_finite() && factor > 0.0).then_some(Self { factor })
    }

    /// The raw multiplier.
    #[must_use]
    pub fn factor(self) -> f64 {
        self.factor
    }

    /// Convert a screen-space point (canvas pixels) to image coordinates.
    #[must_use]
    pub fn screen_to_image(self, screen: Point) -> Point {
        Point {
            x: screen.x / self.factor,
            y: screen.y / self.factor,
        }
    }

    /// Convert an image-space point to screen coordinates.
    #[must_use]
    pub fn image_to_screen(self, image: Point) -> Point {
        Point {
            x: image.x * self.factor,
            y: image.y * self.factor,
        }
    }

    /// Convert a screen-space distance to image-space distance.
    #[must_use]
    pub fn screen_dist_to_image(self, screen_dist: f64) -> f64 {
        screen_dist / self.factor
    }

    /// Convert an image-space distance to screen-space distance.
    #[must_use]
    pub fn image_dist_to_screen(self, image_dist: f64) -> f64 {
        image_dist * self.factor
    }
}
