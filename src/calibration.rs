//! Pixel to plot-value mapping defined by the guide lines.
//!
//! The overlay exists so a user can mark two known ticks on each axis of a
//! plot image. `X1`/`X2` (left/right vertical lines) sit on `x_min`/`x_max`;
//! `Y1`/`Y2` (lower/upper horizontal lines) sit on `y_min`/`y_max`. Pixel y
//! grows downward, so the y mapping is inverted by construction.

#[cfg(test)]
#[path = "calibration_test.rs"]
mod calibration_test;

use std::fmt;
use std::str::FromStr;

use crate::lines::{GuideLines, Line};
use crate::scale::Point;

/// Plot axis identifier, used in error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::X => "x",
            Self::Y => "y",
        })
    }
}

/// How plot values are spaced along an axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AxisScale {
    #[default]
    Linear,
    /// Decades are evenly spaced; values must be positive.
    Log,
}

impl FromStr for AxisScale {
    type Err = CalibrationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "linear" => Ok(Self::Linear),
            "log" | "logscale" => Ok(Self::Log),
            other => Err(CalibrationError::UnknownScale(other.to_string())),
        }
    }
}

/// Plot values at the two marked ticks of an axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisRange {
    pub min: f64,
    pub max: f64,
}

impl AxisRange {
    #[must_use]
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalibrationError {
    #[error("{axis} axis: marked pixels coincide at {px}")]
    DegeneratePixelSpan { axis: Axis, px: f64 },
    #[error("{axis} axis: min and max values must differ and be finite, got {min} and {max}")]
    DegenerateValueSpan { axis: Axis, min: f64, max: f64 },
    #[error("{axis} axis is logarithmic but {value} is not positive")]
    NonPositiveLogValue { axis: Axis, value: f64 },
    #[error("unknown axis scale: {0}")]
    UnknownScale(String),
}

/// One-dimensional mapping between pixel positions and plot values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisMapping {
    axis: Axis,
    px_min: f64,
    px_max: f64,
    value_min: f64,
    value_max: f64,
    scale: AxisScale,
}

impl AxisMapping {
    /// Map `px_min` to `range.min` and `px_max` to `range.max`.
    ///
    /// # Errors
    ///
    /// Returns an error if either span is empty or non-finite, or if a log
    /// axis has a non-positive bound.
    pub fn new(axis: Axis, px_min: f64, px_max: f64, range: AxisRange, scale: AxisScale) -> Result<Self, CalibrationError> {
        let px_span = px_max - px_min;
        if px_span == 0.0 || !px_span.is_finite() {
            return Err(CalibrationError::DegeneratePixelSpan { axis, px: px_min });
        }
        let value_span = range.max - range.min;
        if value_span == 0.0 || !value_span.is_finite() {
            return Err(CalibrationError::DegenerateValueSpan { axis, min: range.min, max: range.max });
        }
        if scale == AxisScale::Log {
            for value in [range.min, range.max] {
                if value <= 0.0 {
                    return Err(CalibrationError::NonPositiveLogValue { axis, value });
                }
            }
        }
        Ok(Self { axis, px_min, px_max, value_min: range.min, value_max: range.max, scale })
    }

    /// Plot value at pixel `px`. Extrapolates outside the marked span.
    #[must_use]
    pub fn to_value(&self, px: f64) -> f64 {
        let t = (px - self.px_min) / (self.px_max - self.px_min);
        match self.scale {
            AxisScale::Linear => lerp(self.value_min, self.value_max, t),
            AxisScale::Log => 10f64.powf(lerp(self.value_min.log10(), self.value_max.log10(), t)),
        }
    }

    /// Pixel position of plot value `value`.
    ///
    /// # Errors
    ///
    /// Returns `NonPositiveLogValue` for `value <= 0` on a log axis.
    pub fn to_pixel(&self, value: f64) -> Result<f64, CalibrationError> {
        let t = match self.scale {
            AxisScale::Linear => (value - self.value_min) / (self.value_max - self.value_min),
            AxisScale::Log => {
                if value <= 0.0 {
                    return Err(CalibrationError::NonPositiveLogValue { axis: self.axis, value });
                }
                let (lo, hi) = (self.value_min.log10(), self.value_max.log10());
                (value.log10() - lo) / (hi - lo)
            }
        };
        Ok(lerp(self.px_min, self.px_max, t))
    }
}

/// Two-axis calibration from a set of guide lines.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Calibration {
    pub x: AxisMapping,
    pub y: AxisMapping,
}

impl Calibration {
    /// Calibrate from guide-line positions and the plot values they mark.
    ///
    /// # Errors
    ///
    /// See [`AxisMapping::new`].
    pub fn new(
        lines: &GuideLines,
        x: AxisRange,
        y: AxisRange,
        x_scale: AxisScale,
        y_scale: AxisScale,
    ) -> Result<Self, CalibrationError> {
        Ok(Self {
            x: AxisMapping::new(Axis::X, lines.get(Line::VerticalLeft), lines.get(Line::VerticalRight), x, x_scale)?,
            y: AxisMapping::new(Axis::Y, lines.get(Line::HorizontalLower), lines.get(Line::HorizontalUpper), y, y_scale)?,
        })
    }

    /// Image pixel to plot values.
    #[must_use]
    pub fn pixel_to_value(&self, px: Point) -> Point {
        Point::new(self.x.to_value(px.x), self.y.to_value(px.y))
    }

    /// Plot values to image pixel.
    ///
    /// # Errors
    ///
    /// Returns `NonPositiveLogValue` for a non-positive coordinate on a log axis.
    pub fn value_to_pixel(&self, value: Point) -> Result<Point, CalibrationError> {
        Ok(Point::new(self.x.to_pixel(value.x)?, self.y.to_pixel(value.y)?))
    }
}

fn lerp(a: f64, b: f64, t: f64) -> f64 {
    (b - a).mul_add(t, a)
}
