//! Guide lines: which lines exist, where they are, and the ordering rule.
//!
//! Positions are stored in image pixels, independent of the scale factor.
//! [`GuideLines::try_set`] refuses any move that would leave
//! `vline_left >= vline_right` or `hline_upper >= hline_lower`. Positions
//! seeded from the model are taken as they are: a host that has not placed
//! its lines yet reports all four at 0, and the overlay must still mount.

#[cfg(test)]
#[path = "lines_test.rs"]
mod lines_test;

use std::fmt;

use serde::Serialize;
use serde_json::Value;

use crate::config::{ConfigError, or_default};
use crate::consts::CENTER_GAP_PX;
use crate::model::{ModelStore, keys};
use crate::scale::Point;

/// Orientation of a guide line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Fixed x; spans the canvas height.
    Vertical,
    /// Fixed y; spans the canvas width.
    Horizontal,
}

/// One of the four guide lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Line {
    /// Left vertical line, captioned `X1`.
    VerticalLeft,
    /// Right vertical line, captioned `X2`.
    VerticalRight,
    /// Upper horizontal line, captioned `Y2`.
    HorizontalUpper,
    /// Lower horizontal line, captioned `Y1`.
    HorizontalLower,
}

impl Line {
    /// All lines in hit-test order.
    pub const ALL: [Self; 4] = [Self::VerticalLeft, Self::VerticalRight, Self::HorizontalUpper, Self::HorizontalLower];

    /// Model key holding this line's position.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::VerticalLeft => keys::VLINE_LEFT,
            Self::VerticalRight => keys::VLINE_RIGHT,
            Self::HorizontalUpper => keys::HLINE_UPPER,
            Self::HorizontalLower => keys::HLINE_LOWER,
        }
    }

    #[must_use]
    pub fn orientation(self) -> Orientation {
        match self {
            Self::VerticalLeft | Self::VerticalRight => Orientation::Vertical,
            Self::HorizontalUpper | Self::HorizontalLower => Orientation::Horizontal,
        }
    }

    /// Caption drawn next to the line.
    #[must_use]
    pub fn caption(self) -> &'static str {
        match self {
            Self::VerticalLeft => "X1",
            Self::VerticalRight => "X2",
            Self::HorizontalLower => "Y1",
            Self::HorizontalUpper => "Y2",
        }
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Positions of the four guide lines in image pixels.
///
/// Serializes to an object keyed by the model field names.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GuideLines {
    vline_left: f64,
    vline_right: f64,
    hline_upper: f64,
    hline_lower: f64,
}

impl GuideLines {
    /// Build from explicit positions.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::LinesOutOfOrder` if either pair is not strictly ordered.
    pub fn new(vline_left: f64, vline_right: f64, hline_upper: f64, hline_lower: f64) -> Result<Self, ConfigError> {
        let lines = Self { vline_left, vline_right, hline_upper, hline_lower };
        lines.check_pair(Line::VerticalLeft, Line::VerticalRight)?;
        lines.check_pair(Line::HorizontalUpper, Line::HorizontalLower)?;
        Ok(lines)
    }

    /// Default placement for a fresh image of `width` x `height` pixels:
    /// each pair straddles the center, [`CENTER_GAP_PX`] to either side.
    #[must_use]
    pub fn centered(width: u32, height: u32) -> Self {
        let cx = f64::from(width / 2);
        let cy = f64::from(height / 2);
        Self {
            vline_left: cx - CENTER_GAP_PX,
            vline_right: cx + CENTER_GAP_PX,
            hline_upper: cy - CENTER_GAP_PX,
            hline_lower: cy + CENTER_GAP_PX,
        }
    }

    /// Read all four positions from the model without checking their order.
    ///
    /// A missing or non-numeric key reads as 0, matching an unset host field.
    #[must_use]
    pub fn from_model(model: &impl ModelStore) -> Self {
        let read = |key: &str| or_default(model.get_f64(key), 0.0);
        Self {
            vline_left: read(keys::VLINE_LEFT),
            vline_right: read(keys::VLINE_RIGHT),
            hline_upper: read(keys::HLINE_UPPER),
            hline_lower: read(keys::HLINE_LOWER),
        }
    }

    /// Write all four positions to the model and commit once.
    pub fn store(&self, model: &mut impl ModelStore) {
        for line in Line::ALL {
            model.set(line.key(), Value::from(self.get(line)));
        }
        model.commit();
    }

    /// Position of `line` in image pixels.
    #[must_use]
    pub fn get(&self, line: Line) -> f64 {
        match line {
            Line::VerticalLeft => self.vline_left,
            Line::VerticalRight => self.vline_right,
            Line::HorizontalUpper => self.hline_upper,
            Line::HorizontalLower => self.hline_lower,
        }
    }

    /// Move `line` to `value` if the ordering rule still holds afterwards.
    ///
    /// Returns whether the move was applied.
    pub fn try_set(&mut self, line: Line, value: f64) -> bool {
        let allowed = value.is_finite()
            && match line {
                Line::VerticalLeft => value < self.vline_right,
                Line::VerticalRight => value > self.vline_left,
                Line::HorizontalUpper => value < self.hline_lower,
                Line::HorizontalLower => value > self.hline_upper,
            };
        if allowed {
            *self.slot(line) = value;
        }
        allowed
    }

    /// Crossings that carry a marker, in image pixels: left/upper, left/lower
    /// and right/lower. The right/upper crossing is never marked.
    #[must_use]
    pub fn marked_intersections(&self) -> [Point; 3] {
        [
            Point::new(self.vline_left, self.hline_upper),
            Point::new(self.vline_left, self.hline_lower),
            Point::new(self.vline_right, self.hline_lower),
        ]
    }

    fn slot(&mut self, line: Line) -> &mut f64 {
        match line {
            Line::VerticalLeft => &mut self.vline_left,
            Line::VerticalRight => &mut self.vline_right,
            Line::HorizontalUpper => &mut self.hline_upper,
            Line::HorizontalLower => &mut self.hline_lower,
        }
    }

    fn check_pair(&self, first: Line, second: Line) -> Result<(), ConfigError> {
        let (a, b) = (self.get(first), self.get(second));
        if a < b {
            Ok(())
        } else {
            Err(ConfigError::LinesOutOfOrder { first, first_value: a, second, second_value: b })
        }
    }
}
