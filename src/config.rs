//! Widget configuration read from the host model.
//!
//! Every key is optional. An absent, empty, mistyped or out-of-range value
//! falls back to the defaults below and is logged; a half-configured host
//! still gets a working overlay.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::fmt;
use std::str::FromStr;

use crate::lines::Line;
use crate::model::{ModelError, ModelStore, keys};
use crate::scale::Scale;

pub const DEFAULT_MARKER_COLOR: &str = "green";
pub const DEFAULT_MARKER_SIZE: f64 = 3.0;
pub const DEFAULT_LINE_COLOR: &str = "red";
pub const DEFAULT_LINE_WIDTH: f64 = 1.0;
pub const DEFAULT_SCALE_FACTOR: f64 = 1.0;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error(transparent)]
    Model(#[from] ModelError),
    #[error("scale factor must be finite and positive, got {0}")]
    InvalidScale(f64),
    #[error("unknown marker shape: {0}")]
    UnknownMarkerShape(String),
    #[error("guide lines out of order: {first} = {first_value} must be less than {second} = {second_value}")]
    LinesOutOfOrder { first: Line, first_value: f64, second: Line, second_value: f64 },
}

/// Shape drawn at marked intersections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MarkerShape {
    /// Filled disc.
    #[default]
    Circle,
    /// Two diagonal strokes.
    Cross,
}

impl FromStr for MarkerShape {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "circle" => Ok(Self::Circle),
            "cross" => Ok(Self::Cross),
            other => Err(ConfigError::UnknownMarkerShape(other.to_string())),
        }
    }
}

/// Visual style for lines, markers and captions. Colors are CSS color strings.
#[derive(Debug, Clone, PartialEq)]
pub struct Style {
    pub marker_color: String,
    /// Marker radius (circle) or half-extent (cross) in image pixels.
    pub marker_size: f64,
    pub marker_shape: MarkerShape,
    /// Stroke width in screen pixels.
    pub line_width: f64,
    /// Used for both the guide lines and the captions.
    pub line_color: String,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            marker_color: DEFAULT_MARKER_COLOR.to_string(),
            marker_size: DEFAULT_MARKER_SIZE,
            marker_shape: MarkerShape::default(),
            line_width: DEFAULT_LINE_WIDTH,
            line_color: DEFAULT_LINE_COLOR.to_string(),
        }
    }
}

impl Style {
    /// Read style keys from the model, defaulting any that are unusable.
    #[must_use]
    pub fn from_model(model: &impl ModelStore) -> Self {
        let shape = model
            .get_str_or(keys::MARKER_SHAPE, "circle")
            .map_err(ConfigError::from)
            .and_then(|s| s.parse::<MarkerShape>());
        Self {
            marker_color: color(model, keys::MARKER_COLOR, DEFAULT_MARKER_COLOR),
            marker_size: or_default(model.get_f64_or(keys::MARKER_SIZE, DEFAULT_MARKER_SIZE), DEFAULT_MARKER_SIZE),
            marker_shape: or_default(shape, MarkerShape::default()),
            line_width: or_default(model.get_f64_or(keys::LINE_WIDTH, DEFAULT_LINE_WIDTH), DEFAULT_LINE_WIDTH),
            line_color: color(model, keys::LINE_COLOR, DEFAULT_LINE_COLOR),
        }
    }
}

/// A CSS color; the host leaves unset colors as `""`.
fn color(model: &impl ModelStore, key: &str, default: &str) -> String {
    let value = or_default(model.get_str_or(key, default), default.to_string());
    if value.is_empty() { default.to_string() } else { value }
}

/// The value of a model read, or `default` with a warning when it failed.
pub(crate) fn or_default<T, E: fmt::Display>(read: Result<T, E>, default: T) -> T {
    read.unwrap_or_else(|err| {
        tracing::warn!(%err, "falling back to default");
        default
    })
}

/// Everything the widget reads once at creation, apart from line positions.
#[derive(Debug, Clone, PartialEq)]
pub struct WidgetConfig {
    pub style: Style,
    pub scale: Scale,
    /// Background image URL or data URL. Empty means nothing ever loads.
    pub image_src: String,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self { style: Style::default(), scale: Scale::default(), image_src: String::new() }
    }
}

impl WidgetConfig {
    /// Read the widget configuration from the model.
    ///
    /// A scale factor that is not finite and positive falls back to 1.
    #[must_use]
    pub fn from_model(model: &impl ModelStore) -> Self {
        let scale = model
            .get_f64_or(keys::SCALE_FACTOR, DEFAULT_SCALE_FACTOR)
            .map_err(ConfigError::from)
            .and_then(|factor| Scale::new(factor).ok_or(ConfigError::InvalidScale(factor)));
        Self {
            style: Style::from_model(model),
            scale: or_default(scale, Scale::default()),
            image_src: or_default(model.get_str_or(keys::IMAGE_DATA, ""), String::new()),
        }
    }
}
