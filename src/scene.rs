//! Frame layout.
//!
//! [`build`] turns guide-line positions, the scale factor and the style into
//! screen-space primitives. It is the pure half of rendering: the
//! [`crate::render`] module only paints what a `Scene` describes.

#[cfg(test)]
#[path = "scene_test.rs"]
mod scene_test;

use crate::config::Style;
use crate::consts::{CAPTION_INSET_PX, CAPTION_X_SHIFT_PX};
use crate::lines::{GuideLines, Line, Orientation};
use crate::scale::{Point, Scale};

/// A straight guide-line segment in screen space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub from: Point,
    pub to: Point,
}

/// Caption text anchored at its left baseline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Caption {
    pub text: &'static str,
    pub at: Point,
}

/// Everything drawn in one frame, in screen pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene<'a> {
    /// Canvas width, as given by [`canvas_size`].
    pub width: f64,
    /// Canvas height, as given by [`canvas_size`].
    pub height: f64,
    /// One segment per line, in [`Line::ALL`] order.
    pub guides: [Segment; 4],
    /// Marker centers (left/upper, left/lower, right/lower).
    pub markers: [Point; 3],
    /// Marker radius or half-extent.
    pub marker_size: f64,
    /// `X1`, `X2`, `Y1`, `Y2` in that order.
    pub captions: [Caption; 4],
    pub style: &'a Style,
}

/// Canvas element size for an image of `width` x `height` pixels.
///
/// The element's size attributes are integers, so the fraction of a scaled
/// size is dropped.
#[must_use]
pub fn canvas_size(scale: Scale, width: u32, height: u32) -> (u32, u32) {
    (scaled_px(width, scale), scaled_px(height, scale))
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn scaled_px(px: u32, scale: Scale) -> u32 {
    scale.image_dist_to_screen(f64::from(px)).max(0.0) as u32
}

/// Lay out a frame for an image of `image_width` x `image_height` pixels.
///
/// Guides and captions are measured against the integer canvas size, so the
/// bottom captions sit exactly [`CAPTION_INSET_PX`] above the canvas edge.
#[must_use]
pub fn build<'a>(lines: &GuideLines, scale: Scale, style: &'a Style, image_width: u32, image_height: u32) -> Scene<'a> {
    let (canvas_width, canvas_height) = canvas_size(scale, image_width, image_height);
    let width = f64::from(canvas_width);
    let height = f64::from(canvas_height);
    let screen_pos = |line: Line| scale.image_dist_to_screen(lines.get(line));

    let guides = Line::ALL.map(|line| {
        let pos = screen_pos(line);
        match line.orientation() {
            Orientation::Vertical => Segment { from: Point::new(pos, 0.0), to: Point::new(pos, height) },
            Orientation::Horizontal => Segment { from: Point::new(0.0, pos), to: Point::new(width, pos) },
        }
    });

    let markers = lines.marked_intersections().map(|p| scale.image_to_screen(p));

    let bottom = height - CAPTION_INSET_PX;
    let captions = [
        Line::VerticalLeft,
        Line::VerticalRight,
        Line::HorizontalLower,
        Line::HorizontalUpper,
    ]
    .map(|line| {
        let at = match line.orientation() {
            Orientation::Vertical => Point::new(screen_pos(line) - CAPTION_X_SHIFT_PX, bottom),
            Orientation::Horizontal => Point::new(CAPTION_INSET_PX, screen_pos(line) - CAPTION_INSET_PX),
        };
        Caption { text: line.caption(), at }
    });

    Scene {
        width,
        height,
        guides,
        markers,
        marker_size: scale.image_dist_to_screen(style.marker_size),
        captions,
        style,
    }
}
