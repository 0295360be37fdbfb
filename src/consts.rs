//! Shared numeric constants for the overlay.

// ── Hit-testing ─────────────────────────────────────────────────

/// Screen-space distance in pixels within which a press grabs a guide line.
pub const GRAB_RADIUS_PX: f64 = 5.0;

/// Screen-space distance in pixels within which hovering shows a resize cursor.
pub const HOVER_RADIUS_PX: f64 = 10.0;

// ── Guide lines ─────────────────────────────────────────────────

/// Dash and gap length of the guide lines, in screen pixels.
pub const LINE_DASH_PX: f64 = 5.0;

/// Distance of each line from the image center when lines are placed for a fresh image.
pub const CENTER_GAP_PX: f64 = 50.0;

// ── Captions ────────────────────────────────────────────────────

/// Font used for the `X1`/`X2`/`Y1`/`Y2` captions.
pub const CAPTION_FONT: &str = "14px Arial";

/// How far left of a vertical line its caption starts.
pub const CAPTION_X_SHIFT_PX: f64 = 20.0;

/// Inset of captions from the canvas bottom, and lift above horizontal lines.
pub const CAPTION_INSET_PX: f64 = 10.0;
