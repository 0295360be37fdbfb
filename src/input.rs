//! Input model: mouse buttons, cursor affordances, and the drag state machine.
//!
//! `InputState` is the active gesture being tracked between pointer-down and
//! pointer-up. It has five states: idle, or dragging one of the four guide
//! lines. A drag carries the screen position at which the line last moved so
//! the next pointer-move can compute an incremental delta.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::lines::{Line, Orientation};
use crate::scale::Point;

/// Mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    /// Left mouse button (or single-finger tap).
    Primary,
    /// Middle mouse button (scroll wheel click).
    Middle,
    /// Right mouse button (or two-finger tap).
    Secondary,
    /// Any other code, such as the back (3) and forward (4) buttons.
    Other(i16),
}

impl Button {
    /// Map a DOM `MouseEvent.button` code.
    #[must_use]
    pub fn from_dom(code: i16) -> Self {
        match code {
            0 => Self::Primary,
            1 => Self::Middle,
            2 => Self::Secondary,
            other => Self::Other(other),
        }
    }
}

/// Cursor shown over the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cursor {
    #[default]
    Default,
    /// Horizontal resize arrow, shown for vertical lines.
    EwResize,
    /// Vertical resize arrow, shown for horizontal lines.
    NsResize,
}

impl Cursor {
    /// Cursor that signals a line of the given orientation can be dragged.
    #[must_use]
    pub fn for_orientation(orientation: Orientation) -> Self {
        match orientation {
            Orientation::Vertical => Self::EwResize,
            Orientation::Horizontal => Self::NsResize,
        }
    }

    /// CSS `cursor` property value.
    #[must_use]
    pub fn css(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::EwResize => "ew-resize",
            Self::NsResize => "ns-resize",
        }
    }
}

/// Internal state for the drag state machine.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum InputState {
    /// No gesture in progress; waiting for the next pointer-down.
    #[default]
    Idle,
    /// The user is dragging a guide line.
    Dragging {
        /// The line being dragged.
        line: Line,
        /// Screen-space pointer position at the last accepted move.
        ///
        /// Rejected moves leave it in place on purpose, unlike tracking every
        /// pointer position: a pointer that overshoots a neighbouring line and
        /// comes back moves the line by its net travel from here.
        anchor: Point,
    },
}

impl InputState {
    /// The line being dragged, if any.
    #[must_use]
    pub fn dragged_line(&self) -> Option<Line> {
        match self {
            Self::Idle => None,
            Self::Dragging { line, .. } => Some(*line),
        }
    }

    #[must_use]
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }
}
