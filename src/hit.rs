#[cfg(test)]
#[path = "hit_test.rs"]
mod hit_test;

use crate::consts::{GRAB_RADIUS_PX, HOVER_RADIUS_PX};
use crate::input::Cursor;
use crate::lines::{GuideLines, Line, Orientation};
use crate::scale::{Point, Scale};

/// Screen-space distance from `screen_pt` to `line`, measured across the line.
#[must_use]
pub fn distance_to_line(screen_pt: Point, lines: &GuideLines, line: Line, scale: Scale) -> f64 {
    let at = scale.image_dist_to_screen(lines.get(line));
    match line.orientation() {
        Orientation::Vertical => (screen_pt.x - at).abs(),
        Orientation::Horizontal => (screen_pt.y - at).abs(),
    }
}

/// Which line a press at `screen_pt` grabs, if any.
///
/// Lines are tested in [`Line::ALL`] order within each orientation, left
/// before right and upper before lower. When the press is near both a
/// vertical and a horizontal line the horizontal one wins.
#[must_use]
pub fn grab_test(screen_pt: Point, lines: &GuideLines, scale: Scale) -> Option<Line> {
    let near = |line: Line| distance_to_line(screen_pt, lines, line, scale) < GRAB_RADIUS_PX;

    let vertical = [Line::VerticalLeft, Line::VerticalRight].into_iter().find(|&l| near(l));
    let horizontal = [Line::HorizontalUpper, Line::HorizontalLower].into_iter().find(|&l| near(l));
    horizontal.or(vertical)
}

/// Cursor to show while hovering at `screen_pt` with no drag in progress.
///
/// Vertical lines take priority over horizontal ones here.
#[must_use]
pub fn hover_cursor(screen_pt: Point, lines: &GuideLines, scale: Scale) -> Cursor {
    let near = |line: Line| distance_to_line(screen_pt, lines, line, scale) < HOVER_RADIUS_PX;

    if near(Line::VerticalLeft) || near(Line::VerticalRight) {
        Cursor::EwResize
    } else if near(Line::HorizontalUpper) || near(Line::HorizontalLower) {
        Cursor::NsResize
    } else {
        Cursor::Default
    }
}
