#![allow(clippy::float_cmp)]

use super::*;

fn lines() -> GuideLines {
    GuideLines::new(10.0, 100.0, 10.0, 100.0).unwrap()
}

fn pt(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

fn scale(factor: f64) -> Scale {
    Scale::new(factor).unwrap()
}

// =============================================================
// distance_to_line
// =============================================================

#[test]
fn distance_is_measured_across_the_line() {
    let l = lines();
    assert_eq!(distance_to_line(pt(13.0, 500.0), &l, Line::VerticalLeft, Scale::default()), 3.0);
    assert_eq!(distance_to_line(pt(500.0, 96.0), &l, Line::HorizontalLower, Scale::default()), 4.0);
}

#[test]
fn distance_uses_scaled_positions() {
    let l = lines();
    // Left line sits at 20 screen px when scale = 2.
    assert_eq!(distance_to_line(pt(23.0, 0.0), &l, Line::VerticalLeft, scale(2.0)), 3.0);
}

// =============================================================
// grab_test
// =============================================================

#[test]
fn grab_within_five_pixels() {
    let l = lines();
    assert_eq!(grab_test(pt(14.0, 50.0), &l, Scale::default()), Some(Line::VerticalLeft));
    assert_eq!(grab_test(pt(96.0, 50.0), &l, Scale::default()), Some(Line::VerticalRight));
    assert_eq!(grab_test(pt(50.0, 6.0), &l, Scale::default()), Some(Line::HorizontalUpper));
    assert_eq!(grab_test(pt(50.0, 104.5), &l, Scale::default()), Some(Line::HorizontalLower));
}

#[test]
fn grab_radius_is_exclusive() {
    let l = lines();
    assert_eq!(grab_test(pt(15.0, 50.0), &l, Scale::default()), None);
    assert_eq!(grab_test(pt(50.0, 105.0), &l, Scale::default()), None);
}

#[test]
fn grab_misses_away_from_lines() {
    let l = lines();
    assert_eq!(grab_test(pt(50.0, 50.0), &l, Scale::default()), None);
}

#[test]
fn grab_horizontal_wins_over_vertical() {
    let l = lines();
    // (10, 100) is on both the left vertical and the lower horizontal line.
    assert_eq!(grab_test(pt(10.0, 100.0), &l, Scale::default()), Some(Line::HorizontalLower));
    assert_eq!(grab_test(pt(100.0, 10.0), &l, Scale::default()), Some(Line::HorizontalUpper));
}

#[test]
fn grab_left_before_right_when_both_close() {
    let l = GuideLines::new(10.0, 13.0, 10.0, 100.0).unwrap();
    assert_eq!(grab_test(pt(12.0, 50.0), &l, Scale::default()), Some(Line::VerticalLeft));
}

#[test]
fn grab_upper_before_lower_when_both_close() {
    let l = GuideLines::new(10.0, 100.0, 50.0, 52.0).unwrap();
    assert_eq!(grab_test(pt(70.0, 51.0), &l, Scale::default()), Some(Line::HorizontalUpper));
}

#[test]
fn grab_radius_stays_in_screen_pixels_under_scale() {
    let l = lines();
    // Left line at 40 screen px; 4 px away still grabs, 6 px does not.
    assert_eq!(grab_test(pt(44.0, 200.0), &l, scale(4.0)), Some(Line::VerticalLeft));
    assert_eq!(grab_test(pt(46.0, 200.0), &l, scale(4.0)), None);
}

// =============================================================
// hover_cursor
// =============================================================

#[test]
fn hover_near_vertical_is_ew() {
    let l = lines();
    assert_eq!(hover_cursor(pt(19.0, 50.0), &l, Scale::default()), Cursor::EwResize);
    assert_eq!(hover_cursor(pt(91.0, 50.0), &l, Scale::default()), Cursor::EwResize);
}

#[test]
fn hover_near_horizontal_is_ns() {
    let l = lines();
    assert_eq!(hover_cursor(pt(50.0, 1.0), &l, Scale::default()), Cursor::NsResize);
    assert_eq!(hover_cursor(pt(50.0, 109.0), &l, Scale::default()), Cursor::NsResize);
}

#[test]
fn hover_outside_ten_pixels_is_default() {
    let l = lines();
    assert_eq!(hover_cursor(pt(20.0, 50.0), &l, Scale::default()), Cursor::Default);
    assert_eq!(hover_cursor(pt(50.0, 110.0), &l, Scale::default()), Cursor::Default);
}

#[test]
fn hover_vertical_wins_over_horizontal() {
    let l = lines();
    assert_eq!(hover_cursor(pt(12.0, 98.0), &l, Scale::default()), Cursor::EwResize);
}

#[test]
fn hover_wider_than_grab() {
    let l = lines();
    let p = pt(17.0, 50.0);
    assert_eq!(grab_test(p, &l, Scale::default()), None);
    assert_eq!(hover_cursor(p, &l, Scale::default()), Cursor::EwResize);
}
