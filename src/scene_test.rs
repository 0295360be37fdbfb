#![allow(clippy::float_cmp)]

use super::*;

fn lines() -> GuideLines {
    GuideLines::new(10.0, 100.0, 20.0, 200.0).unwrap()
}

fn pt(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

#[test]
fn canvas_size_is_scaled_image_size() {
    let style = Style::default();
    let scene = build(&lines(), Scale::new(1.5).unwrap(), &style, 400, 300);
    assert_eq!(scene.width, 600.0);
    assert_eq!(scene.height, 450.0);
}

#[test]
fn fractional_canvas_size_is_truncated() {
    let scale = Scale::new(1.5).unwrap();
    assert_eq!(canvas_size(scale, 101, 51), (151, 76));
}

#[test]
fn layout_uses_truncated_canvas_size() {
    let style = Style::default();
    let scene = build(&lines(), Scale::new(1.5).unwrap(), &style, 101, 51);
    assert_eq!(scene.width, 151.0);
    assert_eq!(scene.height, 76.0);
    assert_eq!(scene.guides[0].to.y, 76.0);
    assert_eq!(scene.guides[2].to.x, 151.0);
    assert_eq!(scene.captions[0].at.y, 66.0);
}

#[test]
fn vertical_guides_span_full_height() {
    let style = Style::default();
    let scene = build(&lines(), Scale::default(), &style, 400, 300);
    assert_eq!(scene.guides[0], Segment { from: pt(10.0, 0.0), to: pt(10.0, 300.0) });
    assert_eq!(scene.guides[1], Segment { from: pt(100.0, 0.0), to: pt(100.0, 300.0) });
}

#[test]
fn horizontal_guides_span_full_width() {
    let style = Style::default();
    let scene = build(&lines(), Scale::default(), &style, 400, 300);
    assert_eq!(scene.guides[2], Segment { from: pt(0.0, 20.0), to: pt(400.0, 20.0) });
    assert_eq!(scene.guides[3], Segment { from: pt(0.0, 200.0), to: pt(400.0, 200.0) });
}

#[test]
fn guides_follow_scale() {
    let style = Style::default();
    let scene = build(&lines(), Scale::new(2.0).unwrap(), &style, 400, 300);
    assert_eq!(scene.guides[0], Segment { from: pt(20.0, 0.0), to: pt(20.0, 600.0) });
    assert_eq!(scene.guides[3], Segment { from: pt(0.0, 400.0), to: pt(800.0, 400.0) });
}

#[test]
fn three_markers_without_top_right() {
    let style = Style::default();
    let scene = build(&lines(), Scale::default(), &style, 400, 300);
    assert_eq!(scene.markers, [pt(10.0, 20.0), pt(10.0, 200.0), pt(100.0, 200.0)]);
    assert!(!scene.markers.contains(&pt(100.0, 20.0)));
}

#[test]
fn markers_and_marker_size_follow_scale() {
    let style = Style { marker_size: 4.0, ..Style::default() };
    let scene = build(&lines(), Scale::new(0.5).unwrap(), &style, 400, 300);
    assert_eq!(scene.markers[2], pt(50.0, 100.0));
    assert_eq!(scene.marker_size, 2.0);
}

#[test]
fn captions_are_placed_next_to_their_lines() {
    let style = Style::default();
    let scene = build(&lines(), Scale::default(), &style, 400, 300);
    assert_eq!(scene.captions[0], Caption { text: "X1", at: pt(-10.0, 290.0) });
    assert_eq!(scene.captions[1], Caption { text: "X2", at: pt(80.0, 290.0) });
    assert_eq!(scene.captions[2], Caption { text: "Y1", at: pt(10.0, 190.0) });
    assert_eq!(scene.captions[3], Caption { text: "Y2", at: pt(10.0, 10.0) });
}

#[test]
fn caption_offsets_stay_in_screen_pixels() {
    let style = Style::default();
    let scene = build(&lines(), Scale::new(2.0).unwrap(), &style, 400, 300);
    assert_eq!(scene.captions[1].at, pt(180.0, 590.0));
    assert_eq!(scene.captions[3].at, pt(10.0, 30.0));
}

#[test]
fn scene_borrows_style() {
    let style = Style { line_color: "blue".into(), ..Style::default() };
    let scene = build(&lines(), Scale::default(), &style, 10, 10);
    assert_eq!(scene.style.line_color, "blue");
}
