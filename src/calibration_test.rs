use super::*;

const TOLERANCE: f64 = 1e-3;

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < TOLERANCE
}

/// Axis ticks read off a real scatter plot: x 0..0.6 spans pixels 49..294,
/// y 0..0.8 spans pixels 209 (bottom) .. 29 (top).
fn plot_lines() -> GuideLines {
    GuideLines::new(49.0, 294.0, 29.0, 209.0).unwrap()
}

fn linear_plot() -> Calibration {
    Calibration::new(
        &plot_lines(),
        AxisRange::new(0.0, 0.6),
        AxisRange::new(0.0, 0.8),
        AxisScale::Linear,
        AxisScale::Linear,
    )
    .unwrap()
}

// =============================================================
// Linear
// =============================================================

#[test]
fn linear_pixel_to_value_matches_plot() {
    let cal = linear_plot();
    let a = cal.pixel_to_value(Point::new(90.0, 164.0));
    assert!(close(a.x, 0.1) && close(a.y, 0.2), "{a:?}");
    let b = cal.pixel_to_value(Point::new(335.0, 74.0));
    assert!(close(b.x, 0.7) && close(b.y, 0.6), "{b:?}");
}

#[test]
fn linear_marked_pixels_hit_range_ends() {
    let cal = linear_plot();
    let lo = cal.pixel_to_value(Point::new(49.0, 209.0));
    let hi = cal.pixel_to_value(Point::new(294.0, 29.0));
    assert!(close(lo.x, 0.0) && close(lo.y, 0.0));
    assert!(close(hi.x, 0.6) && close(hi.y, 0.8));
}

#[test]
fn linear_extrapolates_before_min() {
    let cal = linear_plot();
    let p = cal.pixel_to_value(Point::new(8.166_666, 254.0));
    assert!(close(p.x, -0.1), "{p:?}");
    assert!(close(p.y, -0.2), "{p:?}");
}

#[test]
fn linear_value_to_pixel_inverts() {
    let cal = linear_plot();
    let px = cal.value_to_pixel(Point::new(0.3, 0.4)).unwrap();
    assert!(close(px.x, 171.5), "{px:?}");
    assert!(close(px.y, 119.0), "{px:?}");
    let back = cal.pixel_to_value(px);
    assert!(close(back.x, 0.3) && close(back.y, 0.4));
}

// =============================================================
// Log
// =============================================================

#[test]
fn log_axis_spaces_decades_evenly() {
    let lines = GuideLines::new(0.0, 300.0, 0.0, 100.0).unwrap();
    let cal = Calibration::new(
        &lines,
        AxisRange::new(1.0, 1000.0),
        AxisRange::new(0.0, 1.0),
        AxisScale::Log,
        AxisScale::Linear,
    )
    .unwrap();
    assert!(close(cal.x.to_value(100.0), 10.0));
    assert!(close(cal.x.to_value(200.0), 100.0));
    assert!(close(cal.x.to_pixel(10.0).unwrap(), 100.0));
}

#[test]
fn log_axis_rejects_non_positive_bounds() {
    let err = Calibration::new(
        &plot_lines(),
        AxisRange::new(0.0, 10.0),
        AxisRange::new(0.0, 1.0),
        AxisScale::Log,
        AxisScale::Linear,
    )
    .unwrap_err();
    assert_eq!(err, CalibrationError::NonPositiveLogValue { axis: Axis::X, value: 0.0 });
}

#[test]
fn log_axis_rejects_non_positive_value_to_pixel() {
    let cal = Calibration::new(
        &plot_lines(),
        AxisRange::new(0.0, 1.0),
        AxisRange::new(0.1, 10.0),
        AxisScale::Linear,
        AxisScale::Log,
    )
    .unwrap();
    let err = cal.value_to_pixel(Point::new(0.5, -1.0)).unwrap_err();
    assert_eq!(err, CalibrationError::NonPositiveLogValue { axis: Axis::Y, value: -1.0 });
}

// =============================================================
// Degenerate input
// =============================================================

#[test]
fn equal_values_rejected() {
    let err = Calibration::new(
        &plot_lines(),
        AxisRange::new(1.0, 1.0),
        AxisRange::new(0.0, 1.0),
        AxisScale::Linear,
        AxisScale::Linear,
    )
    .unwrap_err();
    assert!(matches!(err, CalibrationError::DegenerateValueSpan { axis: Axis::X, .. }));
}

#[test]
fn coincident_pixels_rejected() {
    let err = AxisMapping::new(Axis::Y, 5.0, 5.0, AxisRange::new(0.0, 1.0), AxisScale::Linear).unwrap_err();
    assert_eq!(err, CalibrationError::DegeneratePixelSpan { axis: Axis::Y, px: 5.0 });
}

#[test]
fn non_finite_value_rejected() {
    let err = AxisMapping::new(Axis::X, 0.0, 1.0, AxisRange::new(0.0, f64::INFINITY), AxisScale::Linear).unwrap_err();
    assert!(matches!(err, CalibrationError::DegenerateValueSpan { .. }));
}

// =============================================================
// Parsing and messages
// =============================================================

#[test]
fn axis_scale_parse() {
    assert_eq!("linear".parse::<AxisScale>(), Ok(AxisScale::Linear));
    assert_eq!("logscale".parse::<AxisScale>(), Ok(AxisScale::Log));
    assert_eq!("log".parse::<AxisScale>(), Ok(AxisScale::Log));
    assert_eq!("polar".parse::<AxisScale>(), Err(CalibrationError::UnknownScale("polar".into())));
}

#[test]
fn error_messages_name_the_axis() {
    let err = CalibrationError::NonPositiveLogValue { axis: Axis::Y, value: -2.0 };
    assert_eq!(err.to_string(), "y axis is logarithmic but -2 is not positive");
}
