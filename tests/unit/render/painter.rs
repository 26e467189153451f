use super::*;

#[test]
fn background_covers_every_pixel() {
    let mut p = Painter::new(32).unwrap();
    p.fill_background(Rgb8::new(10, 20, 30));
    let frame = p.finish();
    assert_eq!((frame.width, frame.height), (32, 32));
    assert!(frame.is_uniform([10, 20, 30, 255]));
}

#[test]
fn filled_circle_paints_its_center_only() {
    let mut p = Painter::new(64).unwrap();
    p.fill_background(Rgb8::BLACK);
    p.fill_circle(Point::new(32.0, 32.0), 8.0, Rgb8::WHITE.opaque());
    let frame = p.finish();
    assert_eq!(frame.pixel(32, 32), Some([255, 255, 255, 255]));
    assert_eq!(frame.pixel(2, 2), Some([0, 0, 0, 255]));
}

#[test]
fn stroked_circle_leaves_its_center_untouched() {
    let mut p = Painter::new(64).unwrap();
    p.fill_background(Rgb8::BLACK);
    p.stroke_circle(Point::new(32.0, 32.0), 20.0, 4.0, Rgb8::WHITE.opaque());
    let frame = p.finish();
    assert_eq!(frame.pixel(32, 32), Some([0, 0, 0, 255]));
    assert_eq!(frame.pixel(52, 32).map(|px| px[0] > 200), Some(true));
}

#[test]
fn transparent_paint_is_a_no_op() {
    let mut p = Painter::new(16).unwrap();
    p.fill_background(Rgb8::BLACK);
    p.fill_rect(Rect::new(0.0, 0.0, 16.0, 16.0), Rgb8::WHITE.with_alpha(0.0));
    assert!(p.finish().is_uniform([0, 0, 0, 255]));
}

#[test]
fn oversized_or_empty_targets_are_errors() {
    assert!(Painter::new(0).is_err());
    assert!(Painter::new(70_000).is_err());
}
