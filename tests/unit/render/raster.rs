use super::*;

#[test]
fn rounded_rect_fills_inside_only() {
    let painter = LayerPainter::new(20, 20);
    let path = rounded_rect_path(20.0, 20.0, 8.0);
    let layer = painter.paint(|ctx| {
        ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(0, 0, 0, 255));
        ctx.fill_path(&path);
    });
    let alpha = |x: usize, y: usize| layer[(y * 20 + x) * 4 + 3];
    assert_eq!(alpha(10, 10), 255);
    assert_eq!(alpha(0, 0), 0);
    assert_eq!(alpha(10, 0), 255);
}

#[test]
fn radius_is_clamped_and_sanitized() {
    let a = rounded_rect_path(10.0, 4.0, 100.0);
    let b = rounded_rect_path(10.0, 4.0, 2.0);
    assert_eq!(a, b);
    let c = rounded_rect_path(10.0, 4.0, f64::NAN);
    let d = rounded_rect_path(10.0, 4.0, 0.0);
    assert_eq!(c, d);
}

#[test]
fn image_paint_rejects_oversized_sources() {
    let wide = SourceImage::from_rgba8(70_000, 1, vec![0; 70_000 * 4]).unwrap();
    assert!(image_paint(&wide).is_err());
    let ok = SourceImage::from_rgba8(2, 2, vec![255; 16]).unwrap();
    assert!(image_paint(&ok).is_ok());
}

#[test]
fn affine_conversion_keeps_coefficients() {
    let a = Affine::scale(2.0) * Affine::translate((3.0, 4.0));
    assert_eq!(affine_to_cpu(a).as_coeffs(), a.as_coeffs());
}
