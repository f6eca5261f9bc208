use super::*;

#[test]
fn new_surface_is_transparent_and_scaled() {
    let s = Surface::new(CanvasSize::new(10, 4), 2).unwrap();
    assert_eq!((s.width(), s.height()), (20, 8));
    assert_eq!(s.canvas(), CanvasSize::new(10, 4));
    assert_eq!(s.scale(), 2);
    assert_eq!(s.data().len(), 20 * 8 * 4);
    assert!(s.data().iter().all(|&b| b == 0));
    assert_eq!(s.pixel(19, 7), Some([0, 0, 0, 0]));
    assert_eq!(s.pixel(20, 0), None);
}

#[test]
fn unavailable_surfaces_are_errors() {
    for (canvas, scale) in [
        (CanvasSize::new(10, 10), 0),
        (CanvasSize::new(0, 10), 1),
        (CanvasSize::new(40_000, 10), 2),
        (CanvasSize::new(70_000, 1), 1),
    ] {
        let err = Surface::new(canvas, scale).unwrap_err();
        assert!(err.is_missing_input(), "{canvas} x{scale}: {err}");
    }
}

#[test]
fn rgba_image_is_unpremultiplied() {
    let mut s = Surface::preview(CanvasSize::new(1, 1)).unwrap();
    s.data.copy_from_slice(&[64, 0, 0, 128]);
    let img = s.to_rgba_image().unwrap();
    assert_eq!(img.get_pixel(0, 0).0, [128, 0, 0, 128]);
}
