use super::*;

#[test]
fn endpoints_are_exact_stop_colors() {
    let g = DiagonalGradient::new(Color::rgb(0xa8, 0xed, 0xea), Color::rgb(0xfe, 0xd6, 0xe3));
    assert_eq!(g.color_at(0.0), g.start);
    assert_eq!(g.color_at(1.0), g.end);
    assert_eq!(g.color_at(-3.0), g.start);
    assert_eq!(g.color_at(7.0), g.end);
}

#[test]
fn midpoint_is_average() {
    let g = DiagonalGradient::new(Color::rgb(0, 0, 0), Color::rgb(200, 100, 50));
    assert_eq!(g.color_at(0.5), Color::rgb(100, 50, 25));
}

#[test]
fn projection_spans_the_diagonal() {
    assert_eq!(DiagonalGradient::t_at(0.0, 0.0, 300.0, 200.0), 0.0);
    assert_eq!(DiagonalGradient::t_at(300.0, 200.0, 300.0, 200.0), 1.0);
    assert!((DiagonalGradient::t_at(150.0, 100.0, 300.0, 200.0) - 0.5).abs() < 1e-12);
    // The opposite corners sit on the same iso-line only for squares.
    let a = DiagonalGradient::t_at(100.0, 0.0, 100.0, 100.0);
    let b = DiagonalGradient::t_at(0.0, 100.0, 100.0, 100.0);
    assert!((a - b).abs() < 1e-12);
}

#[test]
fn rasterized_corners_match_stops() {
    let g = DiagonalGradient::new(Color::rgb(255, 0, 0), Color::rgb(0, 0, 255));
    let (w, h) = (200u32, 120u32);
    let buf = g.rasterize(w, h);
    assert_eq!(buf.len(), (w * h * 4) as usize);
    let px = |x: u32, y: u32| {
        let i = ((y * w + x) * 4) as usize;
        [buf[i], buf[i + 1], buf[i + 2], buf[i + 3]]
    };
    let tl = px(0, 0);
    let br = px(w - 1, h - 1);
    assert!(tl[0] >= 253 && tl[2] <= 2, "{tl:?}");
    assert!(br[2] >= 253 && br[0] <= 2, "{br:?}");
    assert_eq!(tl[3], 255);
    // Monotonic along the diagonal.
    assert!(px(50, 30)[0] > px(150, 90)[0]);
}

#[test]
fn solid_fill_is_premultiplied() {
    let buf = rasterize_solid(Color::rgba(255, 255, 255, 128), 2, 2);
    assert_eq!(buf, [128u8, 128, 128, 128].repeat(4));
}
