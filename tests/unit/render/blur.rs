use super::*;

fn single_pixel(w: u32, h: u32) -> Vec<u8> {
    let mut src = vec![0u8; (w * h * 4) as usize];
    let center = (((h / 2) * w + w / 2) * 4) as usize;
    src[center..center + 4].copy_from_slice(&[255, 255, 255, 255]);
    src
}

#[test]
fn blur_radius_0_is_identity() {
    let src = vec![1u8, 2, 3, 4, 5, 6, 7, 8];
    let out = blur_rgba8_premul(&src, 1, 2, 0, 1.0).unwrap();
    assert_eq!(out, src);
    let out = gaussian_blur_rgba8_premul(&src, 1, 2, 0.0).unwrap();
    assert_eq!(out, src);
}

#[test]
fn blur_constant_image_is_identity() {
    let (w, h) = (12u32, 9u32);
    let px = [10u8, 20u8, 30u8, 40u8];
    let src = px.repeat((w * h) as usize);
    assert_eq!(blur_rgba8_premul(&src, w, h, 3, 2.0).unwrap(), src);
    // Box path.
    assert_eq!(gaussian_blur_rgba8_premul(&src, w, h, 6.0).unwrap(), src);
}

#[test]
fn blur_spreads_energy_from_single_pixel() {
    let (w, h) = (5u32, 5u32);
    let src = single_pixel(w, h);

    let out = gaussian_blur_rgba8_premul(&src, w, h, 0.8).unwrap();

    let nonzero = out.chunks_exact(4).filter(|px| px[3] != 0).count();
    assert!(nonzero > 1);

    let sum_a: u32 = out.chunks_exact(4).map(|px| u32::from(px[3])).sum();
    assert!((sum_a as i32 - 255).abs() <= 4);
}

#[test]
fn box_path_spreads_and_stays_symmetric() {
    let (w, h) = (41u32, 41u32);
    let mut src = vec![0u8; (w * h * 4) as usize];
    // Opaque 9x9 block in the middle.
    for y in 16..25 {
        for x in 16..25 {
            let i = ((y * w + x) * 4) as usize;
            src[i..i + 4].copy_from_slice(&[255, 255, 255, 255]);
        }
    }
    let out = gaussian_blur_rgba8_premul(&src, w, h, 3.0).unwrap();
    let alpha = |x: u32, y: u32| out[((y * w + x) * 4 + 3) as usize];

    assert!(alpha(20, 20) > alpha(20, 26));
    assert!(alpha(20, 26) > alpha(20, 30));
    assert_eq!(alpha(14, 20), alpha(26, 20));
    assert_eq!(alpha(20, 14), alpha(20, 26));
    assert_eq!(alpha(0, 0), 0);
}

#[test]
fn boxes_approximate_requested_sigma() {
    for sigma in [2.0f32, 5.0, 30.0, 60.0] {
        let boxes = boxes_for_gauss(sigma, 3);
        assert_eq!(boxes.len(), 3);
        assert!(boxes.iter().all(|b| b % 2 == 1));
        // Variance of a box of width w is (w^2 - 1) / 12; variances add.
        let var: f64 = boxes.iter().map(|&b| (f64::from(b * b) - 1.0) / 12.0).sum();
        let s = f64::from(sigma);
        assert!((var.sqrt() - s).abs() / s < 0.1, "sigma {sigma} -> {boxes:?}");
    }
}

#[test]
fn blur_rejects_bad_input() {
    assert!(gaussian_blur_rgba8_premul(&[0u8; 7], 1, 2, 1.0).is_err());
    assert!(gaussian_blur_rgba8_premul(&[0u8; 4], 1, 1, f32::NAN).is_err());
    assert!(gaussian_blur_rgba8_premul(&[0u8; 4], 1, 1, -1.0).is_err());
}
