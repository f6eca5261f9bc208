use super::*;

fn red_square() -> SourceImage {
    SourceImage::from_rgba8(20, 10, [255u8, 0, 0, 255].repeat(200)).unwrap()
}

fn canvas() -> CanvasSize {
    CanvasSize::new(36, 26)
}

#[test]
fn defaults_are_png_at_2x() {
    let o = ExportOptions::default();
    assert_eq!(o.format, ExportFormat::Png);
    assert_eq!(o.scale, 2);
    assert!((o.quality - 0.95).abs() < f32::EPSILON);
}

#[test]
fn formats_parse_from_names_and_paths() {
    assert_eq!("PNG".parse::<ExportFormat>().unwrap(), ExportFormat::Png);
    assert_eq!("jpg".parse::<ExportFormat>().unwrap(), ExportFormat::Jpeg);
    assert_eq!("webp".parse::<ExportFormat>().unwrap(), ExportFormat::WebP);
    assert!("gif".parse::<ExportFormat>().is_err());
    assert_eq!(
        ExportFormat::from_path(std::path::Path::new("out/shot.JPEG")),
        Some(ExportFormat::Jpeg)
    );
    assert_eq!(ExportFormat::from_path(std::path::Path::new("noext")), None);
}

#[test]
fn export_without_image_fails_with_no_bytes() {
    let err = export_render(canvas(), None, &StyleSettings::default(), &ExportOptions::default())
        .unwrap_err();
    assert!(matches!(err, ShotframeError::NoImage));
}

#[test]
fn export_rejects_bad_quality() {
    let opts = ExportOptions {
        quality: 1.5,
        ..ExportOptions::with_format(ExportFormat::Jpeg)
    };
    let err = export_render(canvas(), Some(&red_square()), &StyleSettings::default(), &opts)
        .unwrap_err();
    assert!(matches!(err, ShotframeError::Validation(_)));
}

#[test]
fn every_format_decodes_back_at_double_size() {
    let img = red_square();
    for format in [ExportFormat::Png, ExportFormat::Jpeg, ExportFormat::WebP] {
        let out = export_render(
            canvas(),
            Some(&img),
            &StyleSettings::default(),
            &ExportOptions::with_format(format),
        )
        .unwrap();
        assert_eq!((out.width, out.height), (72, 52));
        assert_eq!(out.format, format);

        let decoded = image::load_from_memory(&out.bytes).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (72, 52), "{format}");
    }
}

#[test]
fn png_signature_and_mime() {
    let out = export_render(
        canvas(),
        Some(&red_square()),
        &StyleSettings::default(),
        &ExportOptions::default(),
    )
    .unwrap();
    assert_eq!(&out.bytes[..8], b"\x89PNG\r\n\x1a\n");
    assert_eq!(out.format.mime_type(), "image/png");
    assert_eq!(out.format.extension(), "png");
}

#[test]
fn quantize_levels_are_monotonic() {
    assert_eq!(quantize_levels(100), 256);
    assert_eq!(quantize_levels(0), 2);
    assert!(quantize_levels(50) < quantize_levels(95));

    let mut px = vec![0u8, 128, 255, 77];
    quantize_rgb(&mut px, 100);
    assert_eq!(px, vec![0, 128, 255, 77]);
    quantize_rgb(&mut px, 1);
    assert_eq!(px, vec![0, 255, 255, 77]);
}

#[test]
fn jpeg_quality_maps_to_percent() {
    assert_eq!(jpeg_quality(0.95), 95);
    assert_eq!(jpeg_quality(0.0), 1);
    assert_eq!(jpeg_quality(1.0), 100);
}
