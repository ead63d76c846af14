mod common;

use common::synthetic_image::{banded_rgba, solid_rgba};
use garment_analyzer::features::BASE_CONFIDENCE;
use garment_analyzer::image::ImageRgba8;
use garment_analyzer::{AnalysisError, AnalyzerParams, GarmentAnalyzer, GarmentType};

fn ungated_analyzer() -> GarmentAnalyzer {
    GarmentAnalyzer::new(AnalyzerParams {
        validate_content: false,
        ..Default::default()
    })
}

#[test]
fn all_black_image_yields_low_signal_defaults() {
    let (width, height) = (400usize, 600usize);
    let buffer = solid_rgba(width, height, [0, 0, 0]);
    let image = ImageRgba8::new(width, height, &buffer).unwrap();

    let features = ungated_analyzer().analyze(&image).unwrap();

    assert!(
        features.colors.contains(&"black".to_string()),
        "expected black in {:?}",
        features.colors
    );
    assert_eq!(features.fit, "loose");
    assert_eq!(
        features.confidence, BASE_CONFIDENCE,
        "no signal bonuses should fire on a flat frame"
    );
    let details = features.analysis_details.expect("details requested");
    assert_eq!(details.pattern_detected, "solid");
}

#[test]
fn wide_image_with_top_band_reads_as_top() {
    // Aspect 1.5 puts the image in the wide band; the only structure is a
    // high-contrast band inside the top third.
    let (width, height) = (600usize, 400usize);
    let buffer = banded_rgba(width, height, 40..90, 220, 15);
    let image = ImageRgba8::new(width, height, &buffer).unwrap();

    let features = ungated_analyzer().analyze(&image).unwrap();

    let details = features.analysis_details.expect("details requested");
    assert_eq!(details.garment_type, GarmentType::Top);
    assert_ne!(
        features.neckline, "strapless",
        "elevated top-region edge density must leave the low-edge branch"
    );
    assert_eq!(features.neckline, "scoop neck");
}

#[test]
fn analysis_is_repeatable_within_one_process() {
    let (width, height) = (300usize, 420usize);
    let buffer = banded_rgba(width, height, 100..180, 200, 30);
    let image = ImageRgba8::new(width, height, &buffer).unwrap();

    let analyzer = ungated_analyzer();
    let first = analyzer.analyze(&image).unwrap();
    let second = analyzer.analyze(&image).unwrap();
    assert_eq!(first, second, "no hidden state may leak between calls");
}

#[test]
fn tiny_images_analyze_without_panicking() {
    let analyzer = ungated_analyzer();
    for (w, h) in [(1usize, 1usize), (2, 3), (7, 5)] {
        let buffer = solid_rgba(w, h, [90, 90, 90]);
        let image = ImageRgba8::new(w, h, &buffer).unwrap();
        let features = analyzer.analyze(&image).unwrap();
        assert!(features.confidence <= 100);
    }
}

#[test]
fn undecodable_bytes_surface_a_decode_error() {
    let analyzer = ungated_analyzer();
    let err = analyzer.analyze_bytes(b"not an image at all").unwrap_err();
    assert!(matches!(err, AnalysisError::Decode(_)));
    assert!(err.to_string().contains("Failed to load image"));
}

#[test]
fn encoded_png_roundtrips_through_decode_and_prescale() {
    // 1000px input must be downscaled to the 800px bound before analysis.
    let rgba = image::RgbaImage::from_pixel(1000, 500, image::Rgba([30, 30, 30, 255]));
    let mut cursor = std::io::Cursor::new(Vec::new());
    rgba.write_to(&mut cursor, image::ImageFormat::Png).unwrap();
    let bytes = cursor.into_inner();

    let buffer = garment_analyzer::image::decode_rgba(&bytes, 800).unwrap();
    assert!(buffer.width().max(buffer.height()) <= 800);

    let analyzer = ungated_analyzer();
    let features = analyzer.analyze_bytes(&bytes).unwrap();
    assert!(features.colors.contains(&"black".to_string()));
}
