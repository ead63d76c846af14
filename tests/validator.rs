mod common;

use common::synthetic_image::{solid_rgba, striped_scene_rgba};
use garment_analyzer::image::ImageRgba8;
use garment_analyzer::validate::CLOTHING_CONFIDENCE_THRESHOLD;
use garment_analyzer::{AnalysisError, AnalyzerParams, GarmentAnalyzer};

#[test]
fn straight_line_scene_is_rejected_before_extraction() {
    // Long straight horizontal edges over a flat field: scenery, not drape.
    let (width, height) = (400usize, 300usize);
    let buffer = striped_scene_rgba(width, height, 25);
    let image = ImageRgba8::new(width, height, &buffer).unwrap();

    let analyzer = GarmentAnalyzer::new(AnalyzerParams::default());
    let err = analyzer.analyze(&image).unwrap_err();
    let report = match err {
        AnalysisError::NotClothing(report) => report,
        other => panic!("expected a validation rejection, got {other}"),
    };

    assert!(!report.is_clothing);
    assert!(report.confidence < CLOTHING_CONFIDENCE_THRESHOLD);
    let suggestion = report.suggestion.expect("rejections carry a suggestion");
    assert!(!suggestion.is_empty());
}

#[test]
fn validate_alone_matches_the_gated_pipeline() {
    let (width, height) = (400usize, 300usize);
    let buffer = striped_scene_rgba(width, height, 25);
    let image = ImageRgba8::new(width, height, &buffer).unwrap();

    let analyzer = GarmentAnalyzer::new(AnalyzerParams::default());
    let report = analyzer.validate(&image);
    let err = analyzer.analyze(&image).unwrap_err();
    match err {
        AnalysisError::NotClothing(gated) => assert_eq!(report, gated),
        other => panic!("expected a validation rejection, got {other}"),
    }
}

#[test]
fn gated_rejection_names_reasons() {
    let buffer = solid_rgba(200, 200, [128, 128, 128]);
    let image = ImageRgba8::new(200, 200, &buffer).unwrap();

    let analyzer = GarmentAnalyzer::new(AnalyzerParams::default());
    let report = analyzer.validate(&image);
    assert!(!report.is_clothing);
    assert!(!report.reasons.is_empty());
}

#[test]
fn ungated_analyzer_skips_the_gate() {
    let buffer = striped_scene_rgba(400, 300, 25);
    let image = ImageRgba8::new(400, 300, &buffer).unwrap();

    let analyzer = GarmentAnalyzer::new(AnalyzerParams {
        validate_content: false,
        ..Default::default()
    });
    // Same pixels that fail validation still produce a record when the
    // caller explicitly disables the gate.
    assert!(analyzer.analyze(&image).is_ok());
}
