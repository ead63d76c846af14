use garment_analyzer::image::ImageRgba8;
use garment_analyzer::{AnalyzerParams, GarmentAnalyzer};

fn main() {
    // Demo stub: creates a fake RGBA buffer and runs the analyzer
    let w = 400usize;
    let h = 600usize;
    let rgba = vec![40u8; w * h * 4];
    let img = match ImageRgba8::new(w, h, &rgba) {
        Ok(img) => img,
        Err(e) => {
            eprintln!("{e}");
            return;
        }
    };

    let analyzer = GarmentAnalyzer::new(AnalyzerParams {
        validate_content: false,
        ..Default::default()
    });
    match analyzer.analyze(&img) {
        Ok(features) => println!(
            "garment analyzed: fit={} colors={:?} confidence={}",
            features.fit, features.colors, features.confidence
        ),
        Err(e) => eprintln!("analysis failed: {e}"),
    }
}
