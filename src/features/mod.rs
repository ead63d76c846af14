//! Attribute extraction: ordered rule tables over the derived statistics.

pub mod extractor;
pub mod fallback;
pub mod rules;

pub use extractor::{extract_features, FeatureContext, BASE_CONFIDENCE, MAX_CONFIDENCE};
pub use fallback::{fallback_features, FALLBACK_CONFIDENCE};
pub use rules::{first_match, Rule};
