//! Error taxonomy for a single analysis call.
//!
//! Three caller-distinguishable outcomes:
//! - [`AnalysisError::Decode`] – the bytes could not become a pixel buffer.
//! - [`AnalysisError::NotClothing`] – the content gate rejected the image;
//!   carries the full [`ValidationReport`] so the UI can show the graded
//!   suggestion instead of a generic failure.
//! - [`AnalysisError::Analysis`] – an internal invariant broke (e.g. a
//!   zero-sized image after scaling).
//!
//! None of these leave partial state behind; the pipeline owns nothing
//! beyond the one decoded buffer.

use crate::types::ValidationReport;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnalysisError {
    /// Image bytes could not be decoded. Surfaced verbatim, never retried.
    #[error("Failed to load image: {0}")]
    Decode(#[from] image::ImageError),

    /// The clothing-content validator rejected the image. The report's
    /// suggestion must be shown to the user; callers must not substitute a
    /// guessed feature record.
    #[error("image does not appear to contain clothing (confidence {})", .0.confidence)]
    NotClothing(ValidationReport),

    /// Internal invariant violation during region/edge/texture computation.
    #[error("analysis failed: {0}")]
    Analysis(String),
}

impl AnalysisError {
    /// The validator report, when this is a content rejection.
    pub fn validation_report(&self) -> Option<&ValidationReport> {
        match self {
            AnalysisError::NotClothing(report) => Some(report),
            _ => None,
        }
    }
}
