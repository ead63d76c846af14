//! Rule-based classification over region statistics.

pub mod garment;
pub mod silhouette;

pub use garment::{classify_from_scores, classify_garment};
pub use silhouette::classify_silhouette;
