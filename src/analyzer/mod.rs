//! Analyzer orchestration: configuration plus the staged pipeline.
//!
//! Modules
//! - [`params`] – caller-facing configuration with JSON loading.
//! - `pipeline` – the [`GarmentAnalyzer`] implementation.

pub mod params;
mod pipeline;

pub use params::AnalyzerParams;
pub use pipeline::GarmentAnalyzer;
