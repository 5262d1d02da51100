//! Streak scanning and scoring

pub mod scoring;
pub mod streak;

pub use scoring::{ScoringConfig, Thresholds};
pub use streak::Streak;
