//! Turns a free-form resume/job match report into typed sections and classifies match scores.
//!
//! Both [`segment`] and [`classify`] are pure functions over a
//! shared, read-only [`Registry`].

pub mod config;
pub mod core;
pub mod errors;
pub mod utils;

pub use crate::core::markers::{SectionId, SectionMarker};
pub use crate::core::registry::Registry;
pub use crate::core::score::{
    Distribution, ScoreBand, ScoreSummary, classify, distribution, extract_match_score,
};
pub use crate::core::segment::{ParsedReport, segment};
pub use crate::core::{AnalysisResult, analyze};
pub use crate::errors::{RegistryError, ScoreError};
