pub mod markers;
pub mod registry;
pub mod report;
pub mod score;
pub mod segment;

use crate::core::registry::Registry;
use crate::core::score::ScoreBand;
use crate::core::segment::ParsedReport;
use crate::errors::ScoreError;
use serde::Serialize;
use tracing::debug;

/// Segmented sections, optional band and the verbatim report, built once per call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalysisResult {
    sections: ParsedReport,
    score: Option<u8>,
    band: Option<ScoreBand>,
    raw_text: String,
}

impl AnalysisResult {
    pub fn sections(&self) -> &ParsedReport {
        &self.sections
    }

    pub fn score(&self) -> Option<u8> {
        self.score
    }

    /// `None` exactly when no score was supplied.
    pub fn band(&self) -> Option<ScoreBand> {
        self.band
    }

    pub fn raw_text(&self) -> &str {
        &self.raw_text
    }

    /// True when neither load-bearing section was found and a renderer should show the raw text.
    pub fn needs_raw_fallback(&self) -> bool {
        !self.sections.has_load_bearing_section()
    }
}

pub fn analyze(
    registry: &Registry,
    text: &str,
    score: Option<i64>,
) -> Result<AnalysisResult, ScoreError> {
    let (score, band) = match score {
        Some(value) => {
            let band = score::classify(registry, value)?;
            let value = u8::try_from(value).map_err(|_| ScoreError::OutOfRange(value))?;
            (Some(value), Some(band))
        }
        None => (None, None),
    };

    let sections = segment::segment(registry, text);
    debug!(
        sections = sections.len(),
        scored = score.is_some(),
        "analyzed report"
    );

    Ok(AnalysisResult {
        sections,
        score,
        band,
        raw_text: text.to_string(),
    })
}
