use crate::core::registry::Registry;
use crate::errors::ScoreError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::fmt;
use tracing::debug;

static MATCH_SCORE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)match\s+score:\s*([0-9]+)\s*%").expect("valid match score regex")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreBand {
    Low,
    Partial,
    Good,
    Excellent,
}

impl ScoreBand {
    pub const ALL: [ScoreBand; 4] = [Self::Low, Self::Partial, Self::Good, Self::Excellent];

    pub fn label(self) -> &'static str {
        match self {
            Self::Low => "Low Match",
            Self::Partial => "Partial Match",
            Self::Good => "Good Match",
            Self::Excellent => "Excellent Match",
        }
    }

    /// Ordinal display intensity, 0 for `Low` up to 3 for `Excellent`.
    pub fn weight(self) -> u8 {
        match self {
            Self::Low => 0,
            Self::Partial => 1,
            Self::Good => 2,
            Self::Excellent => 3,
        }
    }

    pub fn standard_range(self) -> BandRange {
        let (min, max) = match self {
            Self::Low => (0, 39),
            Self::Partial => (40, 59),
            Self::Good => (60, 79),
            Self::Excellent => (80, 100),
        };
        BandRange {
            band: self,
            min,
            max,
        }
    }
}

impl fmt::Display for ScoreBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Inclusive integer range mapped to a band.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BandRange {
    pub band: ScoreBand,
    pub min: u8,
    pub max: u8,
}

impl BandRange {
    pub fn contains(&self, score: i64) -> bool {
        (i64::from(self.min)..=i64::from(self.max)).contains(&score)
    }
}

/// Maps a percentage to its band. Scores outside 0..=100 are rejected, never clamped.
pub fn classify(registry: &Registry, score: i64) -> Result<ScoreBand, ScoreError> {
    let band = registry
        .bands()
        .iter()
        .find(|range| range.contains(score))
        .map(|range| range.band)
        .ok_or(ScoreError::OutOfRange(score))?;

    debug!(score, band = band.label(), "classified score");
    Ok(band)
}

/// Reads the `Match Score: NN%` line a report usually opens with.
///
/// Digits too long for `i64` saturate so that classification still rejects them.
pub fn extract_match_score(text: &str) -> Option<i64> {
    let captures = MATCH_SCORE_RE.captures(text)?;
    let digits = captures.get(1)?.as_str();
    Some(digits.parse::<i64>().unwrap_or(i64::MAX))
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Distribution {
    pub low: usize,
    pub partial: usize,
    pub good: usize,
    pub excellent: usize,
}

impl Distribution {
    pub fn get(&self, band: ScoreBand) -> usize {
        match band {
            ScoreBand::Low => self.low,
            ScoreBand::Partial => self.partial,
            ScoreBand::Good => self.good,
            ScoreBand::Excellent => self.excellent,
        }
    }

    fn record(&mut self, band: ScoreBand) {
        match band {
            ScoreBand::Low => self.low += 1,
            ScoreBand::Partial => self.partial += 1,
            ScoreBand::Good => self.good += 1,
            ScoreBand::Excellent => self.excellent += 1,
        }
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (ScoreBand, usize)> + '_ {
        ScoreBand::ALL.into_iter().map(|band| (band, self.get(band)))
    }

    pub fn total(&self) -> usize {
        self.low + self.partial + self.good + self.excellent
    }

    /// Fraction of scored results that fall in `band`, for proportional bars.
    pub fn share(&self, band: ScoreBand) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        self.get(band) as f64 / total as f64
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScoreSummary {
    pub total: usize,
    pub scored: usize,
    pub average: Option<u8>,
    pub distribution: Distribution,
}

/// Buckets many stored scores. Absent scores count toward `total` only.
pub fn distribution(
    registry: &Registry,
    scores: &[Option<i64>],
) -> Result<ScoreSummary, ScoreError> {
    let mut summary = ScoreSummary {
        total: scores.len(),
        ..ScoreSummary::default()
    };
    let mut sum: i64 = 0;

    for score in scores.iter().flatten() {
        let band = classify(registry, *score)?;
        summary.distribution.record(band);
        summary.scored += 1;
        sum += score;
    }

    summary.average = rounded_average(sum, summary.scored);
    Ok(summary)
}

// half-up rounding on non-negative sums; every value is already within 0..=100
fn rounded_average(sum: i64, count: usize) -> Option<u8> {
    if count == 0 {
        return None;
    }
    let count = count as i64;
    u8::try_from((2 * sum + count) / (2 * count)).ok()
}
