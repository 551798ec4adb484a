use thiserror::Error;

/// Invalid-argument conditions raised by score classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ScoreError {
    #[error("score {0} is outside the valid range 0..=100")]
    OutOfRange(i64),
}

/// A registry that would break segmentation or classification.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("marker glyph {glyph:?} is registered more than once")]
    DuplicateGlyph { glyph: &'static str },

    #[error("marker glyph for {0} is empty")]
    EmptyGlyph(&'static str),

    #[error("band table does not partition 0..=100: {0}")]
    BandGap(String),
}
