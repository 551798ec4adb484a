use crate::core::markers::{SectionId, SectionMarker};
use crate::core::score::{BandRange, ScoreBand};
use crate::errors::RegistryError;
use once_cell::sync::Lazy;
use std::collections::HashSet;

static STANDARD: Lazy<Registry> = Lazy::new(|| {
    let markers = SectionId::ALL.iter().map(|section| section.marker()).collect();
    let bands = ScoreBand::ALL.map(ScoreBand::standard_range);
    Registry::new(markers, bands).expect("valid standard registry")
});

/// Read-only marker set and band table shared by the segmenter and the classifier.
#[derive(Debug, Clone)]
pub struct Registry {
    markers: Vec<SectionMarker>,
    bands: [BandRange; 4],
}

impl Registry {
    pub fn new(
        markers: Vec<SectionMarker>,
        bands: [BandRange; 4],
    ) -> Result<Self, RegistryError> {
        let mut seen = HashSet::new();
        for marker in &markers {
            if marker.glyph.is_empty() {
                return Err(RegistryError::EmptyGlyph(marker.section.key()));
            }
            if !seen.insert(marker.glyph) {
                return Err(RegistryError::DuplicateGlyph {
                    glyph: marker.glyph,
                });
            }
        }

        validate_bands(&bands)?;
        Ok(Self { markers, bands })
    }

    /// The process-wide registry with every known section and the four standard bands.
    pub fn standard() -> &'static Registry {
        &STANDARD
    }

    pub fn markers(&self) -> &[SectionMarker] {
        &self.markers
    }

    pub fn bands(&self) -> &[BandRange; 4] {
        &self.bands
    }
}

fn validate_bands(bands: &[BandRange; 4]) -> Result<(), RegistryError> {
    let mut expected_min: u16 = 0;

    for (range, band) in bands.iter().zip(ScoreBand::ALL) {
        if range.band != band {
            return Err(RegistryError::BandGap(format!(
                "expected {} at this position, found {}",
                band.label(),
                range.band.label()
            )));
        }
        if u16::from(range.min) != expected_min {
            return Err(RegistryError::BandGap(format!(
                "{} starts at {} instead of {}",
                range.band.label(),
                range.min,
                expected_min
            )));
        }
        if range.max < range.min {
            return Err(RegistryError::BandGap(format!(
                "{} is empty ({}..={})",
                range.band.label(),
                range.min,
                range.max
            )));
        }
        expected_min = u16::from(range.max) + 1;
    }

    if expected_min != 101 {
        return Err(RegistryError::BandGap(format!(
            "last band ends at {} instead of 100",
            expected_min.saturating_sub(1)
        )));
    }

    Ok(())
}
