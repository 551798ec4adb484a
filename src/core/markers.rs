use serde::{Deserialize, Serialize};
use std::fmt;

/// Sections a match report can contain, in canonical report order.
///
/// Glyphs are a contract with the text producer and must stay byte-for-byte stable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionId {
    MatchScore,
    StrongMatches,
    PartialMatches,
    MissingSkills,
    ResumeImprovements,
    AtsOptimization,
    LearningRoadmap,
    InterviewPreparation,
    CoverLetter,
}

impl SectionId {
    pub const ALL: [SectionId; 9] = [
        Self::MatchScore,
        Self::StrongMatches,
        Self::PartialMatches,
        Self::MissingSkills,
        Self::ResumeImprovements,
        Self::AtsOptimization,
        Self::LearningRoadmap,
        Self::InterviewPreparation,
        Self::CoverLetter,
    ];

    pub fn glyph(self) -> &'static str {
        match self {
            Self::MatchScore => "\u{1F4CA}",
            Self::StrongMatches => "\u{2705}",
            Self::PartialMatches => "\u{26A0}",
            Self::MissingSkills => "\u{274C}",
            Self::ResumeImprovements => "\u{1F4C8}",
            Self::AtsOptimization => "\u{1F3AF}",
            Self::LearningRoadmap => "\u{1F9E0}",
            Self::InterviewPreparation => "\u{1F4BC}",
            Self::CoverLetter => "\u{1F4C4}",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::MatchScore => "Match Score",
            Self::StrongMatches => "Strong Matches",
            Self::PartialMatches => "Partial Matches",
            Self::MissingSkills => "Missing Skills",
            Self::ResumeImprovements => "Resume Improvements",
            Self::AtsOptimization => "ATS Optimization",
            Self::LearningRoadmap => "Learning Roadmap",
            Self::InterviewPreparation => "Interview Preparation",
            Self::CoverLetter => "Personalized Cover Letter",
        }
    }

    /// Heading titles the producer writes after the glyph, longest first.
    pub fn heading_titles(self) -> &'static [&'static str] {
        match self {
            Self::MatchScore => &["Match Score"],
            Self::StrongMatches => &["Strong Matches"],
            Self::PartialMatches => &["Partial Matches"],
            Self::MissingSkills => &["Missing Skills"],
            Self::ResumeImprovements => &[
                "Resume Improvement Suggestions",
                "Resume Improvements",
                "Resume Improvement",
            ],
            Self::AtsOptimization => &["ATS Optimization Tips", "ATS Optimization"],
            Self::LearningRoadmap => &["Suggested Learning Roadmap", "Learning Roadmap"],
            Self::InterviewPreparation => &["Interview Preparation"],
            Self::CoverLetter => &["Personalized Cover Letter", "Cover Letter"],
        }
    }

    /// The closing section has no terminating markers; it may quote any other glyph.
    pub fn runs_to_end(self) -> bool {
        matches!(self, Self::CoverLetter)
    }

    /// Sections whose joint absence makes a renderer fall back to the raw text.
    pub fn is_load_bearing(self) -> bool {
        matches!(self, Self::StrongMatches | Self::MissingSkills)
    }

    pub fn key(self) -> &'static str {
        match self {
            Self::MatchScore => "match_score",
            Self::StrongMatches => "strong_matches",
            Self::PartialMatches => "partial_matches",
            Self::MissingSkills => "missing_skills",
            Self::ResumeImprovements => "resume_improvements",
            Self::AtsOptimization => "ats_optimization",
            Self::LearningRoadmap => "learning_roadmap",
            Self::InterviewPreparation => "interview_preparation",
            Self::CoverLetter => "cover_letter",
        }
    }

    pub fn marker(self) -> SectionMarker {
        SectionMarker {
            glyph: self.glyph(),
            section: self,
        }
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// A glyph that introduces a section inside report text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SectionMarker {
    pub glyph: &'static str,
    pub section: SectionId,
}
