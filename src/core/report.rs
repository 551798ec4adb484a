use crate::core::AnalysisResult;
use crate::core::markers::SectionId;
use crate::core::score::{ScoreBand, ScoreSummary};
use colored::Colorize;
use serde::Serialize;

const BAR_WIDTH: usize = 30;

fn colored_band(band: ScoreBand, text: &str) -> String {
    match band {
        ScoreBand::Excellent => text.green().bold().to_string(),
        ScoreBand::Good => text.blue().bold().to_string(),
        ScoreBand::Partial => text.yellow().bold().to_string(),
        ScoreBand::Low => text.red().bold().to_string(),
    }
}

fn colored_title(section: SectionId) -> String {
    let title = section.title();
    match section {
        SectionId::StrongMatches => title.green().bold().to_string(),
        SectionId::PartialMatches => title.yellow().bold().to_string(),
        SectionId::MissingSkills => title.red().bold().to_string(),
        SectionId::ResumeImprovements | SectionId::LearningRoadmap => {
            title.blue().bold().to_string()
        }
        SectionId::AtsOptimization | SectionId::InterviewPreparation => {
            title.magenta().bold().to_string()
        }
        SectionId::MatchScore | SectionId::CoverLetter => title.bold().to_string(),
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct JsonAnalysis<'a> {
    #[serde(flatten)]
    pub result: &'a AnalysisResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<&'static str>,
    pub raw_fallback: bool,
}

impl<'a> From<&'a AnalysisResult> for JsonAnalysis<'a> {
    fn from(result: &'a AnalysisResult) -> Self {
        Self {
            result,
            label: result.band().map(ScoreBand::label),
            raw_fallback: result.needs_raw_fallback(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct JsonBand {
    pub score: u8,
    pub band: ScoreBand,
    pub label: &'static str,
    pub weight: u8,
}

impl JsonBand {
    pub fn new(score: u8, band: ScoreBand) -> Self {
        Self {
            score,
            band,
            label: band.label(),
            weight: band.weight(),
        }
    }
}

pub fn score_line(score: Option<u8>, band: Option<ScoreBand>) -> String {
    match (score, band) {
        (Some(score), Some(band)) => format!(
            "Match Score: {} ({})",
            colored_band(band, &format!("{score}%")),
            colored_band(band, band.label())
        ),
        _ => format!("Match Score: {}", "N/A".dimmed()),
    }
}

pub fn render_analysis(result: &AnalysisResult, raw_fallback: bool) -> String {
    let mut out = Vec::new();
    out.push(score_line(result.score(), result.band()));

    for (section, lines) in result.sections().iter() {
        out.push(String::new());
        if section == SectionId::CoverLetter {
            out.push(colored_title(section));
            out.extend(lines.iter().cloned());
            continue;
        }

        out.push(format!("{} ({})", colored_title(section), lines.len()));
        out.extend(lines.iter().map(|line| format!("- {line}")));
    }

    if result.needs_raw_fallback() {
        out.push(String::new());
        if raw_fallback {
            out.push("Raw report:".bold().to_string());
            out.push(result.raw_text().trim_end().to_string());
        } else {
            out.push("no match sections in report".dimmed().to_string());
        }
    }

    out.join("\n")
}

pub fn render_summary(summary: &ScoreSummary) -> String {
    let mut out = Vec::new();
    out.push(format!(
        "Analyses: {} ({} scored)",
        summary.total, summary.scored
    ));
    out.push(match summary.average {
        Some(average) => format!("Average Match Score: {average}%"),
        None => format!("Average Match Score: {}", "N/A".dimmed()),
    });
    out.push(String::new());

    for (band, count) in summary.distribution.iter().rev() {
        let filled = (summary.distribution.share(band) * BAR_WIDTH as f64).round() as usize;
        let bar = format!(
            "{}{}",
            "#".repeat(filled),
            ".".repeat(BAR_WIDTH.saturating_sub(filled))
        );
        out.push(format!(
            "{:<16} {:>4} {}",
            band.label(),
            count,
            colored_band(band, &bar)
        ));
    }

    out.join("\n")
}

pub fn print_human(result: &AnalysisResult, raw_fallback: bool) {
    println!("{}", render_analysis(result, raw_fallback));
}

pub fn print_summary(summary: &ScoreSummary) {
    println!("{}", render_summary(summary));
}
