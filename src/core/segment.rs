use crate::core::markers::{SectionId, SectionMarker};
use crate::core::registry::Registry;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::{debug, trace};

static BULLET_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[-*•]+(?:\s+|$)").expect("valid bullet prefix regex"));

/// Cleaned lines per section found in a report. Sections with no content are never stored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ParsedReport {
    sections: BTreeMap<SectionId, Vec<String>>,
}

impl ParsedReport {
    pub fn get(&self, section: SectionId) -> Option<&[String]> {
        self.sections.get(&section).map(Vec::as_slice)
    }

    pub fn contains(&self, section: SectionId) -> bool {
        self.sections.contains_key(&section)
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// Present sections in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (SectionId, &[String])> + '_ {
        self.sections
            .iter()
            .map(|(section, lines)| (*section, lines.as_slice()))
    }

    pub fn has_load_bearing_section(&self) -> bool {
        self.sections
            .keys()
            .any(|section| section.is_load_bearing())
    }
}

/// Splits a report into sections. Never fails; unknown or malformed text yields an empty report.
///
/// Each section starts at the first occurrence of its glyph and ends at the nearest
/// occurrence of any other glyph, so physical section order does not matter. A known
/// heading title right after the glyph is dropped; anything else on that line is content.
pub fn segment(registry: &Registry, text: &str) -> ParsedReport {
    let mut sections = BTreeMap::new();

    for marker in registry.markers() {
        let Some(start) = text.find(marker.glyph) else {
            trace!(section = marker.section.key(), "marker not present");
            continue;
        };

        let body = &text[start + marker.glyph.len()..];
        let end = if marker.section.runs_to_end() {
            body.len()
        } else {
            nearest_other_marker(registry, marker, body)
        };

        let lines = clean_lines(strip_heading(marker.section, &body[..end]));
        if lines.is_empty() {
            debug!(section = marker.section.key(), "section has no content");
            continue;
        }

        debug!(
            section = marker.section.key(),
            lines = lines.len(),
            "located section"
        );
        sections.insert(marker.section, lines);
    }

    ParsedReport { sections }
}

fn nearest_other_marker(registry: &Registry, marker: &SectionMarker, body: &str) -> usize {
    registry
        .markers()
        .iter()
        .filter(|other| other.glyph != marker.glyph)
        .filter_map(|other| body.find(other.glyph))
        .min()
        .unwrap_or(body.len())
}

fn strip_heading(section: SectionId, content: &str) -> &str {
    let rest = content.strip_prefix('\u{FE0F}').unwrap_or(content);
    let rest = rest.trim_start_matches([' ', '\t']);
    let rest = section
        .heading_titles()
        .iter()
        .find_map(|title| strip_prefix_ignore_case(rest, title))
        .unwrap_or(rest);
    rest.trim_start_matches([':', ' ', '\t'])
}

fn strip_prefix_ignore_case<'a>(text: &'a str, prefix: &str) -> Option<&'a str> {
    let head = text.get(..prefix.len())?;
    head.eq_ignore_ascii_case(prefix)
        .then(|| &text[prefix.len()..])
}

fn clean_lines(content: &str) -> Vec<String> {
    content
        .lines()
        .map(clean_line)
        .filter(|line| !line.is_empty())
        .collect()
}

fn clean_line(line: &str) -> String {
    let trimmed = line.trim();
    BULLET_RE.replace(trimmed, "").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    const STRONG: &str = "\u{2705}";
    const PARTIAL: &str = "\u{26A0}";
    const MISSING: &str = "\u{274C}";
    const COVER: &str = "\u{1F4C4}";

    fn run(text: &str) -> ParsedReport {
        segment(Registry::standard(), text)
    }

    fn lines(report: &ParsedReport, section: SectionId) -> Vec<&str> {
        report
            .get(section)
            .unwrap_or_default()
            .iter()
            .map(String::as_str)
            .collect()
    }

    #[test]
    fn segments_match_sections() {
        let text = format!(
            "{STRONG} Strong Matches\n- Python\n- SQL\n{PARTIAL} Partial Matches\n- Docker\n{MISSING} Missing Skills\n- Kubernetes"
        );
        let report = run(&text);

        assert_eq!(report.len(), 3);
        assert_eq!(lines(&report, SectionId::StrongMatches), vec!["Python", "SQL"]);
        assert_eq!(lines(&report, SectionId::PartialMatches), vec!["Docker"]);
        assert_eq!(lines(&report, SectionId::MissingSkills), vec!["Kubernetes"]);
    }

    fn permutations(items: &[usize]) -> Vec<Vec<usize>> {
        if items.len() <= 1 {
            return vec![items.to_vec()];
        }
        let mut out = Vec::new();
        for idx in 0..items.len() {
            let mut rest = items.to_vec();
            let head = rest.remove(idx);
            for mut tail in permutations(&rest) {
                tail.insert(0, head);
                out.push(tail);
            }
        }
        out
    }

    #[test]
    fn every_section_order_yields_the_same_sections() {
        let blocks = [
            (SectionId::StrongMatches, "Strong Matches", vec!["Python", "SQL"]),
            (SectionId::PartialMatches, "Partial Matches", vec!["Docker"]),
            (SectionId::MissingSkills, "Missing Skills", vec!["Kubernetes", "Helm"]),
            (
                SectionId::ResumeImprovements,
                "Resume Improvement Suggestions",
                vec!["Quantify impact"],
            ),
        ];

        let orders = permutations(&[0, 1, 2, 3]);
        assert_eq!(orders.len(), 24);

        for order in orders {
            let mut text = String::new();
            for idx in &order {
                let (section, title, items) = &blocks[*idx];
                text.push_str(&format!("{} {title}\n", section.glyph()));
                for item in items {
                    text.push_str(&format!("- {item}\n"));
                }
            }

            let report = run(&text);
            assert_eq!(report.len(), blocks.len(), "order {order:?}");
            for (section, _, items) in &blocks {
                assert_eq!(&lines(&report, *section), items, "order {order:?}");
            }
        }
    }

    #[test]
    fn keeps_content_on_the_heading_line() {
        let text = format!("{STRONG} Strong Matches: Python, SQL\n{MISSING} Missing Skills: Kubernetes");
        let report = run(&text);

        assert_eq!(lines(&report, SectionId::StrongMatches), vec!["Python, SQL"]);
        assert_eq!(lines(&report, SectionId::MissingSkills), vec!["Kubernetes"]);
        assert!(report.has_load_bearing_section());
    }

    #[test]
    fn untitled_heading_line_is_content() {
        let text = format!("{STRONG} Python\n- SQL");
        let report = run(&text);
        assert_eq!(lines(&report, SectionId::StrongMatches), vec!["Python", "SQL"]);
    }

    #[test]
    fn heading_title_match_ignores_case() {
        let text = format!("{MISSING}\u{FE0F} MISSING SKILLS - Go\n- Rust");
        let report = run(&text);
        assert_eq!(lines(&report, SectionId::MissingSkills), vec!["Go", "Rust"]);
    }

    #[test]
    fn cover_letter_runs_to_end_of_text() {
        let text = format!("{COVER} Personalized Cover Letter\nDear Hiring Manager, ...");
        let report = run(&text);

        assert_eq!(report.len(), 1);
        assert_eq!(
            lines(&report, SectionId::CoverLetter),
            vec!["Dear Hiring Manager, ..."]
        );
    }

    #[test]
    fn cover_letter_keeps_quoted_glyphs() {
        let text = format!(
            "{STRONG} Strong Matches\n- Rust\n{COVER} Personalized Cover Letter\nDear team,\nI marked every {STRONG} item on your list.\nRegards"
        );
        let report = run(&text);
        let quoted = format!("I marked every {STRONG} item on your list.");

        assert_eq!(lines(&report, SectionId::StrongMatches), vec!["Rust"]);
        assert_eq!(
            lines(&report, SectionId::CoverLetter),
            vec!["Dear team,", quoted.as_str(), "Regards"]
        );
    }

    #[test]
    fn adjacent_markers_yield_no_section() {
        let text = format!("{STRONG}{MISSING} Missing Skills\n- Go");
        let report = run(&text);

        assert!(!report.contains(SectionId::StrongMatches));
        assert_eq!(lines(&report, SectionId::MissingSkills), vec!["Go"]);
    }

    #[test]
    fn heading_only_section_is_omitted() {
        let text = format!("{STRONG} Strong Matches\n\n   \n{MISSING} Missing Skills\n- Go\n");
        let report = run(&text);

        assert!(!report.contains(SectionId::StrongMatches));
        assert!(report.contains(SectionId::MissingSkills));
    }

    #[test]
    fn text_without_markers_is_empty() {
        let report = run("The model returned something unexpected.\n- a bullet\n");
        assert!(report.is_empty());
        assert!(!report.has_load_bearing_section());
        assert!(run("").is_empty());
    }

    #[test]
    fn repeated_glyph_is_content_after_first_occurrence() {
        let text = format!(
            "{STRONG} Strong Matches\n- Python\n{STRONG} also strong\n- SQL\n{MISSING} Missing Skills\n- Go"
        );
        let report = run(&text);
        let repeated = format!("{STRONG} also strong");

        assert_eq!(
            lines(&report, SectionId::StrongMatches),
            vec!["Python", repeated.as_str(), "SQL"]
        );
        assert_eq!(lines(&report, SectionId::MissingSkills), vec!["Go"]);
    }

    #[test]
    fn variation_selector_stays_in_heading() {
        let text = format!("{PARTIAL}\u{FE0F} Partial Matches\r\n- Docker\r\n* Helm\r\n");
        let report = run(&text);
        assert_eq!(lines(&report, SectionId::PartialMatches), vec!["Docker", "Helm"]);
    }

    #[test]
    fn cleans_bullet_prefixes() {
        assert_eq!(clean_line("  - Python  "), "Python");
        assert_eq!(clean_line("* SQL"), "SQL");
        assert_eq!(clean_line("• Docker"), "Docker");
        assert_eq!(clean_line("-- nested"), "nested");
        assert_eq!(clean_line("-"), "");
        assert_eq!(clean_line("**6-Month Plan:**"), "**6-Month Plan:**");
        assert_eq!(clean_line("-5% churn"), "-5% churn");
    }

    #[test]
    fn full_report_in_canonical_layout() {
        let text = "\u{1F4CA} Match Score: 55%\n\n\
            \u{2705} Strong Matches\n- Python\n\n\
            \u{26A0} Partial Matches\n- Docker\n\n\
            \u{274C} Missing Skills\n- Kubernetes\n\n\
            \u{1F4C8} Resume Improvement Suggestions\n- Quantify impact\n\n\
            \u{1F3AF} ATS Optimization Tips\n- Mention CI/CD\n\n\
            \u{1F9E0} Suggested Learning Roadmap\n\n**6-Month Plan:**\n- Learn Kubernetes\n\n\
            \u{1F4BC} Interview Preparation\n\n**Technical Questions:**\n- Explain pods\n";
        let report = run(text);

        assert_eq!(lines(&report, SectionId::MatchScore), vec!["55%"]);
        assert!(report.has_load_bearing_section());
        assert_eq!(
            lines(&report, SectionId::ResumeImprovements),
            vec!["Quantify impact"]
        );
        assert_eq!(lines(&report, SectionId::AtsOptimization), vec!["Mention CI/CD"]);
        assert_eq!(
            lines(&report, SectionId::LearningRoadmap),
            vec!["**6-Month Plan:**", "Learn Kubernetes"]
        );
        assert_eq!(
            lines(&report, SectionId::InterviewPreparation),
            vec!["**Technical Questions:**", "Explain pods"]
        );
        let order: Vec<SectionId> = report.iter().map(|(section, _)| section).collect();
        let mut sorted = order.clone();
        sorted.sort();
        assert_eq!(order, sorted);
    }
}
