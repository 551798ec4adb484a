use anyhow::{Context, Result, bail};
use std::fs;
use std::io::Read;
use std::path::Path;

const ABSENT_MARKERS: [&str; 4] = ["null", "none", "n/a", "-"];

/// Reads a whole input file, or stdin when the path is `-`.
pub fn read_input(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut content = String::new();
        std::io::stdin()
            .read_to_string(&mut content)
            .context("failed reading stdin")?;
        return Ok(content);
    }

    fs::read_to_string(path).with_context(|| format!("failed reading {}", path.display()))
}

/// Parses stored scores, either a JSON array (`[72, null, 40]`) or one entry per line.
pub fn parse_score_list(content: &str) -> Result<Vec<Option<i64>>> {
    if content.trim_start().starts_with('[') {
        return serde_json::from_str::<Vec<Option<i64>>>(content)
            .context("failed parsing score list as a JSON array");
    }

    let mut scores = Vec::new();
    for (idx, raw_line) in content.lines().enumerate() {
        let line_no = idx + 1;
        let line = raw_line.trim();

        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let value = line.trim_end_matches('%').trim();
        if ABSENT_MARKERS
            .iter()
            .any(|marker| value.eq_ignore_ascii_case(marker))
        {
            scores.push(None);
            continue;
        }

        match value.parse::<i64>() {
            Ok(score) => scores.push(Some(score)),
            Err(_) => bail!("line {}: expected a score or null, found {:?}", line_no, line),
        }
    }

    Ok(scores)
}
