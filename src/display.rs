use std::borrow::Cow;

use askama::Template;

use crate::algorithms::Algorithm;
use crate::potd::{ProblemRecord, DATE_FORMAT, DIRECTORY_ROOT};

pub const DESCRIPTION_LIMIT: usize = 500;

#[derive(Debug, Template)]
#[template(path = "problem.txt.j2", escape = "none")]
pub struct ProblemReport<'a> {
    pub title: &'a str,
    pub date: String,
    pub description: Cow<'a, str>,
    pub example: &'a str,
    pub constraints: Option<&'a str>,
    pub root: &'static str,
    pub directory: Option<&'a str>,
}

#[derive(Debug, Template)]
#[template(path = "guide.txt.j2", escape = "none")]
pub struct SolveGuide {
    pub algorithms: Vec<Algorithm>,
}

impl<'a> From<&'a ProblemRecord> for ProblemReport<'a> {
    fn from(record: &'a ProblemRecord) -> Self {
        Self {
            title: &record.title,
            date: record.date.format(DATE_FORMAT).to_string(),
            description: truncate(&record.description, DESCRIPTION_LIMIT),
            example: &record.example,
            constraints: record.constraints.as_deref(),
            root: DIRECTORY_ROOT,
            directory: record.directory.as_deref(),
        }
    }
}

impl Default for SolveGuide {
    fn default() -> Self {
        Self {
            algorithms: Algorithm::all(),
        }
    }
}

/// Cuts `text` to `limit` characters plus `...`; shorter text is returned as is.
pub fn truncate(text: &str, limit: usize) -> Cow<'_, str> {
    match text.char_indices().nth(limit) {
        Some((idx, _)) => Cow::Owned(format!("{}...", &text[..idx])),
        None => Cow::Borrowed(text),
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::potd::SourceKind;

    fn record(kind: SourceKind) -> ProblemRecord {
        ProblemRecord {
            title: "Ways To Tile A Floor".to_string(),
            description: "Count the tilings.".to_string(),
            example: String::new(),
            constraints: None,
            date: NaiveDate::from_ymd_opt(2025, 11, 7).unwrap(),
            source_kind: kind,
            directory: None,
        }
    }

    #[test]
    fn truncate_should_keep_short_text() {
        let text = "a".repeat(DESCRIPTION_LIMIT);

        assert_eq!(truncate(&text, DESCRIPTION_LIMIT), text.as_str());
    }

    #[test]
    fn truncate_should_cut_long_text() {
        let text = "b".repeat(DESCRIPTION_LIMIT + 1);
        let cut = truncate(&text, DESCRIPTION_LIMIT);

        assert_eq!(cut.len(), DESCRIPTION_LIMIT + 3);
        assert!(cut.ends_with("b..."));
    }

    #[test]
    fn truncate_should_count_characters() {
        let text = "é".repeat(600);
        let cut = truncate(&text, DESCRIPTION_LIMIT);

        assert_eq!(cut.chars().count(), DESCRIPTION_LIMIT + 3);
    }

    #[test]
    fn render_html_report_should_work() {
        let record = record(SourceKind::HtmlScrape);
        let output = ProblemReport::from(&record).render().unwrap();

        assert!(output.starts_with("Problem Title: Ways To Tile A Floor\nDate: 2025-11-07\n"));
        assert!(output.contains("Problem Description:\nCount the tilings."));
        assert!(!output.contains("Example:"));
        assert!(!output.contains("Constraints:"));
        assert!(!output.contains("Suggested directory"));
    }

    #[test]
    fn render_api_report_should_work() {
        let mut record = record(SourceKind::JsonApi);
        record.example = "Input: n = 3".to_string();
        record.constraints = Some("1 <= n <= 90".to_string());
        record.directory = Some("2025-11-07_WaysToTileAFloor".to_string());
        let output = ProblemReport::from(&record).render().unwrap();

        assert!(output.contains("Example: Input: n = 3"));
        assert!(output.contains("Constraints:\n1 <= n <= 90"));
        assert!(output.contains("Suggested directory: ProblemOfTheDay/2025-11-07_WaysToTileAFloor"));
    }

    #[test]
    fn render_guide_should_list_algorithms() {
        let output = SolveGuide::default().render().unwrap();

        assert!(output.contains("SOLUTION APPROACH:"));
        assert!(output.contains("4. OPTIMIZE:"));
        assert!(output.contains("- binary_search: index of a value in a sorted array"));
    }
}
