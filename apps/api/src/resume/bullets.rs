//! Per-line bullet checks for experience/project descriptions.
//!
//! A line passes when it opens with an action verb and carries a measurable
//! signal (a digit, `%`, or a standalone `x` / `k` / `M` magnitude token).

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::resume::verbs::is_action_verb;

static METRIC_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\d|%|\b[xkKM]\b").expect("metric pattern is a valid regex")
});

/// Leading list markers stripped before the first word is read.
const BULLET_MARKERS: &[char] = &['-', '*', '•', '·', '>', '–'];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BulletIssue {
    WeakOpening,
    NoMetric,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BulletWarning {
    /// 1-based position among the non-empty lines.
    pub line: usize,
    pub issue: BulletIssue,
    pub hint: String,
}

fn first_word(line: &str) -> &str {
    line.trim_start_matches(|c: char| c.is_whitespace() || BULLET_MARKERS.contains(&c))
        .split_whitespace()
        .next()
        .unwrap_or("")
}

pub fn has_metric(line: &str) -> bool {
    METRIC_PATTERN.is_match(line)
}

/// Checks every non-empty line of `description`. Empty or whitespace-only
/// input yields no warnings.
pub fn analyze_bullets(description: &str) -> Vec<BulletWarning> {
    let mut warnings = Vec::new();

    for (idx, line) in description
        .lines()
        .filter(|l| !l.trim().is_empty())
        .enumerate()
    {
        let line_no = idx + 1;
        let opener = first_word(line);

        if !is_action_verb(opener) {
            warnings.push(BulletWarning {
                line: line_no,
                issue: BulletIssue::WeakOpening,
                hint: format!(
                    "Line {line_no}: start with a strong action verb (e.g. Built, Led, Reduced) instead of '{opener}'"
                ),
            });
        }
        if !has_metric(line) {
            warnings.push(BulletWarning {
                line: line_no,
                issue: BulletIssue::NoMetric,
                hint: format!(
                    "Line {line_no}: add a measurable result (a number, %, or scale like 10x / 5k / 2M)"
                ),
            });
        }
    }

    warnings
}
