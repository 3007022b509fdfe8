//! Progress computation over raw log text.
//!
//! Entries are free text, one intended weight per line. A strict per-line
//! tokenizer decides what counts as a sample; everything downstream (the
//! next-weight suggestion, the chart series) works on the surviving
//! samples only. Lines that do not tokenize are dropped, never reported.

use serde::Serialize;

use crate::logbook::Logbook;
use crate::plan::Weekday;

/// Fixed progression increment added on top of the recent average, in kg.
pub const WEIGHT_INCREMENT: f64 = 2.5;

/// How many of the most recent sets feed the suggestion.
const SUGGESTION_WINDOW: usize = 3;

// ---------------------------------------------------------------------------
/// Tokenizer
// ---------------------------------------------------------------------------

/// One line of an entry after tokenizing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SetSample {
    Valid(f64),
    Skipped,
}

/// Tokenize a single line: trimmed, non-empty, and a finite number, or
/// it is skipped.
pub fn tokenize_line(line: &str) -> SetSample {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return SetSample::Skipped;
    }
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => SetSample::Valid(value),
        _ => SetSample::Skipped,
    }
}

/// All valid samples in an entry, oldest line first, in original relative
/// order.
pub fn parse_samples(text: &str) -> Vec<f64> {
    text.lines()
        .filter_map(|line| match tokenize_line(line) {
            SetSample::Valid(value) => Some(value),
            SetSample::Skipped => None,
        })
        .collect()
}

// ---------------------------------------------------------------------------
/// Suggestion
// ---------------------------------------------------------------------------

/// Suggested next working weight, or the explicit no-data sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Suggestion {
    Weight(i64),
    NoData,
}

impl std::fmt::Display for Suggestion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Suggestion::Weight(kg) => write!(f, "{} kg", kg),
            Suggestion::NoData => write!(f, "No data yet"),
        }
    }
}

/// Suggested next weight for one exercise: mean of the last up-to-3 logged
/// sets plus the fixed increment, rounded to the nearest whole kg.
///
/// Always reads the CURRENT week's entry. The suggestion does not follow
/// the week the user is viewing; that is how the feature has always
/// behaved, so callers pass the current week explicitly.
pub fn suggest_next_weight(
    logbook: &Logbook,
    current_week: &str,
    day: Weekday,
    index: u32,
) -> Suggestion {
    let samples = parse_samples(logbook.entry(current_week, day, index));
    if samples.is_empty() {
        return Suggestion::NoData;
    }

    let window = &samples[samples.len().saturating_sub(SUGGESTION_WINDOW)..];
    let mean = window.iter().sum::<f64>() / window.len() as f64;

    Suggestion::Weight((mean + WEIGHT_INCREMENT).round() as i64)
}

// ---------------------------------------------------------------------------
/// Chart series
// ---------------------------------------------------------------------------

/// Chart-ready series for one exercise in one week. Labels and values are
/// index-aligned; a zero-length series is valid and renders as nothing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProgressSeries {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

/// Series for the week the user is viewing (unlike the suggestion, this
/// follows the selection).
pub fn build_series(logbook: &Logbook, week: &str, day: Weekday, index: u32) -> ProgressSeries {
    let values = parse_samples(logbook.entry(week, day, index));
    let labels = (1..=values.len()).map(|i| format!("Set {}", i)).collect();

    ProgressSeries { labels, values }
}

// ---------------------------------------------------------------------------
/// Tests
// ---------------------------------------------------------------------------
