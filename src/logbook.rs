//! The training logbook.
//!
//! Owns everything the user has logged: per-week/per-day/per-exercise set
//! text, BFT class attendance, and completed-workout markers. Loaded from
//! the store once at startup; every mutation flushes the affected key back
//! immediately. A failed flush keeps the in-memory change (the session
//! stays consistent, the write is reported to the caller).

use std::collections::BTreeMap;

use serde::Serialize;

use crate::db::{
    self, DbPool, StoreError, KEY_BFT_STATUS, KEY_COMPLETED_WORKOUTS, KEY_TRAINING_LOGS,
};
use crate::plan::Weekday;

/// Week label -> weekday -> exercise index -> raw entry text.
pub type TrainingLog = BTreeMap<String, BTreeMap<Weekday, BTreeMap<u32, String>>>;

/// Attendance checkboxes for the weekly BFT classes. One flat record, not
/// per-week: a check stays set across week boundaries until toggled off.
pub type BftStatus = BTreeMap<Weekday, bool>;

#[derive(Debug, Default)]
pub struct Logbook {
    logs: TrainingLog,
    bft_status: BftStatus,
    completed_workouts: Vec<String>,
}

impl Logbook {
    /// Load the logbook from the store. Missing or corrupt keys come back
    /// as their empty defaults; startup never fails on bad state.
    pub async fn load(pool: &DbPool) -> Self {
        Self {
            logs: db::get_json_or_default(pool, KEY_TRAINING_LOGS).await,
            bft_status: db::get_json_or_default(pool, KEY_BFT_STATUS).await,
            completed_workouts: db::get_json_or_default(pool, KEY_COMPLETED_WORKOUTS).await,
        }
    }

    // -----------------------------------------------------------------------
    // Log entries
    // -----------------------------------------------------------------------

    /// Raw entry text for one exercise in one week. Absent entries read as
    /// the empty string.
    pub fn entry(&self, week: &str, day: Weekday, index: u32) -> &str {
        self.logs
            .get(week)
            .and_then(|week_logs| week_logs.get(&day))
            .and_then(|day_logs| day_logs.get(&index))
            .map(String::as_str)
            .unwrap_or("")
    }

    /// Replace the whole text blob for one exercise, creating the week and
    /// day levels as needed.
    pub async fn set_entry(
        &mut self,
        pool: &DbPool,
        week: &str,
        day: Weekday,
        index: u32,
        text: String,
    ) -> Result<(), StoreError> {
        self.logs
            .entry(week.to_string())
            .or_default()
            .entry(day)
            .or_default()
            .insert(index, text);

        flush(pool, KEY_TRAINING_LOGS, &self.logs).await
    }

    /// Week labels with at least one logged entry, sorted by label string
    /// descending. The sort is lexicographic, so "Week 9" comes before
    /// "Week 10" - the order existing installs show in the week picker.
    pub fn weeks_descending(&self) -> Vec<String> {
        self.logs.keys().rev().cloned().collect()
    }

    // -----------------------------------------------------------------------
    // BFT attendance
    // -----------------------------------------------------------------------

    pub fn bft_status(&self) -> &BftStatus {
        &self.bft_status
    }

    /// Flip the attendance flag for a weekday. A day never toggled before
    /// reads as unchecked, so its first toggle checks it.
    pub async fn toggle_bft(&mut self, pool: &DbPool, day: Weekday) -> Result<(), StoreError> {
        let flag = self.bft_status.entry(day).or_insert(false);
        *flag = !*flag;

        flush(pool, KEY_BFT_STATUS, &self.bft_status).await
    }

    // -----------------------------------------------------------------------
    // Completed workouts
    // -----------------------------------------------------------------------

    pub fn completed_workouts(&self) -> &[String] {
        &self.completed_workouts
    }

    /// Append "{week} – {day}" unless that exact entry is already present.
    /// Order-preserving; duplicates are suppressed, not overwritten.
    pub async fn record_completion(
        &mut self,
        pool: &DbPool,
        week: &str,
        day: Weekday,
    ) -> Result<(), StoreError> {
        let entry = format!("{} – {}", week, day);
        if self.completed_workouts.iter().any(|existing| existing == &entry) {
            return Ok(());
        }
        self.completed_workouts.push(entry);

        flush(pool, KEY_COMPLETED_WORKOUTS, &self.completed_workouts).await
    }
}

/// Write-through flush of one key. The in-memory mutation has already
/// happened by the time this runs; on failure the session keeps serving
/// the new state and the error goes back to the caller.
async fn flush<T: Serialize>(pool: &DbPool, key: &'static str, value: &T) -> Result<(), StoreError> {
    let result = db::set_json(pool, key, value).await;
    if let Err(e) = &result {
        tracing::warn!(key, error = %e, "logbook.flush_failed");
    }
    result
}

// ---------------------------------------------------------------------------
/// Tests
// ---------------------------------------------------------------------------
