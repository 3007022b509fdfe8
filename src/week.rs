//! Week identification.
//!
//! Weeks are labelled "Week N" where N counts from the first week the app
//! was ever opened, not from a calendar week. The anchor is a persisted
//! offset written exactly once, on first run.

use chrono::{Datelike, NaiveDate};

use crate::db::{self, DbPool, StoreError, KEY_START_WEEK_OFFSET};

/// Absolute week number for a date: floor((days since Jan 1 + weekday of
/// Jan 1 + 1) / 7), with Sunday-indexed weekdays. This is the numbering
/// scheme existing logs were recorded under; it is not ISO-8601 and it
/// drifts across year boundaries. Keep it bit-for-bit.
pub fn absolute_week(today: NaiveDate) -> i64 {
    let jan1 = NaiveDate::from_ymd_opt(today.year(), 1, 1).expect("Jan 1 of a valid year");
    let days_since_jan1 = today.signed_duration_since(jan1).num_days();
    let weekday_of_jan1 = i64::from(jan1.weekday().num_days_from_sunday());

    (days_since_jan1 + weekday_of_jan1 + 1) / 7
}

/// Current week label for `today`. On the first call ever (no usable
/// baseline in the store) the absolute week is persisted as the baseline,
/// so that call returns "Week 1" and the numbering is anchored for good.
pub async fn current_week_label(pool: &DbPool, today: NaiveDate) -> Result<String, StoreError> {
    let absolute = absolute_week(today);

    let baseline = match db::get_json::<i64>(pool, KEY_START_WEEK_OFFSET).await? {
        Some(offset) => offset,
        None => {
            db::set_json(pool, KEY_START_WEEK_OFFSET, &absolute).await?;
            absolute
        }
    };

    Ok(format!("Week {}", absolute - baseline + 1))
}

// ---------------------------------------------------------------------------
/// Tests
// ---------------------------------------------------------------------------
