//! Test utilities and helpers for integration and unit testing
//!
//! This module provides common test infrastructure including:
//! - Database setup/teardown
//! - Store seeding helpers
//! - Helper assertions

use crate::logbook::Logbook;
use crate::plan::Weekday;
use sqlx::SqlitePool;

/// ---------------------------------------------------------------------------
/// Database Test Utilities
/// ---------------------------------------------------------------------------

/// Create an in-memory SQLite database for testing
/// Runs all migrations and returns a ready-to-use pool
///
/// Uses max_connections(1) to prevent multiple pool connections from creating
/// isolated in-memory databases, which would cause intermittent test failures
pub async fn setup_test_db() -> SqlitePool {
  let pool = sqlx::sqlite::SqlitePoolOptions::new()
    .max_connections(1)
    .connect("sqlite::memory:")
    .await
    .expect("Failed to create in-memory database");

  // Run migrations
  sqlx::migrate!("./migrations")
    .run(&pool)
    .await
    .expect("Failed to run migrations");

  pool
}

/// Close a test database pool
pub async fn teardown_test_db(pool: SqlitePool) {
  pool.close().await;
}

/// Insert a raw (possibly invalid) value under a store key, bypassing the
/// JSON encoder. For corrupt-state and format tests.
pub async fn seed_raw_value(pool: &SqlitePool, key: &str, raw: &str) {
  sqlx::query(
    "INSERT INTO store (key, value) VALUES (?1, ?2) ON CONFLICT(key) DO UPDATE SET value = excluded.value",
  )
  .bind(key)
  .bind(raw)
  .execute(pool)
  .await
  .expect("Failed to seed raw store value");
}

/// ---------------------------------------------------------------------------
/// Logbook Factories
/// ---------------------------------------------------------------------------

/// A logbook with two weeks of Monday bench entries, one completion, and
/// one attendance check, flushed through the store.
pub async fn seed_sample_logbook(pool: &SqlitePool) -> Logbook {
  let mut logbook = Logbook::load(pool).await;

  logbook
    .set_entry(pool, "Week 1", Weekday::Monday, 1, "100\n100\n102.5".to_string())
    .await
    .expect("Failed to seed week 1 entry");
  logbook
    .set_entry(pool, "Week 2", Weekday::Monday, 1, "102.5\n105".to_string())
    .await
    .expect("Failed to seed week 2 entry");
  logbook
    .record_completion(pool, "Week 1", Weekday::Monday)
    .await
    .expect("Failed to seed completion");
  logbook
    .toggle_bft(pool, Weekday::Monday)
    .await
    .expect("Failed to seed attendance");

  logbook
}

/// ---------------------------------------------------------------------------
/// Test Macros
/// ---------------------------------------------------------------------------

/// Assert two floats are approximately equal within a tolerance
#[macro_export]
macro_rules! assert_approx_eq {
  ($left:expr, $right:expr, $tolerance:expr) => {
    let diff = ($left - $right).abs();
    assert!(
      diff < $tolerance,
      "Values not approximately equal: {} vs {} (diff: {}, tolerance: {})",
      $left,
      $right,
      diff,
      $tolerance
    );
  };
}

/// ---------------------------------------------------------------------------
/// Tests for Test Utilities
/// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
  use super::*;

  #[tokio::test]
  async fn test_setup_db_creates_schema() {
    let pool = setup_test_db().await;

    let tables: Vec<(String,)> =
      sqlx::query_as("SELECT name FROM sqlite_master WHERE type='table' AND name = 'store'")
        .fetch_all(&pool)
        .await
        .expect("Failed to query tables");

    assert_eq!(tables.len(), 1, "Expected the store table to exist");

    teardown_test_db(pool).await;
  }

  #[tokio::test]
  async fn test_sample_logbook_survives_a_reload() {
    let pool = setup_test_db().await;

    let seeded = seed_sample_logbook(&pool).await;
    assert_eq!(seeded.entry("Week 2", Weekday::Monday, 1), "102.5\n105");

    let reloaded = Logbook::load(&pool).await;
    assert_eq!(reloaded.entry("Week 1", Weekday::Monday, 1), "100\n100\n102.5");
    assert_eq!(reloaded.completed_workouts(), ["Week 1 – Monday"]);
    assert_eq!(reloaded.bft_status().get(&Weekday::Monday), Some(&true));
    assert_eq!(reloaded.weeks_descending(), ["Week 2", "Week 1"]);

    teardown_test_db(pool).await;
  }

  #[tokio::test]
  async fn test_seed_raw_value_overwrites() {
    let pool = setup_test_db().await;

    seed_raw_value(&pool, "trainingLogs", "{broken").await;
    seed_raw_value(&pool, "trainingLogs", "{}").await;

    let (raw,): (String,) = sqlx::query_as("SELECT value FROM store WHERE key = 'trainingLogs'")
      .fetch_one(&pool)
      .await
      .expect("raw row");
    assert_eq!(raw, "{}");

    teardown_test_db(pool).await;
  }
}
