use serde::de::DeserializeOwned;
use serde::Serialize;
use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};
use std::fs;
use std::path::PathBuf;
use tauri::Manager;

use crate::logbook::Logbook;
use crate::timer::RestTimerHandle;

pub type DbPool = SqlitePool;

/// Application state: the database pool, the logbook loaded from it at
/// startup, and the rest timer.
pub struct AppState {
  pub db: DbPool,
  pub logbook: tokio::sync::Mutex<Logbook>,
  pub rest_timer: RestTimerHandle,
}

/// ---------------------------------------------------------------------------
/// Store keys
/// ---------------------------------------------------------------------------

// Persisted key names. Existing installs have data under exactly these
// names, so they are part of the storage format.
pub const KEY_START_WEEK_OFFSET: &str = "startWeekOffset";
pub const KEY_TRAINING_LOGS: &str = "trainingLogs";
pub const KEY_BFT_STATUS: &str = "bftStatus";
pub const KEY_COMPLETED_WORKOUTS: &str = "completedWorkouts";

/// ---------------------------------------------------------------------------
/// Error Handling
/// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
  #[error("Database error: {0}")]
  Database(#[from] sqlx::Error),

  #[error("Failed to encode {key}: {source}")]
  Encode {
    key: &'static str,
    source: serde_json::Error,
  },
}

impl Serialize for StoreError {
  fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
  where
    S: serde::Serializer,
  {
    serializer.serialize_str(&self.to_string())
  }
}

/// ---------------------------------------------------------------------------
/// Initialization
/// ---------------------------------------------------------------------------

/// Get the path to the database file, under the platform app-data dir
/// (e.g. ~/.local/share/com.liftlog.app/liftlog.db on Linux)
fn get_db_path<R: tauri::Runtime>(app: &tauri::AppHandle<R>) -> Result<PathBuf, Box<dyn std::error::Error>> {
  let data_dir = app
    .path()
    .app_data_dir()
    .map_err(|e| format!("Failed to get app data dir: {}", e))?;

  // Create directory if it doesn't exist
  fs::create_dir_all(&data_dir)?;

  Ok(data_dir.join("liftlog.db"))
}

/// Initialize the database connection pool and run migrations
pub async fn initialize_db<R: tauri::Runtime>(app: &tauri::AppHandle<R>) -> Result<DbPool, Box<dyn std::error::Error>> {
  let db_path = get_db_path(app)?;
  let db_url = format!("sqlite://{}?mode=rwc", db_path.display());

  tracing::info!(path = %db_path.display(), "db.initializing");

  // Create connection pool
  let pool = SqlitePoolOptions::new()
    .max_connections(5)
    .connect(&db_url)
    .await?;

  // Run migrations
  sqlx::migrate!("./migrations").run(&pool).await?;

  tracing::info!("db.ready");

  Ok(pool)
}

/// ---------------------------------------------------------------------------
/// Key-Value Accessors
/// ---------------------------------------------------------------------------

/// Read a JSON-encoded value. A missing key is Ok(None); a stored value
/// that no longer decodes is logged and also reported as None, so callers
/// fall back to their default instead of failing startup.
pub async fn get_json<T: DeserializeOwned>(pool: &DbPool, key: &str) -> Result<Option<T>, StoreError> {
  let row: Option<(String,)> = sqlx::query_as("SELECT value FROM store WHERE key = ?1")
    .bind(key)
    .fetch_optional(pool)
    .await?;

  match row {
    Some((raw,)) => match serde_json::from_str(&raw) {
      Ok(value) => Ok(Some(value)),
      Err(e) => {
        tracing::warn!(key, error = %e, "store.value_corrupt");
        Ok(None)
      }
    },
    None => Ok(None),
  }
}

/// Read a key, treating every failure mode (missing row, corrupt value,
/// read error) as the empty default.
pub async fn get_json_or_default<T: DeserializeOwned + Default>(pool: &DbPool, key: &str) -> T {
  match get_json(pool, key).await {
    Ok(Some(value)) => value,
    Ok(None) => T::default(),
    Err(e) => {
      tracing::warn!(key, error = %e, "store.read_failed");
      T::default()
    }
  }
}

/// Write a JSON-encoded value, replacing whatever was there.
pub async fn set_json<T: Serialize>(pool: &DbPool, key: &'static str, value: &T) -> Result<(), StoreError> {
  let raw = serde_json::to_string(value).map_err(|source| StoreError::Encode { key, source })?;

  sqlx::query(
    "INSERT INTO store (key, value) VALUES (?1, ?2) ON CONFLICT(key) DO UPDATE SET value = excluded.value",
  )
  .bind(key)
  .bind(raw)
  .execute(pool)
  .await?;

  Ok(())
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
  use super::*;
  use crate::test_utils::{seed_raw_value, setup_test_db, teardown_test_db};

  #[tokio::test]
  async fn test_missing_key_reads_as_none() {
    let pool = setup_test_db().await;

    let value: Option<i64> = get_json(&pool, KEY_START_WEEK_OFFSET).await.expect("read");
    assert_eq!(value, None);

    teardown_test_db(pool).await;
  }

  #[tokio::test]
  async fn test_set_then_get_roundtrip() {
    let pool = setup_test_db().await;

    set_json(&pool, KEY_START_WEEK_OFFSET, &27_i64).await.expect("write");
    let value: Option<i64> = get_json(&pool, KEY_START_WEEK_OFFSET).await.expect("read");
    assert_eq!(value, Some(27));

    // Overwrite replaces, not appends
    set_json(&pool, KEY_START_WEEK_OFFSET, &28_i64).await.expect("write");
    let value: Option<i64> = get_json(&pool, KEY_START_WEEK_OFFSET).await.expect("read");
    assert_eq!(value, Some(28));

    teardown_test_db(pool).await;
  }

  #[tokio::test]
  async fn test_corrupt_value_falls_back_to_default() {
    let pool = setup_test_db().await;

    seed_raw_value(&pool, KEY_BFT_STATUS, "{not json").await;

    let value: Option<std::collections::BTreeMap<String, bool>> =
      get_json(&pool, KEY_BFT_STATUS).await.expect("read");
    assert_eq!(value, None);

    let defaulted: std::collections::BTreeMap<String, bool> =
      get_json_or_default(&pool, KEY_BFT_STATUS).await;
    assert!(defaulted.is_empty());

    teardown_test_db(pool).await;
  }

  #[tokio::test]
  async fn test_integer_values_are_stored_as_plain_json() {
    let pool = setup_test_db().await;

    set_json(&pool, KEY_START_WEEK_OFFSET, &31_i64).await.expect("write");

    let (raw,): (String,) = sqlx::query_as("SELECT value FROM store WHERE key = ?1")
      .bind(KEY_START_WEEK_OFFSET)
      .fetch_one(&pool)
      .await
      .expect("raw row");
    assert_eq!(raw, "31");

    teardown_test_db(pool).await;
  }
}
