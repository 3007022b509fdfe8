//! Tauri commands for the training logbook

use std::sync::Arc;
use tauri::State;

use crate::db::{AppState, StoreError};
use crate::logbook::BftStatus;
use crate::plan::Weekday;

/// Raw entry text for one exercise in one week ("" when never logged)
#[tauri::command]
pub async fn get_log_entry(
    state: State<'_, Arc<AppState>>,
    week: String,
    day: Weekday,
    index: u32,
) -> Result<String, String> {
    let logbook = state.logbook.lock().await;
    Ok(logbook.entry(&week, day, index).to_string())
}

/// Replace the entry text for one exercise. The in-memory logbook keeps
/// the edit even if the flush fails; the error is for a notification only.
#[tauri::command]
pub async fn set_log_entry(
    state: State<'_, Arc<AppState>>,
    week: String,
    day: Weekday,
    index: u32,
    text: String,
) -> Result<(), StoreError> {
    let mut logbook = state.logbook.lock().await;
    logbook.set_entry(&state.db, &week, day, index, text).await
}

/// Attendance flags for the weekly BFT classes
#[tauri::command]
pub async fn get_bft_status(
    state: State<'_, Arc<AppState>>,
) -> Result<BftStatus, String> {
    let logbook = state.logbook.lock().await;
    Ok(logbook.bft_status().clone())
}

/// Flip one weekday's attendance flag
#[tauri::command]
pub async fn toggle_bft_status(
    state: State<'_, Arc<AppState>>,
    day: Weekday,
) -> Result<(), StoreError> {
    let mut logbook = state.logbook.lock().await;
    logbook.toggle_bft(&state.db, day).await
}

/// Mark a (week, day) workout complete; repeats are ignored
#[tauri::command]
pub async fn complete_workout(
    state: State<'_, Arc<AppState>>,
    week: String,
    day: Weekday,
) -> Result<(), StoreError> {
    let mut logbook = state.logbook.lock().await;
    logbook.record_completion(&state.db, &week, day).await
}

#[tauri::command]
pub async fn get_completed_workouts(
    state: State<'_, Arc<AppState>>,
) -> Result<Vec<String>, String> {
    let logbook = state.logbook.lock().await;
    Ok(logbook.completed_workouts().to_vec())
}

/// Options for the week picker, newest label first (string order)
#[tauri::command]
pub async fn list_logged_weeks(
    state: State<'_, Arc<AppState>>,
) -> Result<Vec<String>, String> {
    let logbook = state.logbook.lock().await;
    Ok(logbook.weeks_descending())
}
