//! Tauri commands for the rest timer

use std::sync::Arc;
use tauri::State;

use crate::db::AppState;
use crate::timer::TimerSnapshot;

/// Start (or restart) the one-minute countdown
#[tauri::command]
pub async fn start_rest_timer(state: State<'_, Arc<AppState>>) -> Result<(), String> {
    state.rest_timer.start();
    Ok(())
}

/// Remaining seconds and phase, polled by the frontend display
#[tauri::command]
pub async fn get_rest_timer(state: State<'_, Arc<AppState>>) -> Result<TimerSnapshot, String> {
    Ok(state.rest_timer.snapshot())
}
