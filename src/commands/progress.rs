//! Tauri commands for weight suggestions and chart series

use std::sync::Arc;
use tauri::State;

use crate::db::AppState;
use crate::plan::{self, Weekday};
use crate::progress::{self, ProgressSeries};
use crate::week;

/// Suggestion string for one exercise ("105 kg" or "No data yet").
/// Takes no week argument on purpose: the suggestion always reads the
/// current week's log, whatever week the user is viewing.
#[tauri::command]
pub async fn get_suggested_weight(
    state: State<'_, Arc<AppState>>,
    day: Weekday,
    index: u32,
) -> Result<String, String> {
    let current_week = week::current_week_label(&state.db, chrono::Local::now().date_naive())
        .await
        .map_err(|e| format!("Failed to resolve current week: {}", e))?;

    let logbook = state.logbook.lock().await;
    Ok(progress::suggest_next_weight(&logbook, &current_week, day, index).to_string())
}

/// Chart series for one exercise in the selected viewing week
#[tauri::command]
pub async fn get_progress_series(
    state: State<'_, Arc<AppState>>,
    week: String,
    day: Weekday,
    index: u32,
) -> Result<ProgressSeries, String> {
    let logbook = state.logbook.lock().await;
    Ok(progress::build_series(&logbook, &week, day, index))
}

/// One exercise block as the day screen renders it
#[derive(Debug, Clone, serde::Serialize)]
pub struct ExerciseView {
    pub name: &'static str,
    pub sets: u32,
    pub reps: &'static str,
    /// Current week's editable entry text
    pub entry: String,
    pub suggestion: String,
    /// Selected viewing week's chart
    pub series: ProgressSeries,
}

#[derive(Debug, Clone, serde::Serialize)]
pub struct DayView {
    pub class_name: &'static str,
    pub rest_day: bool,
    pub exercises: Vec<ExerciseView>,
}

/// Everything the day screen needs in one call: the class, and per
/// exercise the plan targets, the current week's entry, the suggestion,
/// and the selected week's series.
#[tauri::command]
pub async fn get_day_view(
    state: State<'_, Arc<AppState>>,
    week: String,
    day: Weekday,
) -> Result<DayView, String> {
    let current_week = week::current_week_label(&state.db, chrono::Local::now().date_naive())
        .await
        .map_err(|e| format!("Failed to resolve current week: {}", e))?;

    let logbook = state.logbook.lock().await;
    let plan = plan::day_plan(day);

    let exercises = plan
        .exercises
        .iter()
        .enumerate()
        .map(|(index, exercise)| {
            let index = index as u32;
            ExerciseView {
                name: exercise.name,
                sets: exercise.sets,
                reps: exercise.reps,
                entry: logbook.entry(&current_week, day, index).to_string(),
                suggestion: progress::suggest_next_weight(&logbook, &current_week, day, index)
                    .to_string(),
                series: progress::build_series(&logbook, &week, day, index),
            }
        })
        .collect();

    Ok(DayView {
        class_name: plan.class_name,
        rest_day: plan.is_rest_day(),
        exercises,
    })
}
