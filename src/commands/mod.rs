pub mod logbook;
pub mod progress;
pub mod timer;

use crate::db::AppState;
use crate::plan::{self, ExerciseSpec, Weekday};
use crate::week;
use serde::Serialize;
use std::sync::Arc;
use tauri::State;

#[tauri::command]
pub async fn get_current_week(
  state: State<'_, Arc<AppState>>,
) -> Result<String, String> {
  week::current_week_label(&state.db, chrono::Local::now().date_naive())
    .await
    .map_err(|e| format!("Failed to resolve current week: {}", e))
}

/// One row of the weekly schedule as the frontend lists it.
#[derive(Debug, Clone, Serialize)]
pub struct PlanDay {
  pub day: Weekday,
  pub class_name: &'static str,
  pub exercises: &'static [ExerciseSpec],
}

#[tauri::command]
pub fn get_training_plan() -> Vec<PlanDay> {
  Weekday::ALL
    .into_iter()
    .map(|day| {
      let plan = plan::day_plan(day);
      PlanDay {
        day,
        class_name: plan.class_name,
        exercises: plan.exercises,
      }
    })
    .collect()
}
