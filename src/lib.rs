mod commands;
mod db;
mod logbook;
mod plan;
mod progress;
mod timer;
mod week;

#[cfg(test)]
mod test_utils;

use db::AppState;
use std::sync::Arc;
use tauri::Manager;

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
  // Load environment variables from .env file (RUST_LOG lives there)
  dotenvy::dotenv().ok();

  tracing_subscriber::fmt()
    .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
    .with_target(false)
    .compact()
    .init();

  tauri::Builder::default()
    .setup(|app| {
      // Initialize the store and load the logbook before the frontend asks
      let app_handle = app.handle().clone();
      tauri::async_runtime::block_on(async move {
        match db::initialize_db(&app_handle).await {
          Ok(pool) => {
            let logbook = logbook::Logbook::load(&pool).await;
            let state = Arc::new(AppState {
              db: pool,
              logbook: tokio::sync::Mutex::new(logbook),
              rest_timer: timer::RestTimerHandle::new(),
            });
            app_handle.manage(state);
            tracing::info!("store.ready");
          }
          Err(e) => {
            tracing::error!(error = %e, "store.init_failed");
          }
        }
      });
      Ok(())
    })
    .invoke_handler(tauri::generate_handler![
      commands::get_current_week,
      commands::get_training_plan,
      // Logbook commands
      commands::logbook::get_log_entry,
      commands::logbook::set_log_entry,
      commands::logbook::get_bft_status,
      commands::logbook::toggle_bft_status,
      commands::logbook::complete_workout,
      commands::logbook::get_completed_workouts,
      commands::logbook::list_logged_weeks,
      // Progress commands
      commands::progress::get_suggested_weight,
      commands::progress::get_progress_series,
      commands::progress::get_day_view,
      // Rest timer commands
      commands::timer::start_rest_timer,
      commands::timer::get_rest_timer,
    ])
    .run(tauri::generate_context!())
    .expect("error while running tauri application");
}
