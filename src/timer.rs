//! Rest timer.
//!
//! A single one-minute countdown. The state machine itself is synchronous
//! and testable tick by tick; `RestTimerHandle` drives it from a spawned
//! once-per-second task. Starting always resets to the full minute, and
//! the previous ticker is aborted first so exactly one is ever live.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use serde::Serialize;
use tokio::task::JoinHandle;

/// Countdown length in seconds.
pub const REST_SECONDS: u32 = 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TimerPhase {
    Idle,
    Running,
    Finished,
}

// ---------------------------------------------------------------------------
/// State machine
// ---------------------------------------------------------------------------

#[derive(Debug)]
pub struct RestTimer {
    remaining: u32,
    phase: TimerPhase,
}

impl RestTimer {
    pub fn new() -> Self {
        Self {
            remaining: 0,
            phase: TimerPhase::Idle,
        }
    }

    /// Reset to the full countdown and start running. Restarting
    /// mid-countdown is allowed and starts over.
    pub fn start(&mut self) {
        self.remaining = REST_SECONDS;
        self.phase = TimerPhase::Running;
    }

    /// One second elapsed. Returns true while the countdown should keep
    /// ticking; at zero the timer moves to Finished and stays there.
    pub fn tick(&mut self) -> bool {
        if self.phase != TimerPhase::Running {
            return false;
        }

        self.remaining = self.remaining.saturating_sub(1);
        if self.remaining == 0 {
            self.phase = TimerPhase::Finished;
            return false;
        }
        true
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn phase(&self) -> TimerPhase {
        self.phase
    }
}

impl Default for RestTimer {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
/// Tick task
// ---------------------------------------------------------------------------

/// What the frontend polls: seconds left plus the phase.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct TimerSnapshot {
    pub remaining: u32,
    pub phase: TimerPhase,
}

/// Owns the timer state and the ticking task.
pub struct RestTimerHandle {
    timer: Arc<Mutex<RestTimer>>,
    ticker: Mutex<Option<JoinHandle<()>>>,
}

impl RestTimerHandle {
    pub fn new() -> Self {
        Self {
            timer: Arc::new(Mutex::new(RestTimer::new())),
            ticker: Mutex::new(None),
        }
    }

    /// (Re)start the countdown. Any previous ticker is aborted before the
    /// new one spawns; the ticker exits on its own once the countdown
    /// finishes.
    pub fn start(&self) {
        self.timer.lock().unwrap().start();

        let mut ticker = self.ticker.lock().unwrap();
        if let Some(task) = ticker.take() {
            task.abort();
        }

        let timer = Arc::clone(&self.timer);
        *ticker = Some(tokio::spawn(async move {
            let mut interval = tokio::time::interval(Duration::from_secs(1));
            // The first interval tick completes immediately; skip it so the
            // countdown holds the full value for its first second.
            interval.tick().await;
            loop {
                interval.tick().await;
                if !timer.lock().unwrap().tick() {
                    break;
                }
            }
        }));
    }

    pub fn snapshot(&self) -> TimerSnapshot {
        let timer = self.timer.lock().unwrap();
        TimerSnapshot {
            remaining: timer.remaining(),
            phase: timer.phase(),
        }
    }
}

impl Default for RestTimerHandle {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
/// Tests
// ---------------------------------------------------------------------------
