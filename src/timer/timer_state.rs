//! Timer state structure and management

use serde::{Deserialize, Serialize};

/// Lifecycle phase of a countdown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimerPhase {
    Idle,
    Running,
    Finished,
}

/// Timer state published to watchers on every tick
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerState {
    pub phase: TimerPhase,
    pub remaining_seconds: u64,
}

impl TimerState {
    /// Create an idle timer state holding the full duration
    pub fn idle(duration_seconds: u64) -> Self {
        Self {
            phase: TimerPhase::Idle,
            remaining_seconds: duration_seconds,
        }
    }

    /// Create a running timer state with remaining seconds
    pub fn running(remaining_seconds: u64) -> Self {
        Self {
            phase: TimerPhase::Running,
            remaining_seconds,
        }
    }

    /// Create a finished timer state
    pub fn finished() -> Self {
        Self {
            phase: TimerPhase::Finished,
            remaining_seconds: 0,
        }
    }

    /// Check if the timer is counting down
    pub fn is_running(&self) -> bool {
        self.phase == TimerPhase::Running
    }

    /// Check if the timer reached zero
    pub fn is_finished(&self) -> bool {
        self.phase == TimerPhase::Finished
    }
}
