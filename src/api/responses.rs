//! API response structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::timer::{TimeValue, TimerPhase, TimerState};

/// API response structure for the start button endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse {
    pub status: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub display: String,
    pub timer: TimerState,
}

impl ApiResponse {
    /// Create a new API response
    pub fn new(status: String, message: String, display: String, timer: TimerState) -> Self {
        Self {
            status,
            message,
            timestamp: Utc::now(),
            display,
            timer,
        }
    }

    /// Create a started response
    pub fn started(message: String, display: String, timer: TimerState) -> Self {
        Self::new("started".to_string(), message, display, timer)
    }

    /// Create a response for a click that found the countdown already running
    pub fn running(message: String, display: String, timer: TimerState) -> Self {
        Self::new("running".to_string(), message, display, timer)
    }
}

/// Current display content and the time it represents
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeResponse {
    pub display: String,
    pub minutes: u64,
    pub seconds: u64,
    pub phase: TimerPhase,
    pub remaining_seconds: u64,
}

impl TimeResponse {
    pub fn new(display: String, timer: TimerState) -> Self {
        let value = TimeValue::parse(timer.remaining_seconds);
        Self {
            display,
            minutes: value.minutes,
            seconds: value.seconds,
            phase: timer.phase,
            remaining_seconds: timer.remaining_seconds,
        }
    }
}

/// Status response with timer and server information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    pub timer: TimerState,
    pub display: String,
    pub duration_seconds: u64,
    pub clicks: u64,
    pub uptime: String,
    pub port: u16,
    pub host: String,
    pub last_action: Option<String>,
    pub last_action_time: Option<DateTime<Utc>>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub version: String,
}

impl HealthResponse {
    /// Create a new health response
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
            timestamp: Utc::now(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}
