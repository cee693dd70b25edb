//! Main application state management

use std::{
    sync::Mutex,
    time::{Duration, Instant},
};
use chrono::{DateTime, Utc};
use tracing::info;

use crate::{
    display::DisplayElement,
    page::CountdownPage,
    timer::{CountDownTimer, TimerState},
};

/// Main application state that owns the countdown page
pub struct AppState {
    /// The loaded page (timer, display element, button)
    pub page: CountdownPage<CountDownTimer>,
    /// Server metadata
    pub start_time: Instant,
    pub port: u16,
    pub host: String,
    /// Last action tracking
    pub last_action: Mutex<Option<String>>,
    pub last_action_time: Mutex<Option<DateTime<Utc>>>,
}

impl AppState {
    /// Create a new AppState and load the countdown page
    pub fn new(port: u16, host: String, duration_seconds: u64, granularity: Duration) -> Self {
        let timer = CountDownTimer::with_granularity(duration_seconds, granularity);
        info!("Countdown of {}s ticking every {:?}", duration_seconds, timer.granularity());
        let page = CountdownPage::load(timer, duration_seconds, DisplayElement::default());

        Self {
            page,
            start_time: Instant::now(),
            port,
            host,
            last_action: Mutex::new(None),
            last_action_time: Mutex::new(None),
        }
    }

    /// Click the start button and record the action
    pub fn press_start(&self) -> Result<bool, String> {
        let started = self.page.click();
        if started {
            info!("Start button pressed - countdown running");
        } else {
            info!("Start button pressed - countdown already running");
        }

        let mut last_action = self.last_action.lock()
            .map_err(|e| format!("Failed to lock last action: {}", e))?;
        *last_action = Some("start".to_string());
        drop(last_action);

        let mut last_time = self.last_action_time.lock()
            .map_err(|e| format!("Failed to lock last action time: {}", e))?;
        *last_time = Some(Utc::now());

        Ok(started)
    }

    /// Display element of the page
    pub fn display(&self) -> &DisplayElement {
        self.page.display()
    }

    /// Configured countdown length
    pub fn duration_seconds(&self) -> u64 {
        self.page.timer().duration_seconds()
    }

    /// Current timer state
    pub fn get_timer_state(&self) -> TimerState {
        self.page.timer().state()
    }

    /// Calculate server uptime as a formatted string
    pub fn get_uptime(&self) -> String {
        format_uptime(self.start_time.elapsed())
    }

    /// Get last action information
    pub fn get_last_action(&self) -> (Option<String>, Option<DateTime<Utc>>) {
        let last_action = self.last_action.lock().ok().and_then(|a| a.clone());
        let last_action_time = self.last_action_time.lock().ok().and_then(|t| *t);
        (last_action, last_action_time)
    }
}

fn format_uptime(duration: Duration) -> String {
    let hours = duration.as_secs() / 3600;
    let minutes = (duration.as_secs() % 3600) / 60;
    let seconds = duration.as_secs() % 60;

    if hours > 0 {
        format!("{}h {}m {}s", hours, minutes, seconds)
    } else if minutes > 0 {
        format!("{}m {}s", minutes, seconds)
    } else {
        format!("{}s", seconds)
    }
}
