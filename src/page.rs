//! Page wiring: binds a countdown to the display element and start button

use std::sync::{
    atomic::{AtomicU64, Ordering},
    Arc,
};
use tracing::{debug, info};

use crate::{
    display::{render, DisplayElement},
    timer::Countdown,
};

/// A loaded countdown page
pub struct CountdownPage<T: Countdown> {
    timer: T,
    display: DisplayElement,
    clicks: AtomicU64,
}

impl<T: Countdown> CountdownPage<T> {
    /// Render the initial time, register the tick renderer and expose the button
    pub fn load(timer: T, total_seconds: u64, display: DisplayElement) -> Self {
        let initial = T::parse(total_seconds);
        render(&display, initial.minutes, initial.seconds);

        let tick_display = display.clone();
        timer.on_tick(Arc::new(move |minutes: u64, seconds: u64| {
            render(&tick_display, minutes, seconds);
        }));

        let shown = display.text();
        info!("Page loaded with {}s countdown, showing {}", total_seconds, shown);
        Self {
            timer,
            display,
            clicks: AtomicU64::new(0),
        }
    }

    /// Button click handler. Returns whether the timer started.
    pub fn click(&self) -> bool {
        let click = self.clicks.fetch_add(1, Ordering::SeqCst) + 1;
        let started = self.timer.start();
        debug!("Button click #{} (started: {})", click, started);
        started
    }

    /// Current display text
    pub fn text(&self) -> String {
        self.display.text()
    }

    pub fn display(&self) -> &DisplayElement {
        &self.display
    }

    pub fn timer(&self) -> &T {
        &self.timer
    }

    /// Number of button clicks handled
    pub fn clicks(&self) -> u64 {
        self.clicks.load(Ordering::SeqCst)
    }
}
