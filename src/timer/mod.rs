//! Countdown timer module
//! 
//! This module contains the countdown engine that drives the display, along
//! with the time value and timer state types it publishes.

pub mod countdown;
pub mod time_value;
pub mod timer_state;

// Re-export main types
pub use countdown::{Countdown, CountDownTimer, TickFn, MIN_GRANULARITY};
pub use time_value::TimeValue;
pub use timer_state::{TimerPhase, TimerState};
