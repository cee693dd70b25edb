//! Countdown Display - A countdown timer wired to a display and a start button
//! 
//! This library provides the countdown engine, the MM:SS display formatter,
//! the page wiring that binds them together, and an HTTP surface for it.

pub mod config;
pub mod display;
pub mod page;
pub mod timer;
pub mod state;
pub mod api;
pub mod tasks;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use display::{format, DisplayElement};
pub use page::CountdownPage;
pub use timer::{Countdown, CountDownTimer, TimeValue};
pub use state::AppState;
pub use api::create_router;
pub use utils::signals::shutdown_signal;
