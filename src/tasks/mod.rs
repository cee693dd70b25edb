//! Background tasks module
//! 
//! This module contains background tasks that run alongside the HTTP server.

pub mod display_mirror;

// Re-export main functions
pub use display_mirror::display_mirror_task;
