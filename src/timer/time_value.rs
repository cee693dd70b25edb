//! Minutes/seconds split of a remaining-seconds count

use serde::{Deserialize, Serialize};

/// Remaining time as whole minutes and seconds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeValue {
    pub minutes: u64,
    /// Always in `0..=59`
    pub seconds: u64,
}

impl TimeValue {
    /// Split a total-seconds count into minutes and seconds
    pub fn parse(total_seconds: u64) -> Self {
        Self {
            minutes: total_seconds / 60,
            seconds: total_seconds % 60,
        }
    }
}
