//! Scheduling parameters and their defaults.
//!
//! Everything the allocator needs is an explicit field here; nothing is read
//! from ambient state. The defaults mirror a typical evening-study setup:
//! a week-long horizon with a 19:00–23:00 window carved into 30-minute blocks.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Default planning horizon, in days.
pub const DEFAULT_HORIZON_DAYS: u32 = 7;
/// Default first schedulable hour of each day.
pub const DEFAULT_WINDOW_START_HOUR: u32 = 19;
/// Default end hour of each day's window (exclusive).
pub const DEFAULT_WINDOW_END_HOUR: u32 = 23;
/// Slot granularity: the length of one committed study block, in minutes.
pub const BLOCK_MINUTES: i64 = 30;
/// Substitute duration for tasks whose estimate is missing or non-positive.
pub const DEFAULT_TASK_MINUTES: i64 = 120;

/// Parameters for one allocation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleConfig {
    /// First day of the horizon. `None` means "today"; an explicit date in
    /// the past is clamped forward to today.
    pub start_date: Option<NaiveDate>,
    /// How many days to plan, starting at the effective start date.
    pub horizon_days: u32,
    /// First schedulable hour of each day (0–23).
    pub window_start_hour: u32,
    /// End hour of each day's window, exclusive (0–23).
    pub window_end_hour: u32,
    /// Optional ceiling on flexible-task minutes per day. Fixed events do
    /// not count against it.
    pub max_minutes_per_day: Option<i64>,
    /// Length of one study block in minutes. Fixed per deployment; the
    /// interactive surfaces never expose it.
    pub block_minutes: i64,
    /// When set, exam-flagged tasks are deferred toward their deadline.
    pub cram: bool,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            start_date: None,
            horizon_days: DEFAULT_HORIZON_DAYS,
            window_start_hour: DEFAULT_WINDOW_START_HOUR,
            window_end_hour: DEFAULT_WINDOW_END_HOUR,
            max_minutes_per_day: None,
            block_minutes: BLOCK_MINUTES,
            cram: false,
        }
    }
}

impl ScheduleConfig {
    /// The daily window with the degenerate case repaired: an end hour at or
    /// before the start hour becomes a one-hour window, capped at 23.
    pub fn normalized_window(&self) -> (u32, u32) {
        let start = self.window_start_hour.min(23);
        if self.window_end_hour <= start {
            (start, (start + 1).min(23))
        } else {
            (start, self.window_end_hour.min(24))
        }
    }

    /// The first day of the horizon, never earlier than `today`.
    pub fn effective_start(&self, today: NaiveDate) -> NaiveDate {
        match self.start_date {
            Some(d) => d.max(today),
            None => today,
        }
    }

    /// Minutes the daily window spans end to end.
    pub fn window_minutes(&self) -> i64 {
        let (start, end) = self.normalized_window();
        i64::from(end - start) * 60
    }
}
