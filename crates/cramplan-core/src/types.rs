//! Data model shared by the allocator, the pre-check, and the formatters.
//!
//! All shapes are serde-derived because the upstream producer (a
//! text-understanding service) hands them over as a JSON payload. Timestamps
//! are naive wall-clock datetimes: the whole timetable lives in the user's
//! single local timezone, and the calendar formatter attaches the zone name
//! at the edge.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Priority value assigned to tasks that carry no explicit priority.
/// Anything the user ranks explicitly sits below this, so unranked tasks
/// are always scheduled last among equals.
pub const LOWEST_PRIORITY: u32 = 101;

fn default_priority() -> u32 {
    LOWEST_PRIORITY
}

/// A deadline-bound commitment the allocator may split across study slots.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlexibleTask {
    /// Task title. Also the identity key for per-task reporting.
    pub title: String,
    /// Course or subject name, if the upstream parser recognized one.
    #[serde(default)]
    pub subject: Option<String>,
    /// Exclusive upper bound for placement: no committed block may end
    /// after this instant.
    pub deadline: NaiveDateTime,
    /// Estimated work in minutes. `None` or a non-positive value means the
    /// upstream estimator failed; the allocator substitutes a default.
    #[serde(default)]
    pub estimated_minutes: Option<i64>,
    /// Upstream difficulty score. Carried through for display, never read
    /// by the allocator.
    #[serde(default)]
    pub difficulty: Option<u32>,
    /// Scheduling rank: smaller numbers are placed first.
    #[serde(default = "default_priority")]
    pub priority: u32,
    /// Whether this task is exam review (eligible for cram placement).
    #[serde(default)]
    pub is_exam: bool,
}

impl FlexibleTask {
    /// The estimated duration with the defensive default applied: a missing
    /// or non-positive estimate becomes [`crate::config::DEFAULT_TASK_MINUTES`].
    pub fn normalized_minutes(&self) -> i64 {
        match self.estimated_minutes {
            Some(m) if m > 0 => m,
            _ => crate::config::DEFAULT_TASK_MINUTES,
        }
    }
}

/// An immovable, already-scheduled commitment. Reproduced verbatim in the
/// output and exempt from the daily study cap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FixedEvent {
    pub title: String,
    pub start: NaiveDateTime,
    /// Assumed to be after `start`; the allocator does not validate this.
    pub end: NaiveDateTime,
}

/// A task the user already finished. Present in the payload for the
/// upstream estimator's benefit; the allocator ignores these entirely.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletedTask {
    pub title: String,
    #[serde(default)]
    pub subject: Option<String>,
    /// Minutes actually spent, when the user reported them.
    #[serde(default)]
    pub spent_minutes: Option<i64>,
}

/// Which side of the timetable a committed block came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockKind {
    /// Verbatim copy of a caller-supplied fixed event.
    Fixed,
    /// One grid-sized placement of a flexible task.
    Flexible,
}

/// One atomic unit of the output timetable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommittedBlock {
    pub title: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub kind: BlockKind,
}

impl CommittedBlock {
    /// Block length in whole minutes.
    pub fn minutes(&self) -> i64 {
        (self.end - self.start).num_minutes()
    }
}

/// The structured payload produced by the upstream text-understanding
/// service: what's done, what's pending, and what's immovable.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PlannerInput {
    /// Finished tasks. Deserialized for completeness, never scheduled.
    #[serde(default)]
    pub done: Vec<CompletedTask>,
    /// Pending tasks to place.
    #[serde(default)]
    pub todos: Vec<FlexibleTask>,
    /// Immovable events to plan around.
    #[serde(default)]
    pub fixed_events: Vec<FixedEvent>,
}

impl PlannerInput {
    /// Decode a payload from its JSON wire form.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
