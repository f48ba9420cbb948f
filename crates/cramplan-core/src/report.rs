//! Post-allocation reporting: the conditions the engine deliberately stays
//! silent about.
//!
//! The allocator skips overdue tasks and quietly places less than a task
//! asked for when capacity runs out. The front-end surfaces both by
//! comparing the requested task list against the committed blocks, which is
//! what these helpers compute.

use std::collections::HashMap;

use chrono::NaiveDateTime;

use crate::types::{BlockKind, CommittedBlock, FlexibleTask};

/// A task whose deadline had already passed at allocation time.
#[derive(Debug, Clone, PartialEq)]
pub struct OverdueTask {
    pub title: String,
    pub subject: Option<String>,
    pub deadline: NaiveDateTime,
    pub estimated_minutes: i64,
}

/// A live task that received fewer minutes than it asked for.
#[derive(Debug, Clone, PartialEq)]
pub struct Shortfall {
    pub title: String,
    pub subject: Option<String>,
    pub deadline: NaiveDateTime,
    pub estimated_minutes: i64,
    pub committed_minutes: i64,
    pub missing_minutes: i64,
}

/// Tasks that were overdue at `now` and therefore received no blocks.
pub fn overdue_tasks(todos: &[FlexibleTask], now: NaiveDateTime) -> Vec<OverdueTask> {
    todos
        .iter()
        .filter(|t| t.deadline <= now)
        .map(|t| OverdueTask {
            title: t.title.clone(),
            subject: t.subject.clone(),
            deadline: t.deadline,
            estimated_minutes: t.normalized_minutes(),
        })
        .collect()
}

/// Sum of committed flexible minutes per task title. Fixed blocks are
/// excluded; they are not task time.
pub fn committed_minutes_by_title(blocks: &[CommittedBlock]) -> HashMap<String, i64> {
    let mut minutes: HashMap<String, i64> = HashMap::new();
    for b in blocks {
        if b.kind != BlockKind::Flexible {
            continue;
        }
        *minutes.entry(b.title.clone()).or_insert(0) += b.minutes();
    }
    minutes
}

/// Live tasks whose committed minutes fall short of their estimate, in input
/// order. Overdue tasks are excluded — they belong in [`overdue_tasks`].
pub fn shortfalls(
    todos: &[FlexibleTask],
    blocks: &[CommittedBlock],
    now: NaiveDateTime,
) -> Vec<Shortfall> {
    let committed = committed_minutes_by_title(blocks);

    todos
        .iter()
        .filter(|t| t.deadline > now)
        .filter_map(|t| {
            let estimated = t.normalized_minutes();
            let got = committed.get(&t.title).copied().unwrap_or(0);
            (got < estimated).then(|| Shortfall {
                title: t.title.clone(),
                subject: t.subject.clone(),
                deadline: t.deadline,
                estimated_minutes: estimated,
                committed_minutes: got,
                missing_minutes: estimated - got,
            })
        })
        .collect()
}
