//! The allocation engine: greedy placement of flexible tasks into the study
//! grid, around immovable events.
//!
//! One synchronous pass, no backtracking. Tasks are taken in priority order
//! (deadline breaks ties) and each walks the slot grid from the front,
//! committing one block-sized placement per free slot until its estimate is
//! covered or its deadline cuts it off. Fixed events are seeded into the
//! result first and are never re-timed or split.
//!
//! The engine raises no errors: invalid durations and windows are repaired
//! silently, overdue tasks are skipped silently, and capacity shortfalls are
//! left for [`crate::report`] to surface.

use std::collections::HashMap;

use chrono::{Duration, NaiveDate, NaiveDateTime, Timelike};

use crate::config::ScheduleConfig;
use crate::slots::study_slots;
use crate::types::{BlockKind, CommittedBlock, FixedEvent, FlexibleTask};

/// Allocate study blocks for `todos` around `fixed_events`.
///
/// `now` is the caller's clock reading, captured once so overdue filtering is
/// consistent across the whole pass. Tasks whose deadline is at or before
/// `now` receive no blocks.
///
/// The returned list contains every fixed event verbatim plus zero or more
/// block-sized placements per task, sorted by start time. It is guaranteed
/// non-overlapping provided the fixed events themselves do not overlap
/// (see [`crate::precheck::find_fixed_overlaps`]).
pub fn allocate(
    todos: &[FlexibleTask],
    fixed_events: &[FixedEvent],
    config: &ScheduleConfig,
    now: NaiveDateTime,
) -> Vec<CommittedBlock> {
    let start_day = config.effective_start(now.date());
    let (window_start, window_end) = config.normalized_window();
    let block_minutes = config.block_minutes.max(1);
    let block_len = Duration::minutes(block_minutes);

    // Fixed events enter the timetable first, untouched.
    let mut blocks: Vec<CommittedBlock> = fixed_events
        .iter()
        .map(|e| CommittedBlock {
            title: e.title.clone(),
            start: e.start,
            end: e.end,
            kind: BlockKind::Fixed,
        })
        .collect();

    // Priority ascending, earlier deadline first among equals.
    let mut order: Vec<&FlexibleTask> = todos.iter().collect();
    order.sort_by(|a, b| a.priority.cmp(&b.priority).then(a.deadline.cmp(&b.deadline)));

    // Flexible minutes already committed per calendar day. Fixed events are
    // exempt from the daily cap and never enter this map.
    let mut day_minutes: HashMap<NaiveDate, i64> = HashMap::new();

    for task in order {
        if task.deadline <= now {
            // Overdue. Not an error here; reported by a collaborator.
            continue;
        }
        let mut remaining = task.normalized_minutes();

        for slot in study_slots(
            start_day,
            config.horizon_days,
            window_start,
            window_end,
            block_minutes,
        ) {
            if remaining < block_minutes {
                // A further placement would overshoot the estimate.
                break;
            }
            let slot_end = slot + block_len;
            // Slot ends ascend with slot starts, so the first placement that
            // would outrun the deadline ends the scan for this task.
            if slot_end > task.deadline {
                break;
            }

            if config.cram
                && task.is_exam
                && defers_toward_deadline(
                    &blocks,
                    slot,
                    task.deadline,
                    remaining,
                    config.max_minutes_per_day.unwrap_or_else(|| config.window_minutes()),
                    window_start,
                    window_end,
                    block_minutes,
                )
            {
                continue;
            }

            if let Some(cap) = config.max_minutes_per_day {
                let used = day_minutes.get(&slot.date()).copied().unwrap_or(0);
                if used + block_minutes > cap {
                    // This day is full; later days may still have room.
                    continue;
                }
            }

            if !is_free(&blocks, slot, slot_end) {
                continue;
            }

            blocks.push(CommittedBlock {
                title: task.title.clone(),
                start: slot,
                end: slot_end,
                kind: BlockKind::Flexible,
            });
            remaining -= block_minutes;
            *day_minutes.entry(slot.date()).or_insert(0) += block_minutes;
        }
    }

    blocks.sort_by_key(|b| b.start);
    blocks
}

/// Whether `[start, end)` is clear of every block committed so far.
fn is_free(blocks: &[CommittedBlock], start: NaiveDateTime, end: NaiveDateTime) -> bool {
    !blocks.iter().any(|b| start < b.end && b.start < end)
}

/// Cram-mode deferral: skip this slot when the free study capacity left
/// between `slot` and `deadline` still exceeds the task's remaining minutes,
/// so review lands as close to the exam as the grid allows.
///
/// The estimate sums `day_capacity` over the full days strictly between the
/// slot and the deadline, adds the partial windows on both boundary days,
/// then subtracts one block for every already-occupied slot in the span.
/// When slot and deadline share a day the "days between" term is -1, which
/// cancels the double-counted boundary windows; it must stay signed. Days
/// remaining are computed on full dates, so spans across month boundaries
/// count correctly. This is a pressure heuristic, not a packing proof:
/// equality commits, only a strict surplus defers.
#[allow(clippy::too_many_arguments)]
fn defers_toward_deadline(
    blocks: &[CommittedBlock],
    slot: NaiveDateTime,
    deadline: NaiveDateTime,
    remaining: i64,
    day_capacity: i64,
    window_start: u32,
    window_end: u32,
    block_minutes: i64,
) -> bool {
    let full_days_between = (deadline.date() - slot.date()).num_days() - 1;
    let mut capacity = full_days_between * day_capacity;
    // Rest of the slot's own day, from this slot to the window close. Minute
    // precision matters: truncating to the slot's hour overstates capacity
    // by a partial block at :30 slots, which defers a slot that is actually
    // needed and leaves a hole on the deadline day.
    let slot_minute = i64::from(slot.hour()) * 60 + i64::from(slot.minute());
    capacity += (i64::from(window_end) * 60 - slot_minute).max(0);
    // Deadline day, from the window open up to the deadline itself.
    let deadline_minute = i64::from(deadline.hour()) * 60 + i64::from(deadline.minute());
    capacity += (deadline_minute - i64::from(window_start) * 60).max(0);

    let span_days = ((deadline.date() - slot.date()).num_days() + 1).clamp(1, i64::from(u32::MAX));
    let block_len = Duration::minutes(block_minutes);
    for s in study_slots(
        slot.date(),
        span_days as u32,
        window_start,
        window_end,
        block_minutes,
    ) {
        if s < slot {
            continue;
        }
        if s >= deadline {
            break;
        }
        if !is_free(blocks, s, s + block_len) {
            capacity -= block_minutes;
        }
    }

    capacity > remaining
}
