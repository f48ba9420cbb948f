//! Candidate study-slot generation over the planning horizon.
//!
//! Produces the ordered grid of slot-start times the allocator walks. The
//! sequence is lazy, finite, and stateless — callers may restart or iterate
//! it concurrently without interference.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime, Timelike};

/// Iterate the study-slot start times for `days` consecutive days beginning
/// at `start_day`.
///
/// Each day contributes one slot every `block_minutes` starting at
/// `window_start_hour:00`, for as long as the slot's start hour stays below
/// `window_end_hour`. Slots are emitted in strictly ascending order; a day
/// whose window is empty (start at or past the end hour) contributes nothing.
pub fn study_slots(
    start_day: NaiveDate,
    days: u32,
    window_start_hour: u32,
    window_end_hour: u32,
    block_minutes: i64,
) -> impl Iterator<Item = NaiveDateTime> {
    let step = Duration::minutes(block_minutes.max(1));
    let open = NaiveTime::from_hms_opt(window_start_hour.min(23), 0, 0).unwrap_or(NaiveTime::MIN);

    (0..i64::from(days)).flat_map(move |d| {
        let day = start_day + Duration::days(d);
        std::iter::successors(Some(day.and_time(open)), move |slot| Some(*slot + step))
            .take_while(move |slot| slot.date() == day && slot.hour() < window_end_hour)
    })
}
