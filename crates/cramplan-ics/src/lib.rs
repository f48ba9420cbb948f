//! # cramplan-ics
//!
//! iCalendar rendering for committed timetables. The wire format is frozen:
//! importers already filter on the `CATEGORIES` values and match the
//! `PRODID`/UID shapes below, so every byte here is contract, not styling.
//!
//! Two modes:
//! - [`schedule_to_ics`] — one envelope holding the whole timetable.
//! - [`split_schedule_to_ics`] — two independent envelopes (fixed events,
//!   study blocks) so Google Calendar can import them as two differently
//!   colored calendars.
//!
//! Block timestamps are wall-clock local times; the envelope pins them to
//! [`CAL_TZ`] via `TZID`. The `DTSTAMP` generation time is UTC and shared by
//! every entry in an envelope.

use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use cramplan_core::types::{BlockKind, CommittedBlock};

/// The single named timezone all exported timetables live in.
pub const CAL_TZ: Tz = chrono_tz::Asia::Taipei;

/// Frozen product identifier; importers key on it.
const PRODID: &str = "-//HW Scheduler//TW//";

/// Domain suffix of every event UID.
const UID_DOMAIN: &str = "hwscheduler";

const LOCAL_FMT: &str = "%Y%m%dT%H%M%S";
const STAMP_FMT: &str = "%Y%m%dT%H%M%SZ";

/// Render the full timetable as one `.ics` envelope, stamped with the
/// current UTC time.
pub fn schedule_to_ics(blocks: &[CommittedBlock]) -> String {
    schedule_to_ics_at(blocks, Utc::now())
}

/// Render the full timetable as one `.ics` envelope with an explicit
/// generation timestamp. Exposed so tests (and reproducible exports) can pin
/// `DTSTAMP`.
pub fn schedule_to_ics_at(blocks: &[CommittedBlock], generated_at: DateTime<Utc>) -> String {
    let mut lines = vec![
        "BEGIN:VCALENDAR".to_string(),
        "VERSION:2.0".to_string(),
        format!("PRODID:{}", PRODID),
        "CALSCALE:GREGORIAN".to_string(),
        "METHOD:PUBLISH".to_string(),
    ];

    let dtstamp = generated_at.format(STAMP_FMT).to_string();

    for (idx, b) in blocks.iter().enumerate() {
        let start_local = b.start.format(LOCAL_FMT);
        let (description, categories) = match b.kind {
            BlockKind::Fixed => ("固定行程", "Fixed"),
            BlockKind::Flexible => ("作業/複習", "Task"),
        };

        lines.extend([
            "BEGIN:VEVENT".to_string(),
            format!("UID:{}-{}@{}", idx, start_local, UID_DOMAIN),
            format!("DTSTAMP:{}", dtstamp),
            format!("DTSTART;TZID={}:{}", CAL_TZ.name(), start_local),
            format!("DTEND;TZID={}:{}", CAL_TZ.name(), b.end.format(LOCAL_FMT)),
            format!("SUMMARY:{}", b.title),
            format!("DESCRIPTION:{}", description),
            format!("CATEGORIES:{}", categories),
            "END:VEVENT".to_string(),
        ]);
    }

    lines.push("END:VCALENDAR".to_string());
    lines.join("\r\n")
}

/// Split the timetable into two independent envelopes: `(fixed, flexible)`.
///
/// Each envelope is complete on its own — header, entries, footer — with
/// entry indices restarting from zero, so the two files import cleanly into
/// separate calendars.
pub fn split_schedule_to_ics(blocks: &[CommittedBlock]) -> (String, String) {
    split_schedule_to_ics_at(blocks, Utc::now())
}

/// [`split_schedule_to_ics`] with an explicit generation timestamp.
pub fn split_schedule_to_ics_at(
    blocks: &[CommittedBlock],
    generated_at: DateTime<Utc>,
) -> (String, String) {
    let fixed: Vec<CommittedBlock> = blocks
        .iter()
        .filter(|b| b.kind == BlockKind::Fixed)
        .cloned()
        .collect();
    let flexible: Vec<CommittedBlock> = blocks
        .iter()
        .filter(|b| b.kind == BlockKind::Flexible)
        .cloned()
        .collect();

    (
        schedule_to_ics_at(&fixed, generated_at),
        schedule_to_ics_at(&flexible, generated_at),
    )
}
