//! # cramplan-core
//!
//! Deterministic study-timetable allocation. Takes a set of deadline-bound
//! tasks and immovable calendar events, and packs the tasks into a
//! non-overlapping grid of fixed-length study blocks inside a bounded
//! planning horizon.
//!
//! The allocator is a single greedy pass: it never backtracks, never errors
//! on well-typed input, holds no state between calls, and performs no I/O.
//! All clock reads are injected, so identical inputs always produce an
//! identical block list.
//!
//! ## Modules
//!
//! - [`types`] — task/event/block data model and the input payload shape
//! - [`config`] — scheduling parameters and their defaults
//! - [`slots`] — candidate study-slot generator over the planning horizon
//! - [`allocate`] — the allocation engine itself
//! - [`precheck`] — fixed-event overlap detection, run before allocation
//! - [`report`] — overdue and under-scheduled task reporting over a result
//! - [`error`] — error types

pub mod allocate;
pub mod config;
pub mod error;
pub mod precheck;
pub mod report;
pub mod slots;
pub mod types;

pub use allocate::allocate;
pub use config::ScheduleConfig;
pub use error::PlanError;
pub use precheck::find_fixed_overlaps;
pub use report::{overdue_tasks, shortfalls};
pub use slots::study_slots;
pub use types::{BlockKind, CommittedBlock, FixedEvent, FlexibleTask, PlannerInput};
