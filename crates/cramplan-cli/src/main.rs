//! `cramplan` CLI — plan a study timetable from a structured payload and
//! export it as `.ics`.
//!
//! The payload is the JSON the upstream text-understanding service emits:
//! `{"done": [...], "todos": [...], "fixed_events": [...]}`.
//!
//! ## Usage
//!
//! ```sh
//! # Plan with defaults (7 days, 19:00–23:00 window), table on stdout
//! cramplan plan -i payload.json
//!
//! # Pipe via stdin, cap study time at 4 hours/day, cram exam review
//! cat payload.json | cramplan plan --max-hours-per-day 4 --cram
//!
//! # Write the combined calendar file
//! cramplan plan -i payload.json --ics study_schedule_all.ics
//!
//! # Write fixed_events.ics + tasks_events.ics for two-color import
//! cramplan plan -i payload.json --split-ics out/
//!
//! # Check the fixed events for overlaps before planning
//! cramplan check -i payload.json
//! ```

use std::io::{self, Read};
use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate, NaiveDateTime};
use clap::{Parser, Subcommand};
use cramplan_core::config::{DEFAULT_HORIZON_DAYS, DEFAULT_WINDOW_END_HOUR, DEFAULT_WINDOW_START_HOUR};
use cramplan_core::report::{overdue_tasks, shortfalls};
use cramplan_core::types::{BlockKind, CommittedBlock};
use cramplan_core::{allocate, find_fixed_overlaps, PlannerInput, ScheduleConfig};

#[derive(Parser)]
#[command(name = "cramplan", version, about = "Deadline-driven study timetable planner")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Allocate study blocks and print the timetable
    Plan {
        /// Input payload file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Planning horizon in days
        #[arg(long, default_value_t = DEFAULT_HORIZON_DAYS)]
        days: u32,
        /// First day of the horizon (YYYY-MM-DD, defaults to today; past
        /// dates are clamped to today)
        #[arg(long)]
        start_date: Option<NaiveDate>,
        /// Cap on study hours per day (fixed events don't count)
        #[arg(long)]
        max_hours_per_day: Option<u32>,
        /// First schedulable hour of each day (0-23)
        #[arg(long, default_value_t = DEFAULT_WINDOW_START_HOUR)]
        window_start: u32,
        /// End hour of each day's window, exclusive (0-23)
        #[arg(long, default_value_t = DEFAULT_WINDOW_END_HOUR)]
        window_end: u32,
        /// Pack exam review into the slots nearest each exam
        #[arg(long)]
        cram: bool,
        /// Also write the combined timetable to this .ics file
        #[arg(long)]
        ics: Option<PathBuf>,
        /// Also write fixed_events.ics and tasks_events.ics into this directory
        #[arg(long)]
        split_ics: Option<PathBuf>,
    },
    /// Report overlapping fixed events in a payload
    Check {
        /// Input payload file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Plan {
            input,
            days,
            start_date,
            max_hours_per_day,
            window_start,
            window_end,
            cram,
            ics,
            split_ics,
        } => {
            let payload = read_payload(input.as_deref())?;
            let config = ScheduleConfig {
                start_date,
                horizon_days: days,
                window_start_hour: window_start,
                window_end_hour: window_end,
                max_minutes_per_day: max_hours_per_day.map(|h| i64::from(h) * 60),
                cram,
                ..Default::default()
            };

            let now = Local::now().naive_local();
            let blocks = allocate(&payload.todos, &payload.fixed_events, &config, now);

            print_plan(&payload, &blocks, now);

            if let Some(path) = ics {
                let rendered = cramplan_ics::schedule_to_ics(&blocks);
                std::fs::write(&path, rendered)
                    .with_context(|| format!("Failed to write {}", path.display()))?;
                println!("\nWrote {}", path.display());
            }
            if let Some(dir) = split_ics {
                std::fs::create_dir_all(&dir)
                    .with_context(|| format!("Failed to create {}", dir.display()))?;
                let (fixed_ics, tasks_ics) = cramplan_ics::split_schedule_to_ics(&blocks);
                let fixed_path = dir.join("fixed_events.ics");
                let tasks_path = dir.join("tasks_events.ics");
                std::fs::write(&fixed_path, fixed_ics)
                    .with_context(|| format!("Failed to write {}", fixed_path.display()))?;
                std::fs::write(&tasks_path, tasks_ics)
                    .with_context(|| format!("Failed to write {}", tasks_path.display()))?;
                println!("\nWrote {} and {}", fixed_path.display(), tasks_path.display());
            }
        }
        Commands::Check { input } => {
            let payload = read_payload(input.as_deref())?;
            let overlaps = find_fixed_overlaps(&payload.fixed_events);

            if overlaps.is_empty() {
                println!(
                    "No overlaps among {} fixed event(s).",
                    payload.fixed_events.len()
                );
            } else {
                println!("Found {} overlapping pair(s):", overlaps.len());
                for o in &overlaps {
                    println!(
                        "  {} ({} - {}) overlaps {} ({} - {}) by {} min",
                        o.first.title,
                        o.first.start.format("%Y-%m-%d %H:%M"),
                        o.first.end.format("%H:%M"),
                        o.second.title,
                        o.second.start.format("%Y-%m-%d %H:%M"),
                        o.second.end.format("%H:%M"),
                        o.overlap_minutes,
                    );
                }
                process::exit(1);
            }
        }
    }

    Ok(())
}

/// Read and decode the payload from a file or stdin.
fn read_payload(input: Option<&str>) -> Result<PlannerInput> {
    let json = match input {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read input file: {}", path))?,
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            buf
        }
    };
    PlannerInput::from_json(&json).context("Failed to decode planner payload")
}

/// Render the timetable plus the overdue and shortfall reports.
fn print_plan(payload: &PlannerInput, blocks: &[CommittedBlock], now: NaiveDateTime) {
    let overdue = overdue_tasks(&payload.todos, now);
    if !overdue.is_empty() {
        println!("Overdue (not scheduled):");
        for t in &overdue {
            println!(
                "  {}  (due {}, est {} min)",
                t.title,
                t.deadline.format("%Y-%m-%d %H:%M"),
                t.estimated_minutes,
            );
        }
        println!();
    }

    if blocks.is_empty() {
        println!("Nothing to schedule.");
    } else {
        let width = blocks.iter().map(|b| b.title.chars().count()).max().unwrap_or(5).max(5);
        println!("{:<width$}  {:<16}  {:<5}  kind", "title", "start", "end");
        for b in blocks {
            let kind = match b.kind {
                BlockKind::Fixed => "fixed",
                BlockKind::Flexible => "task",
            };
            println!(
                "{:<width$}  {}  {}  {}",
                b.title,
                b.start.format("%Y-%m-%d %H:%M"),
                b.end.format("%H:%M"),
                kind,
            );
        }
    }

    let short = shortfalls(&payload.todos, blocks, now);
    if !short.is_empty() {
        println!("\nNot fully scheduled:");
        for s in &short {
            println!(
                "  {}  (due {}, placed {}/{} min, missing {})",
                s.title,
                s.deadline.format("%Y-%m-%d %H:%M"),
                s.committed_minutes,
                s.estimated_minutes,
                s.missing_minutes,
            );
        }
    }
}
