//! # cronphrase
//!
//! Compiles English recurrence phrases ("every 5 minutes", "at 5:15am on 13 June",
//! "never") into the five-field cron expression used by job schedulers.
//!
//! ```ignore
//! let schedule = cronphrase::compile("Every Hour Mondays to Fridays");
//! assert_eq!(schedule.to_string(), "0 * * * 1-5");
//! assert!(schedule.is_fully_parsed());
//! ```
//!
//! The compiler never fails. Words it cannot place are collected into
//! [`Schedule::unparsed`](cron::Schedule::unparsed) so callers can decide whether a
//! partial interpretation is good enough.
//!
//! See the [cron module](cron) for the layout of the compilation pipeline.

pub mod cron;

pub use cron::compiler::{compile, CompileOptions, Compiler};
pub use cron::error::{CronError, Result};
pub use cron::schedule::Schedule;
