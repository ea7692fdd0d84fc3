//! Residual time/day stage
//!
//! Whatever the earlier stages left is cut into segments at the context markers. Segments
//! are then tried from last to first:
//!
//! - a clock time ("5:15am", "02:00 +01:00") sets hour and minute, in UTC
//! - digits only ("13", "2  4") becomes the day-of-month list (`13`, `2,4`)
//! - anything else stays and ends up in the unparsed remainder
//!
//! Since segments are tried backwards, the earliest matching segment has the final say.

use crate::cron::builder::Field;
use crate::cron::clock::parse_clock;
use crate::cron::lexing::Token;
use crate::cron::transforms::{Compilation, Runnable};
use chrono::{FixedOffset, Offset, Utc};
use tracing::debug;

/// Text between two markers, with blanks dropped and words joined by single spaces.
fn segments(tokens: &[Token]) -> Vec<String> {
    tokens
        .split(Token::is_marker)
        .map(|run| {
            run.iter()
                .filter_map(Token::as_word)
                .collect::<Vec<_>>()
                .join(" ")
        })
        .filter(|segment| !segment.is_empty())
        .collect()
}

fn is_day_list(segment: &str) -> bool {
    segment.chars().all(|c| c.is_ascii_digit() || c.is_whitespace())
}

pub struct ResidualTimeAndDay {
    default_offset: FixedOffset,
}

impl ResidualTimeAndDay {
    /// Stage reading offset-less clock times as UTC.
    pub fn new() -> Self {
        Self::with_offset(Utc.fix())
    }

    /// Stage reading offset-less clock times in `default_offset`.
    pub fn with_offset(default_offset: FixedOffset) -> Self {
        ResidualTimeAndDay { default_offset }
    }
}

impl Default for ResidualTimeAndDay {
    fn default() -> Self {
        Self::new()
    }
}

impl Runnable<Compilation, Compilation> for ResidualTimeAndDay {
    fn run(&self, mut input: Compilation) -> Compilation {
        let mut remaining = segments(&input.tokens);

        for i in (0..remaining.len()).rev() {
            if let Some(time) = parse_clock(&remaining[i], self.default_offset) {
                input.fields.set(Field::Hour, time.hour.to_string());
                input.fields.set(Field::Minute, time.minute.to_string());
                remaining.remove(i);
            } else if is_day_list(&remaining[i]) {
                let days: Vec<&str> = remaining[i].split_whitespace().collect();
                input.fields.set(Field::DayOfMonth, days.join(","));
                remaining.remove(i);
            }
        }

        input.tokens = remaining
            .iter()
            .flat_map(|segment| segment.split_whitespace())
            .map(Token::word)
            .collect();

        debug!(stage = "residual", fields = ?input.fields, leftover = %input);
        input
    }
}
