//! Frequency ("every") extraction stage
//!
//! Finds the first "every" and reads the run of tokens after it up to the next marker
//! or the next "every", the every-clause. Only the first clause is interpreted.
//!
//! Two-word clauses have fixed meanings:
//!
//! | clause        | minute | hour | day-of-month | month | day-of-week |
//! |---------------|--------|------|--------------|-------|-------------|
//! | every minute  | `*`    |      |              |       |             |
//! | every hour    | `0`    | `*`  |              |       |             |
//! | every day     | `0`    | `0`  | `*`          |       | `*`         |
//! | every month   | `1`    | `1`  | `1`          | `*`   |             |
//! | every year    | `1`    | `1`  | `1`          | `1`   |             |
//!
//! Otherwise the last word of the clause is the unit and the numbers before it are the
//! interval: "every 5 minutes" sets the minute field to `*/5`. Other units, or a
//! non-numeric interval ("every odd minute"), leave the clause to later stages and only
//! "every" is dropped.

use crate::cron::builder::Field;
use crate::cron::transforms::{Compilation, Runnable};
use tracing::debug;

pub const EVERY: &str = "every";

/// Fields written by a fixed two-word clause, keyed by the word after "every".
fn fixed_clause(unit: &str) -> Option<&'static [(Field, &'static str)]> {
    let fields: &'static [(Field, &'static str)] = match unit {
        "minute" => &[(Field::Minute, "*")],
        "hour" => &[(Field::Hour, "*"), (Field::Minute, "0")],
        "day" => &[
            (Field::DayOfMonth, "*"),
            (Field::DayOfWeek, "*"),
            (Field::Hour, "0"),
            (Field::Minute, "0"),
        ],
        "month" => &[
            (Field::Minute, "1"),
            (Field::Hour, "1"),
            (Field::DayOfMonth, "1"),
            (Field::Month, "*"),
        ],
        "year" => &[
            (Field::Minute, "1"),
            (Field::Hour, "1"),
            (Field::Month, "1"),
            (Field::DayOfMonth, "1"),
        ],
        _ => return None,
    };
    Some(fields)
}

/// Field a step interval applies to, keyed by unit word.
fn step_field(unit: &str) -> Option<Field> {
    match unit {
        "minute" => Some(Field::Minute),
        "hour" => Some(Field::Hour),
        "day" => Some(Field::DayOfMonth),
        "month" => Some(Field::Month),
        _ => None,
    }
}

pub struct FrequencyExtraction;

impl FrequencyExtraction {
    pub fn new() -> Self {
        FrequencyExtraction
    }

    /// Interpret the clause `tokens[start..start + len]`, which begins with "every".
    /// Returns how many tokens were consumed, or `None` if the clause was not understood.
    fn interpret(compilation: &mut Compilation, start: usize, len: usize) -> Option<usize> {
        let next = compilation.tokens[start + 1].as_word();
        if let Some(fields) = next.and_then(fixed_clause) {
            for (field, value) in fields {
                compilation.fields.set(*field, *value);
            }
            return Some(2);
        }

        let mut words: Vec<&str> = compilation.tokens[start + 1..start + len]
            .iter()
            .filter_map(|t| t.as_word())
            .collect();
        let unit = words.pop()?;
        let field = step_field(unit)?;
        let numeric = |w: &&str| w.chars().all(|c| c.is_ascii_digit());
        if words.is_empty() || !words.iter().all(numeric) {
            return None;
        }

        let step = format!("*/{}", words.join(","));
        if field == Field::Hour {
            compilation.fields.set(Field::Minute, "0");
        }
        compilation.fields.set(field, step);
        Some(len)
    }
}

impl Default for FrequencyExtraction {
    fn default() -> Self {
        Self::new()
    }
}

impl Runnable<Compilation, Compilation> for FrequencyExtraction {
    fn run(&self, mut input: Compilation) -> Compilation {
        let Some(start) = input.find(EVERY) else {
            return input;
        };

        let len = 1 + input.tokens[start + 1..]
            .iter()
            .take_while(|t| !t.is_marker() && !t.is(EVERY))
            .count();
        if len < 2 {
            debug!(stage = "frequency", "every without a clause");
            return input;
        }

        match Self::interpret(&mut input, start, len) {
            Some(consumed) => {
                input.tokens.drain(start..start + consumed);
                debug!(stage = "frequency", consumed, fields = ?input.fields);
            }
            None => {
                input.tokens.remove(start);
                debug!(stage = "frequency", "clause left for later stages");
            }
        }

        input
    }
}
