//! Marker disambiguation stage
//!
//! Phrases are a "when" clause and a "what" clause in either order, and the word "from"
//! can introduce either: "from January to August" is a date range, "from 10am to 11am"
//! a time range. This stage settles which clause is which:
//!
//! - The first "from" becomes a date marker when a time marker is already present,
//!   otherwise a time marker.
//! - If the phrase does not start with a marker and exactly one kind of marker is
//!   present, a marker of the other kind is inserted at the front, since the bare
//!   leading clause must be the other category.

use crate::cron::lexing::{Marker, Token};
use crate::cron::transforms::{Compilation, Runnable};
use tracing::debug;

pub struct MarkerDisambiguation;

impl MarkerDisambiguation {
    pub fn new() -> Self {
        MarkerDisambiguation
    }
}

impl Default for MarkerDisambiguation {
    fn default() -> Self {
        Self::new()
    }
}

impl Runnable<Compilation, Compilation> for MarkerDisambiguation {
    fn run(&self, mut input: Compilation) -> Compilation {
        let time = Token::Marker(Marker::Time);
        let date = Token::Marker(Marker::Date);

        if let Some(from) = input.find("from") {
            input.tokens[from] = if input.contains(&time) {
                date.clone()
            } else {
                time.clone()
            };
        }

        let leading = match input.tokens.first() {
            Some(first) if !first.is_marker() => {
                match (input.contains(&time), input.contains(&date)) {
                    (true, false) => Some(date),
                    (false, true) => Some(time),
                    _ => None,
                }
            }
            _ => None,
        };

        if let Some(marker) = leading {
            input.tokens.insert(0, marker);
        }

        debug!(stage = "markers", tokens = %input);
        input
    }
}
