//! Odd/even override stage
//!
//! "odd days", "even minutes" and the like replace the matching field with a fixed
//! step expression, whatever earlier stages wrote there.

use crate::cron::builder::Field;
use crate::cron::lexing::Token;
use crate::cron::transforms::{Compilation, Runnable};
use tracing::debug;

const PARITY: &[(&str, &str, Field, &str)] = &[
    ("odd", "minute", Field::Minute, "1-59/2"),
    ("even", "minute", Field::Minute, "2-60/2"),
    ("odd", "day", Field::DayOfMonth, "1-31/2"),
    ("even", "day", Field::DayOfMonth, "2-30/2"),
    ("odd", "month", Field::Month, "1-11/2"),
    ("even", "month", Field::Month, "2-12/2"),
];

fn lookup(first: &Token, second: &Token) -> Option<(Field, &'static str)> {
    let (first, second) = (first.as_word()?, second.as_word()?);
    PARITY
        .iter()
        .find(|(parity, unit, _, _)| *parity == first && *unit == second)
        .map(|(_, _, field, value)| (*field, *value))
}

pub struct ParityOverride;

impl ParityOverride {
    pub fn new() -> Self {
        ParityOverride
    }
}

impl Default for ParityOverride {
    fn default() -> Self {
        Self::new()
    }
}

impl Runnable<Compilation, Compilation> for ParityOverride {
    fn run(&self, mut input: Compilation) -> Compilation {
        for i in 1..input.tokens.len() {
            if let Some((field, value)) = lookup(&input.tokens[i - 1], &input.tokens[i]) {
                input.fields.set(field, value);
                input.tokens[i - 1] = Token::Blank;
                input.tokens[i] = Token::Blank;
                debug!(stage = "parity", %field, value);
            }
        }
        input
    }
}
