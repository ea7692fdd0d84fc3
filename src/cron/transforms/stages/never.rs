//! Never override stage
//!
//! "never" anywhere in the phrase cancels the whole schedule: the result is
//! `0 0 31 2 0`, which no real date matches (there is no 31st of February).
//!
//! The field accumulator is disabled rather than overwritten, so the residual stage
//! still consumes its segments but cannot bring a time or day back.

use crate::cron::transforms::{Compilation, Runnable};
use tracing::debug;

pub const NEVER: &str = "never";

pub struct NeverOverride;

impl NeverOverride {
    pub fn new() -> Self {
        NeverOverride
    }
}

impl Default for NeverOverride {
    fn default() -> Self {
        Self::new()
    }
}

impl Runnable<Compilation, Compilation> for NeverOverride {
    fn run(&self, mut input: Compilation) -> Compilation {
        if input.find(NEVER).is_none() {
            return input;
        }

        input.fields.disable();
        input.tokens.retain(|t| !t.is(NEVER));

        debug!(stage = "never", "schedule disabled");
        input
    }
}
