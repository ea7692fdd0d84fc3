//! Assembly stage
//!
//! Closes the compilation: unset fields become `*`, leftover words are joined into the
//! unparsed remainder, and the accumulator is frozen into a [Schedule].

use crate::cron::schedule::Schedule;
use crate::cron::transforms::{Compilation, Runnable};
use tracing::debug;

/// Assembly stage
///
/// # Input
/// - `Compilation` - state after every field stage has run
///
/// # Output
/// - `Schedule` - the immutable result
pub struct Assembly;

impl Assembly {
    pub fn new() -> Self {
        Assembly
    }
}

impl Default for Assembly {
    fn default() -> Self {
        Self::new()
    }
}

impl Runnable<Compilation, Schedule> for Assembly {
    fn run(&self, input: Compilation) -> Schedule {
        let unparsed = input.words().collect::<Vec<_>>().join(" ");
        let schedule = input.fields.build(unparsed);
        debug!(stage = "assembly", expression = %schedule, unparsed = schedule.unparsed());
        schedule
    }
}
