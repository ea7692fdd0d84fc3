//! Tokenization stage
//!
//! Splits normalized text into words and resolves each one through the synonym table,
//! opening the [Compilation] the field stages work on.

use crate::cron::lexing::tokenize;
use crate::cron::transforms::{Compilation, Runnable};
use tracing::trace;

/// Tokenization stage
///
/// # Input
/// - `String` - normalized phrase
///
/// # Output
/// - `Compilation` - resolved tokens and an empty field accumulator
pub struct Tokenization;

impl Tokenization {
    pub fn new() -> Self {
        Tokenization
    }
}

impl Default for Tokenization {
    fn default() -> Self {
        Self::new()
    }
}

impl Runnable<String, Compilation> for Tokenization {
    fn run(&self, input: String) -> Compilation {
        let compilation = Compilation::new(tokenize(&input));
        trace!(stage = "tokenization", tokens = %compilation);
        compilation
    }
}
