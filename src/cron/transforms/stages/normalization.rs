//! Normalization stage
//!
//! Cleans up the raw phrase. See [normalize](crate::cron::lexing::normalize) for the rules.

use crate::cron::lexing::normalize;
use crate::cron::transforms::Runnable;
use tracing::trace;

/// Normalization stage
///
/// # Input
/// - `String` - the raw phrase
///
/// # Output
/// - `String` - lowercased phrase with punctuation stripped and macros expanded
pub struct Normalization;

impl Normalization {
    pub fn new() -> Self {
        Normalization
    }
}

impl Default for Normalization {
    fn default() -> Self {
        Self::new()
    }
}

impl Runnable<String, String> for Normalization {
    fn run(&self, input: String) -> String {
        let normalized = normalize(&input);
        trace!(stage = "normalization", phrase = %input, normalized = %normalized);
        normalized
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalization_expands_macros() {
        let stage = Normalization::new();
        assert_eq!(stage.run("Daily at 02:00 UTC".to_string()), "every day at 02:00 utc");
    }

    #[test]
    fn test_normalization_of_blank_phrase() {
        let stage = Normalization::new();
        assert_eq!(stage.run(String::new()), "never");
    }
}
