//! Character cleanup and phrase macros
//!
//! Runs on the raw phrase before it is split into words:
//!
//! - lowercase and trim; a blank phrase means "never"
//! - hyphens become the word "to" so `mon-fri` and `mon to fri` read the same
//! - anything other than `a-z`, `0-9`, space, `:` and `+` is deleted
//! - frequency words and holidays are expanded from the [lexicon](crate::cron::lexicon)

use crate::cron::lexicon::{FREQUENCY_MACROS, HOLIDAY_MACROS};

/// Phrase a blank input is read as.
pub const BLANK_PHRASE: &str = "never";

fn is_kept(c: char) -> bool {
    matches!(c, 'a'..='z' | '0'..='9' | ' ' | ':' | '+')
}

/// Normalize a raw phrase into the form the tokenizer expects.
pub fn normalize(phrase: &str) -> String {
    let lowered = phrase.trim().to_lowercase();
    if lowered.is_empty() {
        return BLANK_PHRASE.to_string();
    }

    let mut text: String = lowered
        .replace('-', " to ")
        .chars()
        .map(|c| if c.is_whitespace() { ' ' } else { c })
        .filter(|c| is_kept(*c))
        .collect();

    for (pattern, expansion) in FREQUENCY_MACROS.iter().chain(HOLIDAY_MACROS) {
        if text.contains(pattern) {
            text = text.replace(pattern, expansion);
        }
    }

    text
}
