//! Calendar token extraction stage
//!
//! One left-to-right scan collecting weekday and month names into the day-of-week and
//! month fields. Weekdays are numbered from Sunday = 0, months from January = 1.
//!
//! A range connector (`-`) belongs to whichever list was extended last: after a weekday
//! it joins weekdays, otherwise months. So "mon to fri and sun in oct and dec" gives
//! day-of-week `1-5,0` and month `10,12`.

use crate::cron::builder::Field;
use crate::cron::lexicon::{day_index, month_number, RANGE};
use crate::cron::lexing::Token;
use crate::cron::transforms::{Compilation, Runnable};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Part {
    Value(usize),
    Range,
}

/// Values and range connectors in the order they were seen.
#[derive(Debug, Default)]
struct FieldList {
    parts: Vec<Part>,
}

impl FieldList {
    fn push_value(&mut self, value: usize) {
        self.parts.push(Part::Value(value));
    }

    fn push_range(&mut self) {
        self.parts.push(Part::Range);
    }

    /// Render as a cron list, joining values around a connector into a range.
    /// Connectors with no value on their left are dropped; a trailing one is ignored.
    fn render(&self) -> Option<String> {
        let mut items: Vec<String> = Vec::new();
        let mut ranged = false;

        for part in &self.parts {
            match part {
                Part::Value(v) => {
                    match items.last_mut() {
                        Some(last) if ranged => {
                            last.push('-');
                            last.push_str(&v.to_string());
                        }
                        _ => items.push(v.to_string()),
                    }
                    ranged = false;
                }
                Part::Range => ranged = !items.is_empty(),
            }
        }

        if items.is_empty() {
            None
        } else {
            Some(items.join(","))
        }
    }
}

enum Calendar {
    Day(usize),
    Month(usize),
    Range,
}

fn classify(token: &Token) -> Option<Calendar> {
    let word = token.as_word()?;
    if let Some(day) = day_index(word) {
        Some(Calendar::Day(day))
    } else if let Some(month) = month_number(word) {
        Some(Calendar::Month(month))
    } else if word == RANGE {
        Some(Calendar::Range)
    } else {
        None
    }
}

pub struct CalendarExtraction;

impl CalendarExtraction {
    pub fn new() -> Self {
        CalendarExtraction
    }
}

impl Default for CalendarExtraction {
    fn default() -> Self {
        Self::new()
    }
}

impl Runnable<Compilation, Compilation> for CalendarExtraction {
    fn run(&self, mut input: Compilation) -> Compilation {
        let mut days = FieldList::default();
        let mut months = FieldList::default();
        let mut in_days = false;

        for token in input.tokens.iter_mut() {
            let Some(entry) = classify(token) else {
                continue;
            };
            match entry {
                Calendar::Day(day) => {
                    in_days = true;
                    days.push_value(day);
                }
                Calendar::Month(month) => {
                    in_days = false;
                    months.push_value(month);
                }
                Calendar::Range if in_days => days.push_range(),
                Calendar::Range => months.push_range(),
            }
            *token = Token::Blank;
        }

        if let Some(value) = days.render() {
            input.fields.set(Field::DayOfWeek, value);
        }
        if let Some(value) = months.render() {
            input.fields.set(Field::Month, value);
        }

        debug!(stage = "calendar", fields = ?input.fields);
        input
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cron::lexing::tokenize;

    fn run(normalized: &str) -> Compilation {
        CalendarExtraction::new().run(Compilation::new(tokenize(normalized)))
    }

    #[test]
    fn test_weekday_range() {
        let result = run("mondays to fridays");
        assert_eq!(result.fields.get(Field::DayOfWeek), Some("1-5"));
        assert!(result.tokens.iter().all(Token::is_blank));
    }

    #[test]
    fn test_weekday_range_and_list_with_months() {
        let result = run("mondays to fridays and sundays in october and december");
        assert_eq!(result.fields.get(Field::DayOfWeek), Some("1-5,0"));
        assert_eq!(result.fields.get(Field::Month), Some("10,12"));
    }

    #[test]
    fn test_month_range() {
        let result = run("from january to june");
        assert_eq!(result.fields.get(Field::Month), Some("1-6"));
        assert_eq!(result.tokens[0], Token::word("from"));
    }

    #[test]
    fn test_weekday_list() {
        let result = run("on mondays and fridays at 14:00");
        assert_eq!(result.fields.get(Field::DayOfWeek), Some("1,5"));
        assert_eq!(result.fields.get(Field::Month), None);
        assert_eq!(result.tokens.last(), Some(&Token::word("14:00")));
    }

    #[test]
    fn test_single_month_keeps_other_words() {
        let result = run("13 june");
        assert_eq!(result.fields.get(Field::Month), Some("6"));
        assert_eq!(result.tokens, vec![Token::word("13"), Token::Blank]);
    }

    #[test]
    fn test_dangling_range_is_dropped() {
        let result = run("10am to 11am");
        assert_eq!(result.fields.get(Field::Month), None);
        assert_eq!(
            result.tokens,
            vec![Token::word("10am"), Token::Blank, Token::word("11am")]
        );

        assert_eq!(run("to friday").fields.get(Field::DayOfWeek), Some("5"));
        assert_eq!(run("friday to").fields.get(Field::DayOfWeek), Some("5"));
    }

    #[test]
    fn test_nothing_calendar_leaves_fields_unset() {
        let result = run("every 5 minutes");
        assert_eq!(result.fields, Default::default());
        assert_eq!(result.tokens.len(), 3);
    }
}
