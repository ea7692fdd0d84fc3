//! The compiled schedule
//!
//! A [`Schedule`] is the immutable result of compiling a phrase: five cron field
//! expressions plus whatever text the compiler could not place. It is only ever built
//! by the assembly stage at the end of the compile pipeline.

use crate::cron::config::OutputFormat;
use crate::cron::error::Result;
use serde::ser::{Serialize, SerializeStruct, Serializer};
use std::fmt;

/// Five-field cron schedule produced by [`compile`](crate::cron::compiler::compile).
///
/// Every field is non-empty and holds one of: `*`, an integer, a comma list, a hyphen
/// range, or a step expression (`*/N`, `start-end/N`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Schedule {
    pub(crate) minute: String,
    pub(crate) hour: String,
    pub(crate) day_of_month: String,
    pub(crate) month: String,
    pub(crate) day_of_week: String,
    pub(crate) unparsed: String,
}

impl Schedule {
    pub fn minute(&self) -> &str {
        &self.minute
    }

    pub fn hour(&self) -> &str {
        &self.hour
    }

    pub fn day_of_month(&self) -> &str {
        &self.day_of_month
    }

    pub fn month(&self) -> &str {
        &self.month
    }

    pub fn day_of_week(&self) -> &str {
        &self.day_of_week
    }

    /// Words from the phrase that no stage could attribute to a field.
    pub fn unparsed(&self) -> &str {
        &self.unparsed
    }

    /// True when the whole phrase was understood.
    pub fn is_fully_parsed(&self) -> bool {
        self.unparsed.trim().is_empty()
    }

    /// The fields in cron order: minute, hour, day-of-month, month, day-of-week.
    pub fn fields(&self) -> [&str; 5] {
        [
            &self.minute,
            &self.hour,
            &self.day_of_month,
            &self.month,
            &self.day_of_week,
        ]
    }

    /// The conventional five-field expression text, e.g. `"0 17 2-30/2 * *"`.
    pub fn expression(&self) -> String {
        self.fields().join(" ")
    }

    /// Render for output in the given format. JSON is a single line.
    pub fn render(&self, format: OutputFormat) -> Result<String> {
        Ok(match format {
            OutputFormat::Expression => self.expression(),
            OutputFormat::Json => serde_json::to_string(self)?,
            OutputFormat::Yaml => serde_yaml::to_string(self)?.trim_end().to_string(),
        })
    }
}

impl fmt::Display for Schedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {} {}",
            self.minute, self.hour, self.day_of_month, self.month, self.day_of_week
        )
    }
}

impl Serialize for Schedule {
    fn serialize<S: Serializer>(
        &self,
        serializer: S,
    ) -> std::result::Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Schedule", 8)?;
        state.serialize_field("expression", &self.expression())?;
        state.serialize_field("minute", &self.minute)?;
        state.serialize_field("hour", &self.hour)?;
        state.serialize_field("day_of_month", &self.day_of_month)?;
        state.serialize_field("month", &self.month)?;
        state.serialize_field("day_of_week", &self.day_of_week)?;
        state.serialize_field("unparsed", &self.unparsed)?;
        state.serialize_field("fully_parsed", &self.is_fully_parsed())?;
        state.end()
    }
}
