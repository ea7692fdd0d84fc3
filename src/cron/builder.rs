//! Field accumulator used while a phrase is being compiled
//!
//! Stages write fields into a [`ScheduleBuilder`]; the last write wins. Nothing outside
//! the pipeline sees the builder, only the [`Schedule`] it is converted into by the
//! assembly stage.

use crate::cron::schedule::Schedule;
use std::fmt;

/// Wildcard written into any field no stage claimed.
pub const WILDCARD: &str = "*";

/// The never-schedule in cron order. No real date matches the 31st of February.
pub const NEVER_SCHEDULE: [&str; 5] = ["0", "0", "31", "2", "0"];

/// The five cron fields, in cron order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Minute,
    Hour,
    DayOfMonth,
    Month,
    DayOfWeek,
}

impl Field {
    pub const ALL: [Field; 5] = [
        Field::Minute,
        Field::Hour,
        Field::DayOfMonth,
        Field::Month,
        Field::DayOfWeek,
    ];
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::Minute => "minute",
            Field::Hour => "hour",
            Field::DayOfMonth => "day-of-month",
            Field::Month => "month",
            Field::DayOfWeek => "day-of-week",
        };
        f.write_str(name)
    }
}

/// Mutable working copy of the schedule fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScheduleBuilder {
    minute: Option<String>,
    hour: Option<String>,
    day_of_month: Option<String>,
    month: Option<String>,
    day_of_week: Option<String>,
    disabled: bool,
}

impl ScheduleBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    fn slot(&mut self, field: Field) -> &mut Option<String> {
        match field {
            Field::Minute => &mut self.minute,
            Field::Hour => &mut self.hour,
            Field::DayOfMonth => &mut self.day_of_month,
            Field::Month => &mut self.month,
            Field::DayOfWeek => &mut self.day_of_week,
        }
    }

    /// Overwrite a field, replacing whatever an earlier stage wrote.
    pub fn set(&mut self, field: Field, value: impl Into<String>) -> &mut Self {
        *self.slot(field) = Some(value.into());
        self
    }

    /// Pin the result to the never-schedule. Later writes are still recorded but
    /// [`build`](Self::build) ignores them.
    pub fn disable(&mut self) -> &mut Self {
        self.disabled = true;
        self
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        let value = match field {
            Field::Minute => &self.minute,
            Field::Hour => &self.hour,
            Field::DayOfMonth => &self.day_of_month,
            Field::Month => &self.month,
            Field::DayOfWeek => &self.day_of_week,
        };
        value.as_deref().filter(|v| !v.trim().is_empty())
    }

    /// Freeze into a [`Schedule`], defaulting unset fields to `*`. A disabled builder
    /// always yields the never-schedule.
    pub fn build(&self, unparsed: impl Into<String>) -> Schedule {
        let [minute, hour, day_of_month, month, day_of_week] = if self.disabled {
            NEVER_SCHEDULE.map(str::to_string)
        } else {
            Field::ALL.map(|f| self.get(f).unwrap_or(WILDCARD).to_string())
        };
        Schedule {
            minute,
            hour,
            day_of_month,
            month,
            day_of_week,
            unparsed: unparsed.into().trim().to_string(),
        }
    }
}
