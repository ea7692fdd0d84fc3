//! Clock time parsing for the residual stage
//!
//! Accepts `H:MM`, `HH:MM:SS`, `5pm`, `5:15 am`, each optionally followed by a UTC offset
//! such as `+01:00` or `-05:00` (timezone abbreviations have already been resolved to
//! offsets by the lexicon). A bare number is never a clock time; it is left for the
//! day-of-month rule.

use chrono::{Duration, FixedOffset, NaiveTime, Timelike};
use once_cell::sync::Lazy;
use regex::Regex;

static CLOCK: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(?P<hour>\d{1,2})(?::(?P<minute>\d{2})(?::(?P<second>\d{2}))?)?\s*(?P<meridiem>am|pm)?\s*(?P<offset>[+-]\d{2}:\d{2})?$",
    )
    .unwrap()
});

static OFFSET: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?P<sign>[+-])(?P<hours>\d{2}):(?P<minutes>\d{2})$").unwrap());

/// A wall-clock time already converted to UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockTime {
    pub hour: u32,
    pub minute: u32,
}

/// Parse a `±HH:MM` offset.
pub fn parse_offset(text: &str) -> Option<FixedOffset> {
    let caps = OFFSET.captures(text.trim())?;
    let hours: i32 = caps["hours"].parse().ok()?;
    let minutes: i32 = caps["minutes"].parse().ok()?;
    if minutes >= 60 {
        return None;
    }
    let seconds = (hours * 60 + minutes) * 60;
    match &caps["sign"] {
        "-" => FixedOffset::west_opt(seconds),
        _ => FixedOffset::east_opt(seconds),
    }
}

/// Parse `text` as a clock time. Times without an explicit offset are read in
/// `default_offset`. The result is shifted to UTC, wrapping across midnight.
pub fn parse_clock(text: &str, default_offset: FixedOffset) -> Option<ClockTime> {
    let caps = CLOCK.captures(text.trim())?;

    let minute = caps.name("minute");
    let meridiem = caps.name("meridiem").map(|m| m.as_str());
    if minute.is_none() && meridiem.is_none() {
        return None;
    }

    let mut hour: u32 = caps["hour"].parse().ok()?;
    let minute: u32 = match minute {
        Some(m) => m.as_str().parse().ok()?,
        None => 0,
    };
    let second: u32 = match caps.name("second") {
        Some(s) => s.as_str().parse().ok()?,
        None => 0,
    };

    if let Some(meridiem) = meridiem {
        if !(1..=12).contains(&hour) {
            return None;
        }
        hour = match (meridiem, hour) {
            ("am", 12) => 0,
            ("pm", 12) => 12,
            ("pm", h) => h + 12,
            (_, h) => h,
        };
    }

    let offset = match caps.name("offset") {
        Some(o) => parse_offset(o.as_str())?,
        None => default_offset,
    };

    let local = NaiveTime::from_hms_opt(hour, minute, second)?;
    let (utc, _) =
        local.overflowing_sub_signed(Duration::seconds(i64::from(offset.local_minus_utc())));

    Some(ClockTime {
        hour: utc.hour(),
        minute: utc.minute(),
    })
}
