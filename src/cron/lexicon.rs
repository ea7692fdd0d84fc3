//! Lookup tables
//!
//! Everything here is a process-wide constant. Tables are built once on first use and
//! only read afterwards, so concurrent compilations share them without locking.

use crate::cron::lexing::tokens::{Marker, Token};
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Weekday abbreviations, indexed Sunday = 0.
pub const DAYS: [&str; 7] = ["sun", "mon", "tue", "wed", "thu", "fri", "sat"];

/// Month abbreviations, indexed January = 0 (cron months are this index + 1).
pub const MONTHS: [&str; 12] = [
    "jan", "feb", "mar", "apr", "may", "jun", "jul", "aug", "sep", "oct", "nov", "dec",
];

/// The range connector every range word resolves to.
pub const RANGE: &str = "-";

/// Frequency words expanded before tokenization.
pub const FREQUENCY_MACROS: &[(&str, &str)] = &[
    ("hourly", "every hour"),
    ("daily", "every day"),
    ("weekly", "every week"),
    ("monthly", "every month"),
    ("yearly", "every year"),
    ("annually", "every year"),
];

/// Holidays expanded to `<day> <month>`. Longer phrases come before their prefixes.
pub const HOLIDAY_MACROS: &[(&str, &str)] = &[
    ("christmas eve", "24 dec"),
    ("christmas day", "25 dec"),
    ("christmas", "25 dec"),
    ("new years eve", "31 dec"),
    ("new years day", "1 jan"),
    ("new years", "1 jan"),
    ("new year", "1 jan"),
    ("valentines day", "14 feb"),
    ("valentines", "14 feb"),
    ("valentine", "14 feb"),
    ("saint patricks day", "17 mar"),
    ("st patricks day", "17 mar"),
    ("halloween", "31 oct"),
    ("independence day", "4 jul"),
    ("independance day", "4 jul"),
];

const WORDS: &[(&str, &str)] = &[
    // plurals
    ("minutes", "minute"),
    ("hours", "hour"),
    ("days", "day"),
    ("weeks", "week"),
    ("months", "month"),
    ("years", "year"),
    // ordinal words
    ("first", "1"),
    ("second", "2"),
    ("third", "3"),
    ("fourth", "4"),
    ("fifth", "5"),
    ("sixth", "6"),
    ("seventh", "7"),
    ("eighth", "8"),
    ("ninth", "9"),
    ("tenth", "10"),
    ("eleventh", "11"),
    ("twelfth", "12"),
    ("thirteenth", "13"),
    // times of day
    ("noon", "12:00"),
    ("midnight", "00:00"),
    ("morning", "10:00"),
    ("afternoon", "15:00"),
    ("evening", "20:00"),
    // weekdays
    ("sunday", "sun"),
    ("monday", "mon"),
    ("tuesday", "tue"),
    ("wednesday", "wed"),
    ("thursday", "thu"),
    ("friday", "fri"),
    ("saturday", "sat"),
    ("sundays", "sun"),
    ("mondays", "mon"),
    ("tuesdays", "tue"),
    ("wednesdays", "wed"),
    ("thursdays", "thu"),
    ("fridays", "fri"),
    ("saturdays", "sat"),
    // months
    ("january", "jan"),
    ("february", "feb"),
    ("march", "mar"),
    ("april", "apr"),
    ("june", "jun"),
    ("july", "jul"),
    ("august", "aug"),
    ("september", "sep"),
    ("october", "oct"),
    ("november", "nov"),
    ("december", "dec"),
    // range words
    ("through", RANGE),
    ("to", RANGE),
    // other
    ("each", "every"),
];

const FILLERS: &[&str] = &["and", "the"];

const MARKERS: &[(&str, Marker)] = &[
    ("at", Marker::Time),
    ("on", Marker::Date),
    ("in", Marker::Date),
];

/// Timezone abbreviations and their UTC offsets.
const TIMEZONES: &[(&str, &str)] = &[
    ("acdt", "+10:30"), ("acst", "+09:30"), ("act", "+08:00"), ("acwst", "+08:45"),
    ("adt", "-03:00"), ("aedt", "+11:00"), ("aest", "+10:00"), ("aet", "+10:00"),
    ("aft", "+04:30"), ("akdt", "-08:00"), ("akst", "-09:00"), ("almt", "+06:00"),
    ("amst", "-03:00"), ("amt", "+04:00"), ("anat", "+12:00"), ("aqtt", "+05:00"),
    ("art", "-03:00"), ("ast", "+03:00"), ("awst", "+08:00"), ("azost", "+00:00"),
    ("azot", "-01:00"), ("azt", "+04:00"), ("bnt", "+08:00"), ("biot", "+06:00"),
    ("bit", "-12:00"), ("bot", "-04:00"), ("brst", "-02:00"), ("brt", "-03:00"),
    ("bst", "+01:00"), ("btt", "+06:00"), ("cat", "+02:00"), ("cct", "+06:30"),
    ("cdt", "-05:00"), ("cest", "+02:00"), ("cet", "+01:00"), ("chadt", "+13:45"),
    ("chast", "+12:45"), ("chot", "+08:00"), ("chost", "+09:00"), ("chst", "+10:00"),
    ("chut", "+10:00"), ("cist", "-08:00"), ("ckt", "-10:00"), ("clst", "-03:00"),
    ("clt", "-04:00"), ("cost", "-04:00"), ("cot", "-05:00"), ("cst", "+08:00"),
    ("ct", "-06:00"), ("cvt", "-01:00"), ("cwst", "+08:45"), ("cxt", "+07:00"),
    ("davt", "+07:00"), ("ddut", "+10:00"), ("dft", "+01:00"), ("easst", "-05:00"),
    ("east", "-06:00"), ("eat", "+03:00"), ("ect", "-04:00"), ("edt", "-04:00"),
    ("eest", "+03:00"), ("eet", "+02:00"), ("egst", "+00:00"), ("egt", "-01:00"),
    ("est", "-05:00"), ("et", "-05:00"), ("fet", "+03:00"), ("fjt", "+12:00"),
    ("fkst", "-03:00"), ("fkt", "-04:00"), ("fnt", "-02:00"), ("galt", "-06:00"),
    ("gamt", "-09:00"), ("get", "+04:00"), ("gft", "-03:00"), ("gilt", "+12:00"),
    ("git", "-09:00"), ("gmt", "+00:00"), ("gst", "+04:00"), ("gyt", "-04:00"),
    ("hdt", "-09:00"), ("haec", "+02:00"), ("hst", "-10:00"), ("hkt", "+08:00"),
    ("hmt", "+05:00"), ("hovst", "+08:00"), ("hovt", "+07:00"), ("ict", "+07:00"),
    ("idlw", "-12:00"), ("idt", "+03:00"), ("iot", "+03:00"), ("irdt", "+04:30"),
    ("irkt", "+08:00"), ("irst", "+03:30"), ("ist", "+05:30"), ("jst", "+09:00"),
    ("kalt", "+02:00"), ("kgt", "+06:00"), ("kost", "+11:00"), ("krat", "+07:00"),
    ("kst", "+09:00"), ("lhst", "+10:30"), ("lint", "+14:00"), ("magt", "+12:00"),
    ("mart", "-09:30"), ("mawt", "+05:00"), ("mdt", "-06:00"), ("met", "+01:00"),
    ("mest", "+02:00"), ("mht", "+12:00"), ("mist", "+11:00"), ("mit", "-09:30"),
    ("mmt", "+06:30"), ("msk", "+03:00"), ("mst", "+08:00"), ("mut", "+04:00"),
    ("mvt", "+05:00"), ("nct", "+11:00"), ("ndt", "-02:30"), ("nft", "+11:00"),
    ("novt", "+07:00"), ("npt", "+05:45"), ("nst", "-03:30"), ("nt", "-03:30"),
    ("nut", "-11:00"), ("nzdt", "+13:00"), ("nzst", "+12:00"), ("omst", "+06:00"),
    ("orat", "+05:00"), ("pdt", "-07:00"), ("pet", "-05:00"), ("pett", "+12:00"),
    ("pgt", "+10:00"), ("phot", "+13:00"), ("pht", "+08:00"), ("phst", "+08:00"),
    ("pkt", "+05:00"), ("pmdt", "-02:00"), ("pmst", "-03:00"), ("pont", "+11:00"),
    ("pst", "-08:00"), ("pwt", "+09:00"), ("pyst", "-03:00"), ("pyt", "-04:00"),
    ("ret", "+04:00"), ("rott", "-03:00"), ("sakt", "+11:00"), ("samt", "+04:00"),
    ("sast", "+02:00"), ("sbt", "+11:00"), ("sct", "+04:00"), ("sdt", "-10:00"),
    ("sgt", "+08:00"), ("slst", "+05:30"), ("sret", "+11:00"), ("srt", "-03:00"),
    ("sst", "-11:00"), ("syot", "+03:00"), ("taht", "-10:00"), ("tha", "+07:00"),
    ("tft", "+05:00"), ("tjt", "+05:00"), ("tkt", "+13:00"), ("tlt", "+09:00"),
    ("tmt", "+05:00"), ("trt", "+03:00"), ("tot", "+13:00"), ("tvt", "+12:00"),
    ("ulast", "+09:00"), ("ulat", "+08:00"), ("utc", "+00:00"), ("uyst", "-02:00"),
    ("uyt", "-03:00"), ("uzt", "+05:00"), ("vet", "-04:00"), ("vlat", "+10:00"),
    ("volt", "+03:00"), ("vost", "+06:00"), ("vut", "+11:00"), ("wakt", "+12:00"),
    ("wast", "+02:00"), ("wat", "+01:00"), ("west", "+01:00"), ("wet", "+00:00"),
    ("wib", "+07:00"), ("wit", "+09:00"), ("wita", "+08:00"), ("wgst", "-02:00"),
    ("wgt", "-03:00"), ("wst", "+08:00"), ("yakt", "+09:00"), ("yekt", "+05:00"),
];

/// Highest number an `Nth` ordinal resolves for.
const MAX_ORDINAL: u32 = 59;

fn ordinal_suffix(n: u32) -> &'static str {
    match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    }
}

/// Word to replacement token. Words absent from the table pass through unchanged.
pub static SYNONYMS: Lazy<HashMap<String, Token>> = Lazy::new(|| {
    let mut table = HashMap::new();

    for (word, replacement) in WORDS.iter().chain(TIMEZONES) {
        table.insert(word.to_string(), Token::word(*replacement));
    }
    for n in 1..=MAX_ORDINAL {
        table.insert(format!("{n}{}", ordinal_suffix(n)), Token::word(n.to_string()));
    }
    for word in FILLERS {
        table.insert(word.to_string(), Token::Blank);
    }
    for (word, marker) in MARKERS {
        table.insert(word.to_string(), Token::Marker(*marker));
    }

    table
});

/// Map one word through the synonym table.
pub fn resolve(word: &str) -> Token {
    SYNONYMS
        .get(word)
        .cloned()
        .unwrap_or_else(|| Token::word(word))
}

/// Sunday-based index of a weekday abbreviation.
pub fn day_index(word: &str) -> Option<usize> {
    DAYS.iter().position(|d| *d == word)
}

/// Cron month number (January = 1) of a month abbreviation.
pub fn month_number(word: &str) -> Option<usize> {
    MONTHS.iter().position(|m| *m == word).map(|i| i + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plurals_resolve_to_units() {
        assert_eq!(resolve("minutes"), Token::word("minute"));
        assert_eq!(resolve("months"), Token::word("month"));
    }

    #[test]
    fn test_numeric_ordinals() {
        assert_eq!(resolve("1st"), Token::word("1"));
        assert_eq!(resolve("2nd"), Token::word("2"));
        assert_eq!(resolve("3rd"), Token::word("3"));
        assert_eq!(resolve("11th"), Token::word("11"));
        assert_eq!(resolve("12th"), Token::word("12"));
        assert_eq!(resolve("13th"), Token::word("13"));
        assert_eq!(resolve("22nd"), Token::word("22"));
        assert_eq!(resolve("59th"), Token::word("59"));
    }

    #[test]
    fn test_ordinals_need_the_right_suffix_and_range() {
        assert_eq!(resolve("21th"), Token::word("21th"));
        assert_eq!(resolve("60th"), Token::word("60th"));
    }

    #[test]
    fn test_markers_and_fillers() {
        assert_eq!(resolve("at"), Token::Marker(Marker::Time));
        assert_eq!(resolve("on"), Token::Marker(Marker::Date));
        assert_eq!(resolve("in"), Token::Marker(Marker::Date));
        assert_eq!(resolve("and"), Token::Blank);
        assert_eq!(resolve("the"), Token::Blank);
    }

    #[test]
    fn test_timezones_resolve_to_offsets() {
        assert_eq!(resolve("utc"), Token::word("+00:00"));
        assert_eq!(resolve("cet"), Token::word("+01:00"));
        assert_eq!(resolve("est"), Token::word("-05:00"));
        assert_eq!(resolve("npt"), Token::word("+05:45"));
        assert_eq!(resolve("egst"), Token::word("+00:00"));
    }

    #[test]
    fn test_day_and_month_indices() {
        assert_eq!(day_index("sun"), Some(0));
        assert_eq!(day_index("sat"), Some(6));
        assert_eq!(day_index("sunday"), None);
        assert_eq!(month_number("jan"), Some(1));
        assert_eq!(month_number("dec"), Some(12));
        assert_eq!(month_number("may"), Some(5));
    }

    #[test]
    fn test_holiday_prefixes_follow_longer_phrases() {
        for (i, (longer, _)) in HOLIDAY_MACROS.iter().enumerate() {
            for (shorter, _) in &HOLIDAY_MACROS[..i] {
                assert!(
                    !longer.contains(shorter),
                    "'{shorter}' would corrupt '{longer}'"
                );
            }
        }
    }
}
