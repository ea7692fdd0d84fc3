//! End-to-end phrase compilation
//!
//! Each case runs a phrase through the full pipeline with default options (UTC).

use cronphrase::{compile, CompileOptions, Compiler};
use rstest::rstest;

#[rstest]
#[case::date_and_time("at 5:15am on 13 June", "15 5 13 6 *")]
#[case::holiday("at 5:15pm on christmas", "15 17 25 12 *")]
#[case::daily_cet("Daily at 02:00 CET", "0 1 * * *")]
#[case::daily_utc("Daily at 02:00 UTC", "0 2 * * *")]
#[case::daily_spaces("Daily at    02:00 ", "0 2 * * *")]
#[case::weekday_list("On Mondays and Fridays at 14:00", "0 14 * * 1,5")]
#[case::hourly_weekdays("Every Hour Mondays to Fridays", "0 * * * 1-5")]
#[case::minute_step("Every 30 minutes", "*/30 * * * *")]
#[case::range_and_value("Every Hour Mondays to Fridays and Sundays", "0 * * * 1-5,0")]
#[case::months_and_days(
    "Every Hour Mondays to Fridays and Sundays in October and December",
    "0 * * 10,12 1-5,0"
)]
#[case::five_minutes("Every 5 minutes", "*/5 * * * *")]
#[case::month_range("Every 5 minutes from January to June", "*/5 * * 1-6 *")]
#[case::month_step_ordinal("Every 3 months on the 2nd at 8am", "0 8 2 */3 *")]
#[case::ordinal_list("Every 3 months on the 2nd and 4th at 8am", "0 8 2,4 */3 *")]
#[case::even_days("At 5pm on even days", "0 17 2-30/2 * *")]
#[case::odd_days("At 5pm on odd days", "0 17 1-31/2 * *")]
#[case::ordinal_day_step("every 3rd day at 2:55 am from January to August", "55 2 */3 1-8 *")]
#[case::weekly_at("Every Tuesday at 15:00", "0 15 * * 2")]
#[case::every_day_am("every day at 9am", "0 9 * * *")]
#[case::hour_step("every 6 hours", "0 */6 * * *")]
#[case::each("each day", "0 0 * * *")]
#[case::time_first("5:15am every Tuesday", "15 5 * * 2")]
#[case::new_year("new year", "* * 1 1 *")]
#[case::spaced_meridiem("at 5 pm", "0 17 * * *")]
#[case::bare_time("5 pm", "0 17 * * *")]
#[case::time_after_date("13 June at 11:34", "34 11 13 6 *")]
#[case::month_before_day("11:34 on June 13", "34 11 13 6 *")]
#[case::weekdays_after_time("11:34 on Mondays and Fridays", "34 11 * * 1,5")]
#[case::day_before_month("11:34 on 13 June", "34 11 13 6 *")]
#[case::day_list("11:34 on 13 and 16 June", "34 11 13,16 6 *")]
#[case::hourly_macro("hourly", "0 * * * *")]
#[case::monthly_macro("monthly", "1 1 1 * *")]
#[case::yearly_macro("yearly", "1 1 1 1 *")]
#[case::odd_months_at_noon("on odd months at noon", "0 12 * 1-11/2 *")]
#[case::odd_minutes("every odd minute", "1-59/2 * * * *")]
#[case::negative_zone("Mon-Fri at 9:00 EST", "0 14 * * 1-5")]
#[case::wraps_past_midnight("daily at 00:30 CET", "30 23 * * *")]
fn compiles_phrase(#[case] phrase: &str, #[case] expected: &str) {
    let schedule = compile(phrase);
    assert_eq!(schedule.to_string(), expected, "phrase: {phrase:?}");
    assert!(
        schedule.is_fully_parsed(),
        "phrase {phrase:?} left {:?}",
        schedule.unparsed()
    );
}

#[rstest]
#[case::empty("")]
#[case::whitespace("   \t ")]
#[case::never("never")]
#[case::never_overrides("never every 5 minutes")]
#[case::never_after_weekday("every monday never")]
#[case::never_with_day("never on 13")]
#[case::never_with_time("never at 5pm")]
#[case::never_with_time_and_day("never on the 13th at 9am")]
#[case::never_last("at 5:15am on 13 June never")]
fn never_sentinel(#[case] phrase: &str) {
    let schedule = compile(phrase);
    assert_eq!(schedule.to_string(), "0 0 31 2 0");
    assert!(schedule.is_fully_parsed());
}

#[rstest]
#[case::lone_every("every", "* * * * *", "every")]
#[case::unknown_unit("every 2 weeks", "* * * * *", "2 week")]
#[case::weekly_macro("weekly", "* * * * *", "week")]
#[case::second_every("every 5 minutes every 2 hours", "*/5 * * * *", "every 2 hour")]
#[case::gibberish("at 5pm flibbertigibbet", "* * * * *", "5pm flibbertigibbet")]
fn reports_unparsed(#[case] phrase: &str, #[case] expected: &str, #[case] unparsed: &str) {
    let schedule = compile(phrase);
    assert_eq!(schedule.to_string(), expected);
    assert_eq!(schedule.unparsed(), unparsed);
    assert!(!schedule.is_fully_parsed());
}

#[test]
fn case_does_not_matter() {
    assert_eq!(
        compile("EVERY HOUR MONDAYS TO FRIDAYS"),
        compile("every hour mondays to fridays")
    );
}

#[test]
fn default_offset_applies_to_bare_times() {
    let compiler = Compiler::new(CompileOptions::with_offset("-05:00").unwrap());
    assert_eq!(compiler.compile("daily at 22:15").to_string(), "15 3 * * *");
    assert_eq!(compiler.compile("daily at 22:15 cet").to_string(), "15 21 * * *");
}

#[test]
fn schedule_accessors() {
    let schedule = compile("Every 3 months on the 2nd and 4th at 8am");
    assert_eq!(schedule.minute(), "0");
    assert_eq!(schedule.hour(), "8");
    assert_eq!(schedule.day_of_month(), "2,4");
    assert_eq!(schedule.month(), "*/3");
    assert_eq!(schedule.day_of_week(), "*");
    assert_eq!(schedule.fields(), ["0", "8", "2,4", "*/3", "*"]);
}
