//! Resolving date phrases such as `today` or `last week` into calendar dates.

use chrono::{Datelike, Days, Local, NaiveDate, Weekday};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DateError {
    #[error("Unrecognized date phrase: {0:?}")]
    Unrecognized(String),
}

/// Resolves `phrase` relative to the local clock.
pub fn resolve_dates(phrase: &str, workdays_only: bool) -> Result<Vec<NaiveDate>, DateError> {
    parse_dates(phrase, Local::now().date_naive(), workdays_only)
}

/// Resolves `phrase` relative to `today`.
///
/// Accepted phrases are `today`, `yesterday`, `tomorrow`, `this week`,
/// `last week`, `next week` and ISO dates (`2018-03-24`). Weeks run Monday
/// through Sunday.
///
/// With `workdays_only`, single days falling on a weekend move back to the
/// preceding Friday, `yesterday`/`tomorrow` skip over weekends, and weeks
/// contain only Monday to Friday.
pub fn parse_dates(
    phrase: &str,
    today: NaiveDate,
    workdays_only: bool,
) -> Result<Vec<NaiveDate>, DateError> {
    let normalized = phrase
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase();

    let dates = match normalized.as_str() {
        "today" => vec![single_day(today, workdays_only)],
        "yesterday" => vec![step(today, -1, workdays_only)],
        "tomorrow" => vec![step(today, 1, workdays_only)],
        "this week" => week_of(today, workdays_only),
        "last week" => week_of(today - Days::new(7), workdays_only),
        "next week" => week_of(today + Days::new(7), workdays_only),
        other => {
            let date = NaiveDate::parse_from_str(other, "%Y-%m-%d")
                .map_err(|_| DateError::Unrecognized(phrase.to_string()))?;
            vec![single_day(date, workdays_only)]
        }
    };

    log::debug!("resolved {phrase:?} to {} date(s)", dates.len());
    Ok(dates)
}

fn is_workday(date: NaiveDate) -> bool {
    !matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

fn single_day(date: NaiveDate, workdays_only: bool) -> NaiveDate {
    let mut date = date;
    while workdays_only && !is_workday(date) {
        date = date - Days::new(1);
    }
    date
}

/// The day `direction` days away, continuing past weekends when required.
fn step(today: NaiveDate, direction: i64, workdays_only: bool) -> NaiveDate {
    let one_day = |date: NaiveDate| {
        if direction < 0 {
            date - Days::new(1)
        } else {
            date + Days::new(1)
        }
    };

    let mut date = one_day(today);
    while workdays_only && !is_workday(date) {
        date = one_day(date);
    }
    date
}

fn week_of(date: NaiveDate, workdays_only: bool) -> Vec<NaiveDate> {
    let monday = date.week(Weekday::Mon).first_day();
    let len = if workdays_only { 5 } else { 7 };
    monday.iter_days().take(len).collect()
}
