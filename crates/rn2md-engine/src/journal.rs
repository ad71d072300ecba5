//! Rendering journal entries as Markdown documents headed by their date.

use chrono::NaiveDate;
use std::collections::BTreeMap;

use crate::formatting::format_entry;

/// `# Sat Mar 24, 2018`
const DATE_HEADING_FORMAT: &str = "# %a %b %d, %Y";

/// Separates consecutive rendered days.
const DAY_SEPARATOR: &str = "\n\n\n";

/// Renders one day: the date heading, then the formatted entry if there is
/// one. Entry headers should be padded by at least one level so they nest
/// under the date heading.
pub fn render_entry(date: NaiveDate, text: Option<&str>, header_padding: usize) -> String {
    let heading = date.format(DATE_HEADING_FORMAT).to_string();
    match text {
        Some(text) => format!("{heading}\n{}", format_entry(text, header_padding)),
        None => heading,
    }
}

/// Renders each of `dates` in order, whether or not it has an entry.
pub fn render_entries(
    entries: &BTreeMap<NaiveDate, String>,
    dates: &[NaiveDate],
    header_padding: usize,
) -> String {
    dates
        .iter()
        .map(|date| render_entry(*date, entries.get(date).map(String::as_str), header_padding))
        .collect::<Vec<_>>()
        .join(DAY_SEPARATOR)
}
