//! Reading RedNotebook's on-disk journal.
//!
//! RedNotebook keeps one YAML file per month (`2018-03.txt`), mapping each
//! day of the month to a record whose `text` field holds that day's entry.

use chrono::{Datelike, NaiveDate};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid data directory: {0}")]
    InvalidDataDir(String),
}

#[derive(Debug, Deserialize)]
struct DayRecord {
    #[serde(default)]
    text: String,
}

/// Load every non-empty daily entry found in the data directory
pub fn load_daily_entries(data_path: &Path) -> Result<BTreeMap<NaiveDate, String>, StorageError> {
    validate_data_dir(data_path)?;

    let mut entries = BTreeMap::new();
    for (month, path) in scan_month_files(data_path)? {
        let content = read_month_file(&path)?;
        entries.extend(parse_month(month, &content, &path));
    }
    log::debug!(
        "loaded {} entries from {}",
        entries.len(),
        data_path.display()
    );
    Ok(entries)
}

/// Find month files in the data directory, keyed by the first day of the month
pub fn scan_month_files(data_path: &Path) -> Result<Vec<(NaiveDate, PathBuf)>, StorageError> {
    let mut months = Vec::new();

    for entry in fs::read_dir(data_path).map_err(StorageError::Io)? {
        let entry = entry.map_err(StorageError::Io)?;
        let path = entry.path();

        if !path.is_file() {
            continue;
        }
        if let Some(month) = path
            .file_stem()
            .and_then(|stem| stem.to_str())
            .and_then(month_from_stem)
        {
            months.push((month, path));
        }
    }

    months.sort();
    Ok(months)
}

pub fn validate_data_dir(path: &Path) -> Result<(), StorageError> {
    if !path.exists() || !path.is_dir() {
        return Err(StorageError::InvalidDataDir(format!(
            "{} is not a directory",
            path.display()
        )));
    }

    Ok(())
}

fn read_month_file(path: &Path) -> Result<String, StorageError> {
    if !path.exists() {
        return Err(StorageError::NotFound(path.to_path_buf()));
    }
    fs::read_to_string(path).map_err(StorageError::Io)
}

fn month_from_stem(stem: &str) -> Option<NaiveDate> {
    let (year, month) = stem.split_once('-')?;
    if year.len() != 4 || month.len() != 2 {
        return None;
    }
    NaiveDate::from_ymd_opt(year.parse().ok()?, month.parse().ok()?, 1)
}

/// Parse one month file. A file that is not a valid day mapping yields
/// nothing rather than failing the whole load.
fn parse_month(month: NaiveDate, content: &str, path: &Path) -> BTreeMap<NaiveDate, String> {
    let mut entries = BTreeMap::new();
    if content.trim().is_empty() {
        return entries;
    }

    let days: BTreeMap<u32, DayRecord> = match serde_yaml::from_str(content) {
        Ok(days) => days,
        Err(e) => {
            log::warn!("Skipping unreadable month file {}: {e}", path.display());
            return entries;
        }
    };

    for (day, record) in days {
        let Some(date) = month.with_day(day) else {
            log::warn!("Skipping invalid day {day} in {}", path.display());
            continue;
        };
        let text = record.text.trim_end();
        if !text.is_empty() {
            entries.insert(date, text.to_string());
        }
    }
    entries
}
