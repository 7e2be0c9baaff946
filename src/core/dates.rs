//! Date column normalization.
//!
//! Numeric dates are read day-first (`03/04/2025` is 3 April); month-first is
//! only used when day-first cannot form a valid date. Values that cannot be
//! parsed become `None` and are never matched against the target date.

use crate::core::blank::is_blank;
use crate::models::{Cell, Table};
use crate::source::excel_date::excel_serial_to_datetime;
use chrono::{NaiveDate, NaiveDateTime};
use regex::Regex;
use std::sync::OnceLock;

const TEXT_FORMATS: [&str; 10] = [
    "%d %B %Y",
    "%d %B, %Y",
    "%B %d, %Y",
    "%B %d %Y",
    "%d-%b-%Y",
    "%d-%b-%y",
    "%A, %d %B %Y",
    "%A, %B %d, %Y",
    "%a %b %d %Y",
    "%Y %B %d",
];

fn numeric_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^(\d{1,4})[/\-.](\d{1,2})[/\-.](\d{1,4})(?:[ T].*)?$").expect("valid regex")
    })
}

fn ordinal_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)\b(\d{1,2})(st|nd|rd|th)\b").expect("valid regex"))
}

/// One entry per table row, in row order.
pub fn normalize_dates(table: &Table, column: &str) -> Vec<Option<NaiveDate>> {
    match table.column_index(column) {
        Some(idx) => table
            .rows
            .iter()
            .map(|row| parse_cell_date(row.get(idx)))
            .collect(),
        None => vec![None; table.len()],
    }
}

pub fn parse_cell_date(cell: &Cell) -> Option<NaiveDate> {
    if is_blank(cell) {
        return None;
    }
    match cell {
        Cell::Date(dt) => Some(dt.date()),
        Cell::Number(serial) => excel_serial_to_datetime(*serial).map(|dt| dt.date()),
        Cell::Text(s) => parse_date_text(s),
        Cell::Empty | Cell::Bool(_) => None,
    }
}

pub fn parse_date_text(raw: &str) -> Option<NaiveDate> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }

    if let Some(d) = parse_numeric(s) {
        return Some(d);
    }

    if let Ok(dt) = chrono::DateTime::parse_from_rfc2822(s) {
        return Some(dt.date_naive());
    }

    let cleaned = ordinal_re().replace_all(s, "$1").into_owned();
    if let Some(d) = parse_textual(&cleaned) {
        return Some(d);
    }

    // "15 March 2025 10:30" → drop the trailing time tokens
    let date_part: Vec<&str> = cleaned
        .split_whitespace()
        .take_while(|tok| !tok.contains(':'))
        .collect();
    if date_part.len() < cleaned.split_whitespace().count() {
        return parse_textual(&date_part.join(" "));
    }

    None
}

fn parse_textual(s: &str) -> Option<NaiveDate> {
    TEXT_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
        .or_else(|| {
            NaiveDateTime::parse_from_str(s, "%d %B %Y %H:%M")
                .ok()
                .map(|dt| dt.date())
        })
}

fn parse_numeric(s: &str) -> Option<NaiveDate> {
    let caps = numeric_re().captures(s)?;
    let a = &caps[1];
    let b: u32 = caps[2].parse().ok()?;
    let c = &caps[3];

    // year first: 2025-03-15, 2025/03/15T10:00
    if a.len() == 4 {
        let year: i32 = a.parse().ok()?;
        let day: u32 = c.parse().ok()?;
        return NaiveDate::from_ymd_opt(year, b, day);
    }

    let first: u32 = a.parse().ok()?;
    let year = expand_year(c)?;

    NaiveDate::from_ymd_opt(year, b, first).or_else(|| NaiveDate::from_ymd_opt(year, first, b))
}

/// Two-digit years pivot at 69: `68` → 2068, `69` → 1969.
fn expand_year(raw: &str) -> Option<i32> {
    let y: i32 = raw.parse().ok()?;
    match raw.len() {
        1 | 2 if y < 69 => Some(2000 + y),
        1 | 2 => Some(1900 + y),
        4 => Some(y),
        _ => None,
    }
}
