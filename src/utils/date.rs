use crate::errors::{AppError, AppResult};
use chrono::{Duration, NaiveDate};

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Default target date: the day before today, local time.
pub fn yesterday() -> NaiveDate {
    today() - Duration::days(1)
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

/// Pick the target date: explicit argument, then configured value, then yesterday.
pub fn resolve_target_date(arg: Option<&str>, configured: Option<&str>) -> AppResult<NaiveDate> {
    match arg.or(configured) {
        Some(raw) => parse_date(raw).ok_or_else(|| AppError::InvalidDate(raw.to_string())),
        None => Ok(yesterday()),
    }
}
