//! Heuristic column detection.
//!
//! Each role owns an ordered keyword list. Keywords are tried in order and,
//! for each keyword, headers are scanned left to right; the first header whose
//! lower-cased name contains the keyword wins. Matching is plain substring
//! search, so a short keyword can grab an unintended column ("name" matches
//! "Username"). Keep the lists specific and ordered from strongest to weakest.

use crate::errors::{AppError, AppResult};
use crate::models::{ColumnMap, Role};

pub const ROLE_KEYWORDS: [(Role, &[&str]); 6] = [
    (Role::Member, &["member", "name", "employee", "user", "person"]),
    (Role::Date, &["date", "timestamp", "day"]),
    (
        Role::Status,
        &["status", "update", "report", "progress", "task", "summary"],
    ),
    (Role::Hours, &["hour", "hrs", "time spent", "duration"]),
    (Role::Email, &["email", "e-mail", "mail"]),
    (Role::Timestamp, &["timestamp", "submitted"]),
];

pub fn keywords_for(role: Role) -> &'static [&'static str] {
    ROLE_KEYWORDS
        .iter()
        .find(|(r, _)| *r == role)
        .map(|(_, kw)| *kw)
        .unwrap_or(&[])
}

/// First header matching the highest-priority keyword, if any.
pub fn resolve<'a>(headers: &'a [String], keywords: &[&str]) -> Option<&'a str> {
    let lowered: Vec<String> = headers.iter().map(|h| h.to_lowercase()).collect();

    keywords.iter().find_map(|kw| {
        let kw = kw.to_lowercase();
        lowered
            .iter()
            .position(|h| h.contains(&kw))
            .map(|idx| headers[idx].as_str())
    })
}

pub fn resolve_role(headers: &[String], role: Role) -> Option<String> {
    resolve(headers, keywords_for(role)).map(str::to_string)
}

/// Resolve a mandatory role or fail with the role's name.
fn resolve_required(headers: &[String], role: Role) -> AppResult<String> {
    debug_assert!(role.is_mandatory());
    resolve_role(headers, role).ok_or(AppError::MissingColumn(role.as_str()))
}

/// Resolve every role; member and date are mandatory.
pub fn resolve_columns(headers: &[String]) -> AppResult<ColumnMap> {
    let member = resolve_required(headers, Role::Member)?;
    let date = resolve_required(headers, Role::Date)?;

    Ok(ColumnMap {
        member,
        date,
        status: resolve_role(headers, Role::Status),
        hours: resolve_role(headers, Role::Hours),
        email: resolve_role(headers, Role::Email),
        timestamp: resolve_role(headers, Role::Timestamp),
    })
}
