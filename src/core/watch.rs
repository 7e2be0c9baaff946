//! Single-member absence check.
//!
//! Runs after, and separately from, the general reconciliation. It looks at
//! the hours of one named member only and may disagree with the general
//! result: a member can be "present" through status text there and still be
//! flagged here for zero hours, or the reverse. Both results are reported as
//! they are.

use crate::core::blank::is_blank;
use crate::models::{ColumnMap, Table, WatchCheck, WatchOutcome};
use chrono::NaiveDate;

pub const DEFAULT_WATCH_MEMBER: &str = "Haseeb";

/// Hours values that count as "did not work".
const ZERO_HOURS: [&str; 2] = ["0", "0.0"];

/// Check `member` (trimmed, case-insensitive) on `target_date`.
///
/// Only the first matching row is inspected.
pub fn check_member(
    table: &Table,
    columns: &ColumnMap,
    dates: &[Option<NaiveDate>],
    target_date: NaiveDate,
    member: &str,
) -> WatchCheck {
    let wanted = member.trim().to_lowercase();
    let member_idx = table.column_index(&columns.member);
    let hours_idx = columns.hours.as_ref().and_then(|h| table.column_index(h));

    let first = table
        .rows
        .iter()
        .zip(dates.iter())
        .filter(|(_, d)| **d == Some(target_date))
        .map(|(row, _)| row)
        .find(|row| row.get_opt(member_idx).text().to_lowercase() == wanted);

    let outcome = match first {
        None => WatchOutcome::NoEntry,
        Some(row) => {
            let cell = row.get_opt(hours_idx);
            let hours = cell.text();
            if is_blank(cell) || ZERO_HOURS.contains(&hours.as_str()) {
                WatchOutcome::ZeroHours { hours }
            } else {
                WatchOutcome::Present { hours }
            }
        }
    };

    WatchCheck {
        member: member.trim().to_string(),
        target_date,
        outcome,
    }
}
