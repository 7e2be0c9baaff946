//! Attendance reconciliation for one target date.
//!
//! The member roster comes from every row of the table, whatever its date;
//! presence is decided only from rows dated exactly on the target date.

use crate::core::blank::is_blank;
use crate::core::dates::normalize_dates;
use crate::models::{
    Cell, ColumnMap, MissingRecord, PresenceRecord, Reconciliation, Row, Table,
};
use chrono::NaiveDate;
use std::collections::{HashMap, HashSet};

/// What made a target-date row count as a submission.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Signal {
    /// Non-blank status text.
    Status,
    /// Numeric hours greater than zero.
    Hours(f64),
    /// Non-blank hours that are not a number.
    HoursText,
}

/// Column positions for the roles used while scanning rows.
#[derive(Debug, Clone, Copy)]
struct Indices {
    member: Option<usize>,
    status: Option<usize>,
    hours: Option<usize>,
    email: Option<usize>,
    timestamp: Option<usize>,
}

impl Indices {
    fn new(table: &Table, columns: &ColumnMap) -> Self {
        let idx = |name: Option<&String>| name.and_then(|n| table.column_index(n));
        Self {
            member: table.column_index(&columns.member),
            status: idx(columns.status.as_ref()),
            hours: idx(columns.hours.as_ref()),
            email: idx(columns.email.as_ref()),
            timestamp: idx(columns.timestamp.as_ref()),
        }
    }
}

/// Trimmed member name; placeholder cells such as "N/A" or "-" are not members.
fn member_name(row: &Row, idx: Option<usize>) -> Option<String> {
    let cell = row.get_opt(idx);
    if is_blank(cell) { None } else { Some(cell.text()) }
}

/// Trimmed text of a cell, or "" when blank.
fn sample(cell: &Cell) -> String {
    if is_blank(cell) {
        String::new()
    } else {
        cell.text()
    }
}

/// Distinct trimmed member names over the whole table, in first-seen order.
pub fn all_members(table: &Table, columns: &ColumnMap) -> Vec<String> {
    let idx = table.column_index(&columns.member);
    let mut seen = HashSet::new();
    let mut out = Vec::new();

    for row in &table.rows {
        if let Some(name) = member_name(row, idx) {
            if seen.insert(name.clone()) {
                out.push(name);
            }
        }
    }

    out
}

/// Decide whether a single target-date row is evidence of a submission.
///
/// Status wins when present. Otherwise hours decide: a positive number counts,
/// zero or a negative number does not, and non-numeric text counts.
pub fn presence_signal(row: &Row, status: Option<usize>, hours: Option<usize>) -> Option<Signal> {
    if status.is_some() && !is_blank(row.get_opt(status)) {
        return Some(Signal::Status);
    }

    if hours.is_some() {
        let cell = row.get_opt(hours);
        if !is_blank(cell) {
            return match cell.as_number() {
                Some(v) if v > 0.0 => Some(Signal::Hours(v)),
                Some(_) => None,
                None => Some(Signal::HoursText),
            };
        }
    }

    None
}

/// Run the reconciliation, normalizing the date column first.
pub fn reconcile(table: &Table, columns: &ColumnMap, target_date: NaiveDate) -> Reconciliation {
    let dates = normalize_dates(table, &columns.date);
    reconcile_with_dates(table, columns, &dates, target_date)
}

/// Run the reconciliation against already-normalized dates (one per row).
pub fn reconcile_with_dates(
    table: &Table,
    columns: &ColumnMap,
    dates: &[Option<NaiveDate>],
    target_date: NaiveDate,
) -> Reconciliation {
    let idx = Indices::new(table, columns);
    let members = all_members(table, columns);

    let mut present: Vec<PresenceRecord> = Vec::new();
    let mut position: HashMap<String, usize> = HashMap::new();
    let mut target_rows = 0;

    for (row, date) in table.rows.iter().zip(dates.iter()) {
        if *date != Some(target_date) {
            continue;
        }
        target_rows += 1;

        let Some(name) = member_name(row, idx.member) else {
            continue;
        };

        if presence_signal(row, idx.status, idx.hours).is_none() {
            continue;
        }

        let record = PresenceRecord {
            name: name.clone(),
            status: sample(row.get_opt(idx.status)),
            hours: sample(row.get_opt(idx.hours)),
            email: sample(row.get_opt(idx.email)),
            timestamp: sample(row.get_opt(idx.timestamp)),
        };

        // later qualifying rows overwrite the sample fields
        match position.get(&name).copied() {
            Some(i) => present[i] = record,
            None => {
                position.insert(name, present.len());
                present.push(record);
            }
        }
    }

    let samples = member_samples(table, idx);
    let missing = members
        .iter()
        .filter(|m| !position.contains_key(*m))
        .map(|m| {
            let (email, hours) = samples.get(m).cloned().unwrap_or_default();
            MissingRecord {
                name: m.clone(),
                email,
                hours,
            }
        })
        .collect();

    Reconciliation {
        target_date,
        all_members: members,
        present,
        missing,
        target_rows,
    }
}

/// First non-blank (email, hours) seen for each member across all dates.
fn member_samples(table: &Table, idx: Indices) -> HashMap<String, (String, String)> {
    let mut out: HashMap<String, (String, String)> = HashMap::new();

    for row in &table.rows {
        let Some(name) = member_name(row, idx.member) else {
            continue;
        };
        let entry = out.entry(name).or_default();
        if entry.0.is_empty() {
            entry.0 = sample(row.get_opt(idx.email));
        }
        if entry.1.is_empty() {
            entry.1 = sample(row.get_opt(idx.hours));
        }
    }

    out
}
