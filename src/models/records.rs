use chrono::NaiveDate;
use serde::Serialize;

/// Evidence that a member submitted on the target date, sampled from the
/// last qualifying row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PresenceRecord {
    pub name: String,
    pub status: String,
    pub hours: String,
    pub email: String,
    pub timestamp: String,
}

/// A member with no qualifying row on the target date.
/// `email` and `hours` are best-effort samples from any date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MissingRecord {
    pub name: String,
    pub email: String,
    pub hours: String,
}

/// Outcome of the general reconciliation for one target date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reconciliation {
    pub target_date: NaiveDate,
    pub all_members: Vec<String>,
    pub present: Vec<PresenceRecord>,
    pub missing: Vec<MissingRecord>,
    pub target_rows: usize,
}

impl Reconciliation {
    pub fn is_present(&self, name: &str) -> bool {
        self.present.iter().any(|p| p.name == name)
    }

    pub fn is_missing(&self, name: &str) -> bool {
        self.missing.iter().any(|m| m.name == name)
    }

    pub fn missing_names(&self) -> Vec<&str> {
        self.missing.iter().map(|m| m.name.as_str()).collect()
    }
}

/// Result of the single-member absence check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum WatchOutcome {
    /// No row for the member on the target date.
    NoEntry,
    /// A row exists but its hours are blank, "0" or "0.0".
    ZeroHours { hours: String },
    /// A row exists with some other hours value.
    Present { hours: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WatchCheck {
    pub member: String,
    pub target_date: NaiveDate,
    pub outcome: WatchOutcome,
}

impl WatchCheck {
    pub fn is_absent(&self) -> bool {
        !matches!(self.outcome, WatchOutcome::Present { .. })
    }
}
