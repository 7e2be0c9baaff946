// src/export/model.rs

use crate::models::Reconciliation;
use serde::Serialize;

/// Flat per-member row written by every export format.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct MemberExport {
    pub date: String,
    pub member: String,
    pub state: String,
    pub status: String,
    pub hours: String,
    pub email: String,
    pub timestamp: String,
}

/// Header for CSV / XLSX
pub(crate) fn get_headers() -> Vec<&'static str> {
    vec![
        "date",
        "member",
        "state",
        "status",
        "hours",
        "email",
        "timestamp",
    ]
}

pub(crate) fn member_to_row(m: &MemberExport) -> Vec<String> {
    vec![
        m.date.clone(),
        m.member.clone(),
        m.state.clone(),
        m.status.clone(),
        m.hours.clone(),
        m.email.clone(),
        m.timestamp.clone(),
    ]
}

/// One row per known member, in roster order.
pub fn rows_from(rec: &Reconciliation) -> Vec<MemberExport> {
    let date = rec.target_date.format("%Y-%m-%d").to_string();

    rec.all_members
        .iter()
        .map(|name| {
            if let Some(p) = rec.present.iter().find(|p| &p.name == name) {
                MemberExport {
                    date: date.clone(),
                    member: name.clone(),
                    state: "present".to_string(),
                    status: p.status.clone(),
                    hours: p.hours.clone(),
                    email: p.email.clone(),
                    timestamp: p.timestamp.clone(),
                }
            } else {
                let m = rec.missing.iter().find(|m| &m.name == name);
                MemberExport {
                    date: date.clone(),
                    member: name.clone(),
                    state: "missing".to_string(),
                    status: String::new(),
                    hours: m.map(|m| m.hours.clone()).unwrap_or_default(),
                    email: m.map(|m| m.email.clone()).unwrap_or_default(),
                    timestamp: String::new(),
                }
            }
        })
        .collect()
}
