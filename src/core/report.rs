use crate::models::{Reconciliation, WatchCheck, WatchOutcome};
use chrono::NaiveDate;

/// Subject and plain-text body of one outgoing message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub subject: String,
    pub body: String,
}

pub fn summary_subject(date: NaiveDate) -> String {
    format!("Missing Status Reports for {}", date.format("%Y-%m-%d"))
}

pub fn absent_subject(member: &str, date: NaiveDate) -> String {
    format!("Absent: {} on {}", member, date.format("%Y-%m-%d"))
}

/// Summary of missing members; `None` when everybody submitted.
pub fn compose_summary(rec: &Reconciliation) -> Option<Report> {
    if rec.missing.is_empty() {
        return None;
    }

    let date = rec.target_date.format("%Y-%m-%d");
    let mut lines = vec![
        format!("Missing status reports for {date}:"),
        String::new(),
    ];

    for m in &rec.missing {
        let email = if m.email.is_empty() { "-" } else { &m.email };
        let hours = if m.hours.is_empty() { "-" } else { &m.hours };
        lines.push(format!("- {} (email: {email}, hours: {hours})", m.name));
    }

    lines.push(String::new());
    lines.push(format!(
        "{} of {} members submitted.",
        rec.present.len(),
        rec.all_members.len()
    ));

    Some(Report {
        subject: summary_subject(rec.target_date),
        body: lines.join("\n"),
    })
}

/// Personal absence notice; `None` when the check found worked hours.
pub fn compose_absent(check: &WatchCheck) -> Option<Report> {
    if !check.is_absent() {
        return None;
    }

    let date = check.target_date.format("%Y-%m-%d");
    let reason = match &check.outcome {
        WatchOutcome::NoEntry => "no status entry was found".to_string(),
        WatchOutcome::ZeroHours { hours } if hours.is_empty() => {
            "the status entry has no worked hours".to_string()
        }
        WatchOutcome::ZeroHours { hours } => {
            format!("the status entry reports {hours} worked hours")
        }
        WatchOutcome::Present { .. } => return None,
    };

    let body = format!(
        "Hi {member},\n\n\
         You were marked absent on {date}: {reason}.\n\n\
         If you worked that day, please update the status sheet.\n\n\
         Thanks.",
        member = check.member,
    );

    Some(Report {
        subject: absent_subject(&check.member, check.target_date),
        body,
    })
}
