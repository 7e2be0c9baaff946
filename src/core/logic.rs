//! The status-check pipeline:
//! load → resolve columns → normalize dates → reconcile → compose → notify.

use crate::config::Config;
use crate::core::dates::normalize_dates;
use crate::core::reconcile::reconcile_with_dates;
use crate::core::report::{Report, compose_absent, compose_summary};
use crate::core::resolver::resolve_columns;
use crate::core::watch::check_member;
use crate::errors::{AppError, AppResult};
use crate::export::export_reconciliation;
use crate::models::{ColumnMap, Reconciliation, Role, Table, WatchCheck, WatchOutcome};
use crate::notify::Notifier;
use crate::source::{SourceKind, load_table};
use crate::ui::messages::{detail, header, info, success, warning};
use crate::utils::table::Table as TextTable;
use chrono::NaiveDate;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct CheckOptions {
    pub source: String,
    pub kind: Option<SourceKind>,
    pub target_date: NaiveDate,
    pub export: Option<PathBuf>,
    pub force: bool,
}

/// What one run decided and delivered.
#[derive(Debug, Clone, Default)]
pub struct CheckOutcome {
    pub reconciliation: Option<Reconciliation>,
    pub watch: Option<WatchCheck>,
    /// Subjects of the messages handed to the transport, in order.
    pub delivered: Vec<String>,
}

/// A composed report together with the addresses it goes to.
struct Outgoing {
    report: Report,
    recipients: Vec<String>,
    label: &'static str,
}

pub struct StatusCheck;

impl StatusCheck {
    /// Load the source and run the whole pipeline.
    pub fn run(cfg: &Config, opts: &CheckOptions, notifier: &Notifier) -> AppResult<CheckOutcome> {
        header(format!("Status check for {}", opts.target_date));
        let table = load_table(&opts.source, opts.kind)?;
        Self::run_table(cfg, &table, opts, notifier)
    }

    /// Run the pipeline on an already loaded table.
    pub fn run_table(
        cfg: &Config,
        table: &Table,
        opts: &CheckOptions,
        notifier: &Notifier,
    ) -> AppResult<CheckOutcome> {
        if table.is_empty() {
            warning("The sheet has no data rows: nothing to check.");
            return Ok(CheckOutcome::default());
        }

        let columns = resolve_columns(&table.headers)?;
        print_columns(&columns);

        let dates = normalize_dates(table, &columns.date);
        let unparsed = dates.iter().filter(|d| d.is_none()).count();
        if unparsed > 0 {
            warning(format!(
                "{unparsed} row(s) have an unreadable date and were ignored"
            ));
        }

        let rec = reconcile_with_dates(table, &columns, &dates, opts.target_date);
        print_reconciliation(&rec);

        let watch = check_member(table, &columns, &dates, opts.target_date, &cfg.watch_member);
        print_watch(&watch);

        if let Some(path) = &opts.export {
            export_reconciliation(&rec, path, opts.force)?;
        }

        let mut outgoing = Vec::new();
        match compose_summary(&rec) {
            Some(report) => outgoing.push(Outgoing {
                report,
                recipients: cfg.summary_recipients.clone(),
                label: "summary (EMAIL_RECIPIENT)",
            }),
            None => success(format!(
                "All members submitted status for {}",
                opts.target_date
            )),
        }
        if let Some(report) = compose_absent(&watch) {
            outgoing.push(Outgoing {
                report,
                recipients: cfg.absent_recipient.iter().cloned().collect(),
                label: "absence notice (ABSENT_RECIPIENT)",
            });
        }

        // all configuration problems surface before the first message leaves
        if notifier.is_live() && !outgoing.is_empty() {
            notifier.preflight()?;
            if let Some(o) = outgoing.iter().find(|o| o.recipients.is_empty()) {
                return Err(AppError::Config(format!(
                    "no recipient configured for the {}",
                    o.label
                )));
            }
        }

        let mut delivered = Vec::new();
        for o in &outgoing {
            notifier.deliver(&o.report.subject, &o.report.body, &o.recipients)?;
            delivered.push(o.report.subject.clone());
        }

        Ok(CheckOutcome {
            reconciliation: Some(rec),
            watch: Some(watch),
            delivered,
        })
    }
}

pub fn print_columns(columns: &ColumnMap) {
    info("Detected columns:");
    for role in [
        Role::Member,
        Role::Date,
        Role::Status,
        Role::Hours,
        Role::Email,
        Role::Timestamp,
    ] {
        detail(role.as_str(), columns.get(role).unwrap_or("(not found)"));
    }
}

fn print_reconciliation(rec: &Reconciliation) {
    info(format!(
        "{} member(s) known, {} row(s) dated {}",
        rec.all_members.len(),
        rec.target_rows,
        rec.target_date
    ));

    let mut table = TextTable::with_headers(&["Member", "State", "Hours", "Status"]);
    for p in &rec.present {
        table.add_row(vec![
            p.name.clone(),
            "present".to_string(),
            p.hours.clone(),
            p.status.clone(),
        ]);
    }
    for m in &rec.missing {
        table.add_row(vec![
            m.name.clone(),
            "missing".to_string(),
            String::new(),
            String::new(),
        ]);
    }
    println!("{}", table.render());

    if !rec.missing.is_empty() {
        warning(format!(
            "Missing status for {}: {}",
            rec.target_date,
            rec.missing_names().join(", ")
        ));
    }
}

fn print_watch(watch: &WatchCheck) {
    match &watch.outcome {
        WatchOutcome::NoEntry => warning(format!(
            "{}: no entry on {}, absence notice queued",
            watch.member, watch.target_date
        )),
        WatchOutcome::ZeroHours { hours } => warning(format!(
            "{}: hours '{}' on {}, absence notice queued",
            watch.member, hours, watch.target_date
        )),
        WatchOutcome::Present { hours } => info(format!(
            "{}: present on {} with {} hour(s)",
            watch.member, watch.target_date, hours
        )),
    }
}
