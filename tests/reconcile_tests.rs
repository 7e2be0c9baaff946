mod common;
use common::{date, table};
use rstatuscheck::core::blank::{is_blank, is_blank_str};
use rstatuscheck::core::reconcile::{Signal, all_members, presence_signal, reconcile};
use rstatuscheck::core::resolver::resolve_columns;
use rstatuscheck::models::{Cell, Row, Table};

fn run(t: &Table, target: &str) -> rstatuscheck::models::Reconciliation {
    let cols = resolve_columns(&t.headers).unwrap();
    reconcile(t, &cols, date(target))
}

#[test]
fn test_blank_predicate() {
    for v in ["", "   ", "nan", "NaN", "None", "n/a", "N/A", "-", " - "] {
        assert!(is_blank_str(v), "{v:?} should be blank");
    }
    for v in ["0", "done", "--", "na"] {
        assert!(!is_blank_str(v), "{v:?} should not be blank");
    }
    assert!(is_blank(&Cell::Empty));
    assert!(is_blank(&Cell::Number(f64::NAN)));
    assert!(!is_blank(&Cell::Number(0.0)));
}

#[test]
fn test_everyone_with_status_means_nobody_missing() {
    let t = table(
        &["Member Name", "Date", "Status"],
        &[
            &["Alice", "2025-03-14", "done"],
            &["Bob", "2025-03-14", "working on API"],
            &["Alice", "2025-03-13", "older"],
        ],
    );
    let rec = run(&t, "2025-03-14");

    assert!(rec.missing.is_empty());
    assert_eq!(rec.present.len(), 2);
}

#[test]
fn test_all_members_first_seen_order_without_duplicates() {
    let t = table(
        &["Member", "Date"],
        &[
            &["  Carol ", "2025-03-10"],
            &["Alice", "2025-03-11"],
            &["Carol", "2025-03-12"],
            &["", "2025-03-12"],
            &["alice", "2025-03-12"],
            &["Alice ", "2025-03-13"],
        ],
    );
    let cols = resolve_columns(&t.headers).unwrap();

    // exact match after trimming: "alice" and "Alice" are different members
    assert_eq!(all_members(&t, &cols), vec!["Carol", "Alice", "alice"]);
}

#[test]
fn test_hours_rules_without_status() {
    let t = table(
        &["Member", "Date", "Status", "Hours"],
        &[
            &["Five", "2025-03-14", "", "5"],
            &["Zero", "2025-03-14", "", "0"],
            &["Text", "2025-03-14", "nan", "abc"],
            &["Negative", "2025-03-14", "", "-2"],
            &["Blank", "2025-03-14", "-", "n/a"],
        ],
    );
    let rec = run(&t, "2025-03-14");

    assert!(rec.is_present("Five"));
    assert!(rec.is_missing("Zero"));
    assert!(rec.is_present("Text"));
    assert!(rec.is_missing("Negative"));
    assert!(rec.is_missing("Blank"));
}

#[test]
fn test_presence_signal_precedence() {
    let row = Row::new(vec![Cell::Text("done".into()), Cell::Text("0".into())]);
    assert_eq!(presence_signal(&row, Some(0), Some(1)), Some(Signal::Status));

    let row = Row::new(vec![Cell::Empty, Cell::Number(7.5)]);
    assert_eq!(presence_signal(&row, Some(0), Some(1)), Some(Signal::Hours(7.5)));

    let row = Row::new(vec![Cell::Empty, Cell::Text("half day".into())]);
    assert_eq!(presence_signal(&row, Some(0), Some(1)), Some(Signal::HoursText));

    // no status and no hours column resolved: no signal at all
    let row = Row::new(vec![Cell::Text("done".into())]);
    assert_eq!(presence_signal(&row, None, None), None);
}

#[test]
fn test_only_target_date_rows_count() {
    let t = table(
        &["Member", "Date", "Status"],
        &[
            &["Alice", "2025-03-13", "done"],
            &["Alice", "not a date", "done"],
            &["Bob", "14/03/2025", "done"],
        ],
    );
    let rec = run(&t, "2025-03-14");

    assert_eq!(rec.target_rows, 1);
    assert_eq!(rec.missing_names(), vec!["Alice"]);
    assert!(rec.is_present("Bob"));
}

#[test]
fn test_last_qualifying_row_overwrites_samples() {
    let t = table(
        &["Member", "Date", "Status", "Hours", "Email", "Timestamp"],
        &[
            &["Alice", "2025-03-14", "morning", "2", "a1@example.com", "09:00"],
            &["Alice", "2025-03-14", "", "0", "zero@example.com", "12:00"],
            &["Alice", "2025-03-14", "afternoon", "4", "a2@example.com", "17:00"],
        ],
    );
    let rec = run(&t, "2025-03-14");

    assert_eq!(rec.present.len(), 1);
    let p = &rec.present[0];
    assert_eq!(p.status, "afternoon");
    assert_eq!(p.hours, "4");
    assert_eq!(p.email, "a2@example.com");
    assert_eq!(p.timestamp, "17:00");
}

#[test]
fn test_missing_records_backfill_from_any_date() {
    let t = table(
        &["Member", "Date", "Status", "Hours", "Email"],
        &[
            &["Alice", "2025-03-14", "done", "8", "alice@example.com"],
            &["Bob", "2025-03-10", "", "", "nan"],
            &["Bob", "2025-03-11", "x", "6", "bob@example.com"],
            &["Carol", "2025-03-12", "y", "", ""],
        ],
    );
    let rec = run(&t, "2025-03-14");

    assert_eq!(rec.missing_names(), vec!["Bob", "Carol"]);
    assert_eq!(rec.missing[0].email, "bob@example.com");
    assert_eq!(rec.missing[0].hours, "6");
    assert_eq!(rec.missing[1].email, "");
    assert_eq!(rec.missing[1].hours, "");
}

#[test]
fn test_reconciliation_is_idempotent() {
    let t = table(
        &["Member", "Date", "Status", "Hours"],
        &[
            &["Alice", "2025-03-14", "done", "8"],
            &["Bob", "2025-03-14", "", "0"],
            &["Carol", "2025-03-13", "x", "3"],
        ],
    );

    let first = run(&t, "2025-03-14");
    let second = run(&t, "2025-03-14");
    assert_eq!(first, second);
}

#[test]
fn test_placeholder_member_cells_are_not_members() {
    let t = table(
        &["Member", "Date", "Status"],
        &[
            &["Alice", "2025-03-14", "done"],
            &["N/A", "2025-03-13", "x"],
            &["-", "2025-03-13", "x"],
            &["nan", "2025-03-13", "x"],
            &["None", "2025-03-14", "x"],
        ],
    );
    let cols = resolve_columns(&t.headers).unwrap();

    assert_eq!(all_members(&t, &cols), vec!["Alice"]);

    let rec = run(&t, "2025-03-14");
    assert_eq!(rec.all_members, vec!["Alice"]);
    assert!(rec.missing.is_empty());
    assert_eq!(rec.present.len(), 1);
}
