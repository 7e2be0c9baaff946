use rstatuscheck::core::resolver::{keywords_for, resolve, resolve_columns};
use rstatuscheck::errors::AppError;
use rstatuscheck::models::Role;

fn headers(h: &[&str]) -> Vec<String> {
    h.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_resolves_standard_headers() {
    let cols = resolve_columns(&headers(&["Member Name", "Date", "Status", "Hours"])).unwrap();

    assert_eq!(cols.member, "Member Name");
    assert_eq!(cols.date, "Date");
    assert_eq!(cols.status.as_deref(), Some("Status"));
    assert_eq!(cols.hours.as_deref(), Some("Hours"));
    assert_eq!(cols.email, None);
    assert_eq!(cols.timestamp, None);
}

#[test]
fn test_keyword_priority_beats_column_order() {
    // "member" outranks "name" even though "Full Name" comes first
    let h = headers(&["Full Name", "Team Member", "Date"]);
    assert_eq!(resolve(&h, keywords_for(Role::Member)), Some("Team Member"));
}

#[test]
fn test_first_matching_column_wins_for_same_keyword() {
    let h = headers(&["Start Date", "End Date"]);
    assert_eq!(resolve(&h, &["date"]), Some("Start Date"));
}

#[test]
fn test_substring_match_is_case_insensitive_and_greedy() {
    // known fragility: "name" also matches "Username"
    let h = headers(&["Username", "DATE"]);
    assert_eq!(resolve(&h, &["name"]), Some("Username"));
    assert_eq!(resolve(&h, &["date"]), Some("DATE"));
}

#[test]
fn test_google_form_headers() {
    let cols = resolve_columns(&headers(&[
        "Timestamp",
        "Email Address",
        "Your Name",
        "Date of work",
        "What did you work on today?",
        "Hours worked",
        "Daily update",
    ]))
    .unwrap();

    assert_eq!(cols.member, "Your Name");
    assert_eq!(cols.date, "Date of work");
    assert_eq!(cols.email.as_deref(), Some("Email Address"));
    assert_eq!(cols.hours.as_deref(), Some("Hours worked"));
    assert_eq!(cols.status.as_deref(), Some("Daily update"));
    assert_eq!(cols.timestamp.as_deref(), Some("Timestamp"));
}

#[test]
fn test_missing_member_column_is_fatal() {
    let err = resolve_columns(&headers(&["Date", "Status"])).unwrap_err();
    assert!(matches!(err, AppError::MissingColumn("member")));
    assert!(err.to_string().contains("member"));
}

#[test]
fn test_missing_date_column_is_fatal() {
    let err = resolve_columns(&headers(&["Member", "Status"])).unwrap_err();
    assert!(matches!(err, AppError::MissingColumn("date")));
}

#[test]
fn test_optional_roles_may_be_absent() {
    let cols = resolve_columns(&headers(&["Member", "Date"])).unwrap();
    assert!(cols.status.is_none());
    assert!(cols.hours.is_none());
    assert!(cols.email.is_none());
}

#[test]
fn test_only_member_and_date_are_mandatory() {
    let mandatory: Vec<Role> = [
        Role::Member,
        Role::Date,
        Role::Status,
        Role::Hours,
        Role::Email,
        Role::Timestamp,
    ]
    .into_iter()
    .filter(Role::is_mandatory)
    .collect();
    assert_eq!(mandatory, vec![Role::Member, Role::Date]);
}
