mod common;
use common::{TEAM_CSV, date, write_file};
use rstatuscheck::core::reconcile::reconcile;
use rstatuscheck::core::resolver::resolve_columns;
use rstatuscheck::errors::AppError;
use rstatuscheck::models::Cell;
use rstatuscheck::source::{SourceKind, data_to_cell, is_remote, load_table};
use rust_xlsxwriter::{ExcelDateTime, Format, Workbook};
use tempfile::tempdir;

#[test]
fn test_csv_headers_are_trimmed() {
    let dir = tempdir().unwrap();
    let path = write_file(&dir, "team.csv", TEAM_CSV);

    let t = load_table(path.to_str().unwrap(), None).unwrap();
    assert_eq!(t.headers, vec!["Member Name", "Date", "Status", "Hours", "Email"]);
    assert_eq!(t.len(), 5);
    assert_eq!(t.rows[1].get(2), &Cell::Empty);
}

#[test]
fn test_csv_bom_and_ragged_rows() {
    let dir = tempdir().unwrap();
    let path = write_file(
        &dir,
        "bom.csv",
        "\u{feff}Member,Date,Status\nAlice,2025-03-14\nBob,2025-03-14,done,extra\n",
    );

    let t = load_table(path.to_str().unwrap(), None).unwrap();
    assert_eq!(t.headers[0], "Member");
    assert_eq!(t.rows[0].get(2), &Cell::Empty);
    assert_eq!(t.rows[1].get(2), &Cell::Text("done".into()));
}

#[test]
fn test_header_only_csv_is_empty_table() {
    let dir = tempdir().unwrap();
    let path = write_file(&dir, "empty.csv", "Member,Date\n");

    let t = load_table(path.to_str().unwrap(), None).unwrap();
    assert!(t.is_empty());
}

#[test]
fn test_unsupported_extension() {
    let err = load_table("/tmp/whatever/team.txt", None).unwrap_err();
    assert!(matches!(err, AppError::UnsupportedFormat(ref e) if e == "txt"));
    assert!(err.to_string().contains("txt"));
}

#[test]
fn test_missing_local_file_is_io_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nope.csv");
    let err = load_table(path.to_str().unwrap(), None).unwrap_err();
    assert!(matches!(err, AppError::Io(_)));
}

#[test]
fn test_kind_detection() {
    assert_eq!(SourceKind::detect("team.CSV").unwrap(), SourceKind::Csv);
    assert_eq!(
        SourceKind::detect("https://host/files/team.xlsx?dl=1#top").unwrap(),
        SourceKind::Xlsx
    );
    assert_eq!(
        SourceKind::detect("https://docs.example.com/d/abc/export?gid=0&format=csv").unwrap(),
        SourceKind::Csv
    );
    assert_eq!(SourceKind::detect("legacy.xls").unwrap(), SourceKind::Xls);
    assert!(SourceKind::detect("https://host/sheet").is_err());
}

#[test]
fn test_remote_detection() {
    assert!(is_remote("https://example.com/a.csv"));
    assert!(is_remote("HTTP://example.com/a.csv"));
    assert!(!is_remote("/data/a.csv"));
    assert!(!is_remote("C:\\data\\a.csv"));
}

#[test]
fn test_declared_kind_overrides_extension() {
    let dir = tempdir().unwrap();
    let path = write_file(&dir, "team.dat", TEAM_CSV);

    let t = load_table(path.to_str().unwrap(), Some(SourceKind::Csv)).unwrap();
    assert_eq!(t.len(), 5);
}

#[test]
fn test_csv_and_xlsx_give_same_result() {
    let dir = tempdir().unwrap();
    let csv_path = write_file(&dir, "team.csv", TEAM_CSV);
    let xlsx_path = dir.path().join("team.xlsx");

    // same content as TEAM_CSV, with typed cells
    let mut wb = Workbook::new();
    let ws = wb.add_worksheet();
    let date_fmt = Format::new().set_num_format("yyyy-mm-dd");
    for (c, h) in [" Member Name ", " Date ", "Status", " Hours ", "Email"]
        .iter()
        .enumerate()
    {
        ws.write_string(0, c as u16, *h).unwrap();
    }
    let rows: [(&str, (u16, u8, u8), &str, f64, &str); 5] = [
        ("Alice", (2025, 3, 14), "Fixed login bug", 8.0, "alice@example.com"),
        ("Bob", (2025, 3, 14), "", 5.0, "bob@example.com"),
        ("Carol", (2025, 3, 14), "", 0.0, "carol@example.com"),
        ("Dave", (2025, 3, 13), "Wrote docs", 6.0, "dave@example.com"),
        ("Alice", (2025, 3, 13), "Review", 7.0, "alice@example.com"),
    ];
    for (i, (name, (y, m, d), status, hours, email)) in rows.iter().enumerate() {
        let r = (i + 1) as u32;
        ws.write_string(r, 0, *name).unwrap();
        let dt = ExcelDateTime::from_ymd(*y, *m, *d).unwrap();
        ws.write_datetime_with_format(r, 1, &dt, &date_fmt).unwrap();
        if !status.is_empty() {
            ws.write_string(r, 2, *status).unwrap();
        }
        ws.write_number(r, 3, *hours).unwrap();
        ws.write_string(r, 4, *email).unwrap();
    }
    wb.save(&xlsx_path).unwrap();

    let from_csv = load_table(csv_path.to_str().unwrap(), None).unwrap();
    let from_xlsx = load_table(xlsx_path.to_str().unwrap(), None).unwrap();
    assert_eq!(from_csv.headers, from_xlsx.headers);

    let target = date("2025-03-14");
    let cols = resolve_columns(&from_csv.headers).unwrap();
    let a = reconcile(&from_csv, &cols, target);
    let b = reconcile(&from_xlsx, &cols, target);

    assert_eq!(a.all_members, b.all_members);
    assert_eq!(a.present, b.present);
    assert_eq!(a.missing, b.missing);
    assert_eq!(a.missing_names(), vec!["Carol", "Dave"]);
}

#[test]
fn test_workbook_date_cells_honor_the_1904_system() {
    use calamine::{Data, ExcelDateTime as SheetDate, ExcelDateTimeType};

    let target = date("2025-03-14").and_hms_opt(0, 0, 0).unwrap();

    let std_1900 = Data::DateTime(SheetDate::new(45730.0, ExcelDateTimeType::DateTime, false));
    assert_eq!(data_to_cell(&std_1900), Cell::Date(target));

    // same day stored as a 1904-based serial (1462 days smaller)
    let mac_1904 = Data::DateTime(SheetDate::new(44268.0, ExcelDateTimeType::DateTime, true));
    assert_eq!(data_to_cell(&mac_1904), Cell::Date(target));

    // durations are not calendar dates
    let duration = Data::DateTime(SheetDate::new(0.5, ExcelDateTimeType::TimeDelta, false));
    assert_eq!(data_to_cell(&duration), Cell::Number(0.5));
}
