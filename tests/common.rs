#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::NaiveDate;
use rstatuscheck::errors::AppResult;
use rstatuscheck::models::{Cell, Row, Table};
use rstatuscheck::notify::{Notification, Transport};
use std::cell::RefCell;
use std::fs;
use std::path::PathBuf;
use std::rc::Rc;
use tempfile::TempDir;

/// Binary under test with a clean environment and a config path that does
/// not exist, so host settings never leak into a test.
pub fn rsc(dir: &TempDir) -> Command {
    let mut cmd = cargo_bin_cmd!("rstatuscheck");
    cmd.env_clear()
        .arg("--config")
        .arg(dir.path().join("missing.conf"));
    cmd
}

/// Write `content` to `<dir>/<name>` and return the path.
pub fn write_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).expect("write fixture");
    path
}

pub fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("valid date")
}

/// Build an in-memory table; "" becomes an empty cell.
pub fn table(headers: &[&str], rows: &[&[&str]]) -> Table {
    Table::new(
        headers.iter().map(|h| h.to_string()).collect(),
        rows.iter()
            .map(|r| Row::new(r.iter().map(|v| Cell::from_text(v)).collect()))
            .collect(),
    )
}

/// Standard sheet used by several tests (target date 2025-03-14):
/// Alice submits status, Bob logs hours only, Carol logs zero hours,
/// Dave only appears on another day.
pub const TEAM_CSV: &str = "\
 Member Name , Date ,Status, Hours ,Email
Alice,2025-03-14,Fixed login bug,8,alice@example.com
Bob,14/03/2025,,5,bob@example.com
Carol,2025-03-14,,0,carol@example.com
Dave,2025-03-13,Wrote docs,6,dave@example.com
Alice,2025-03-13,Review,7,alice@example.com
";

/// Transport that records every message instead of sending it.
#[derive(Clone, Default)]
pub struct Recorder {
    pub sent: Rc<RefCell<Vec<Notification>>>,
}

impl Transport for Recorder {
    fn name(&self) -> &'static str {
        "recorder"
    }

    fn send(&self, note: &Notification) -> AppResult<()> {
        self.sent.borrow_mut().push(note.clone());
        Ok(())
    }
}
