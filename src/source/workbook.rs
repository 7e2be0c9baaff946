// src/source/workbook.rs

use crate::errors::{AppError, AppResult};
use crate::models::{Cell, Row, Table};
use calamine::{Data, ExcelDateTime, Reader, open_workbook_auto_from_rs};
use std::io::Cursor;

/// Read the first worksheet of an xlsx/xls document; row 1 is the header.
pub(crate) fn read_workbook(bytes: Vec<u8>) -> AppResult<Table> {
    let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes))
        .map_err(|e| AppError::Spreadsheet(format!("cannot open workbook: {e}")))?;

    let sheet_name = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or_else(|| AppError::Spreadsheet("workbook has no sheets".to_string()))?;

    let range = workbook
        .worksheet_range(&sheet_name)
        .map_err(|e| AppError::Spreadsheet(format!("cannot read sheet '{sheet_name}': {e}")))?;

    let mut rows = range.rows();
    let headers: Vec<String> = match rows.next() {
        Some(header) => header.iter().map(|c| data_to_cell(c).to_string()).collect(),
        None => return Ok(Table::default()),
    };

    let body = rows
        .map(|r| Row::new(r.iter().map(data_to_cell).collect()))
        .filter(|r| r.cells.iter().any(|c| !c.is_empty()))
        .collect();

    Ok(Table::new(headers, body))
}

/// Convert one calamine cell into a table cell.
pub fn data_to_cell(cell: &Data) -> Cell {
    match cell {
        Data::Empty => Cell::Empty,
        Data::String(s) if s.is_empty() => Cell::Empty,
        Data::String(s) => Cell::Text(s.clone()),
        Data::Int(n) => Cell::Number(*n as f64),
        Data::Float(f) => Cell::Number(*f),
        Data::Bool(b) => Cell::Bool(*b),
        Data::Error(e) => Cell::Text(format!("#ERR({e:?})")),
        Data::DateTime(dt) => date_cell(dt),
        Data::DateTimeIso(s) => Cell::Text(s.clone()),
        Data::DurationIso(s) => Cell::Text(s.clone()),
    }
}

/// Date-formatted cell; calamine applies the workbook's 1900/1904 epoch.
fn date_cell(dt: &ExcelDateTime) -> Cell {
    if dt.is_duration() {
        return Cell::Number(dt.as_f64());
    }
    match dt.as_datetime() {
        Some(v) => Cell::Date(v),
        None => Cell::Number(dt.as_f64()),
    }
}
