use chrono::{NaiveDateTime, Timelike};
use std::fmt;

/// A single scalar value read from the source sheet.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Empty,
    Text(String),
    Number(f64),
    Date(NaiveDateTime),
    Bool(bool),
}

static EMPTY: Cell = Cell::Empty;

impl Cell {
    /// Build a cell from raw delimited text (empty string → `Empty`).
    pub fn from_text(raw: &str) -> Self {
        if raw.is_empty() {
            Cell::Empty
        } else {
            Cell::Text(raw.to_string())
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Numeric view of the cell: numbers as-is, text parsed after trimming.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Cell::Number(n) => Some(*n),
            Cell::Text(s) => s.trim().parse::<f64>().ok(),
            _ => None,
        }
    }

    /// Trimmed textual view, used for names, emails and report fields.
    pub fn text(&self) -> String {
        self.to_string().trim().to_string()
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Empty => Ok(()),
            Cell::Text(s) => write!(f, "{s}"),
            // whole numbers print without ".0", so "5" in a CSV and 5.0 in a
            // workbook render the same way
            Cell::Number(n) => write!(f, "{n}"),
            Cell::Date(dt) => {
                if dt.num_seconds_from_midnight() == 0 {
                    write!(f, "{}", dt.format("%Y-%m-%d"))
                } else {
                    write!(f, "{}", dt.format("%Y-%m-%d %H:%M:%S"))
                }
            }
            Cell::Bool(b) => write!(f, "{b}"),
        }
    }
}

/// One record of the source table.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Row {
    pub cells: Vec<Cell>,
}

impl Row {
    pub fn new(cells: Vec<Cell>) -> Self {
        Self { cells }
    }

    /// Cell at `idx`; ragged rows yield `Empty` past their end.
    pub fn get(&self, idx: usize) -> &Cell {
        self.cells.get(idx).unwrap_or(&EMPTY)
    }

    /// Cell for an optionally resolved column; unresolved → `Empty`.
    pub fn get_opt(&self, idx: Option<usize>) -> &Cell {
        idx.map_or(&EMPTY, |i| self.get(i))
    }
}

/// Ordered rows sharing one header line.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Row>,
}

impl Table {
    /// Create a table; header names are trimmed, nothing else is normalized.
    pub fn new(headers: Vec<String>, rows: Vec<Row>) -> Self {
        let headers = headers.into_iter().map(|h| h.trim().to_string()).collect();
        Self { headers, rows }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Index of the first column named exactly `name`.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }
}
