use crate::errors::AppResult;
use crate::models::{Cell, Row, Table};
use csv::ReaderBuilder;

/// Parse comma-separated text with a header line.
///
/// Rows may be shorter or longer than the header; every value is kept as text
/// and empty fields become `Cell::Empty`.
pub(crate) fn read_csv(bytes: &[u8]) -> AppResult<Table> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(bytes);

    let headers: Vec<String> = rdr
        .headers()?
        .iter()
        .enumerate()
        .map(|(i, h)| {
            if i == 0 {
                h.trim_start_matches('\u{feff}').to_string()
            } else {
                h.to_string()
            }
        })
        .collect();

    let mut rows = Vec::new();
    for record in rdr.records() {
        let record = record?;
        rows.push(Row::new(record.iter().map(Cell::from_text).collect()));
    }

    Ok(Table::new(headers, rows))
}
