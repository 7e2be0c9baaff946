// src/source/mod.rs

mod delimited;
pub(crate) mod excel_date;
mod fetch;
mod workbook;

pub use fetch::is_remote;
pub use workbook::data_to_cell;

use crate::errors::{AppError, AppResult};
use crate::models::Table;
use crate::ui::messages::info;
use clap::ValueEnum;
use std::path::Path;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum SourceKind {
    Csv,
    Xlsx,
    Xls,
}

impl SourceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceKind::Csv => "csv",
            SourceKind::Xlsx => "xlsx",
            SourceKind::Xls => "xls",
        }
    }

    pub fn from_ext(ext: &str) -> AppResult<Self> {
        match ext.trim().trim_start_matches('.').to_ascii_lowercase().as_str() {
            "csv" => Ok(SourceKind::Csv),
            "xlsx" => Ok(SourceKind::Xlsx),
            "xls" => Ok(SourceKind::Xls),
            other => Err(AppError::UnsupportedFormat(if other.is_empty() {
                "(none)".to_string()
            } else {
                other.to_string()
            })),
        }
    }

    /// Detect the kind from the file extension, ignoring any query string or
    /// fragment. Export links without an extension (`.../export?format=csv`)
    /// fall back to their `format` query parameter.
    pub fn detect(source: &str) -> AppResult<Self> {
        let no_fragment = source.split('#').next().unwrap_or(source);
        let (path, query) = match no_fragment.split_once('?') {
            Some((p, q)) => (p, Some(q)),
            None => (no_fragment, None),
        };

        let ext = Path::new(path)
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_string);

        if let Some(ext) = ext {
            return Self::from_ext(&ext);
        }

        let from_query = query.and_then(|q| {
            q.split('&')
                .filter_map(|pair| pair.split_once('='))
                .find(|(k, _)| k.eq_ignore_ascii_case("format"))
                .map(|(_, v)| v.to_string())
        });

        Self::from_ext(from_query.as_deref().unwrap_or(""))
    }
}

/// Load a table from a local path or an http(s) URL.
///
/// `declared` overrides extension detection.
pub fn load_table(source: &str, declared: Option<SourceKind>) -> AppResult<Table> {
    let kind = match declared {
        Some(k) => k,
        None => SourceKind::detect(source)?,
    };

    let bytes = if is_remote(source) {
        fetch::fetch_bytes(source)?
    } else {
        std::fs::read(source)?
    };

    info(format!(
        "Loaded {} bytes from {} ({})",
        bytes.len(),
        source,
        kind.as_str()
    ));

    parse_bytes(bytes, kind)
}

/// Parse an in-memory document of the given kind.
pub fn parse_bytes(bytes: Vec<u8>, kind: SourceKind) -> AppResult<Table> {
    match kind {
        SourceKind::Csv => delimited::read_csv(&bytes),
        SourceKind::Xlsx | SourceKind::Xls => workbook::read_workbook(bytes),
    }
}
