pub mod check;
pub mod columns;
pub mod config;
pub mod init;

use crate::config::Config;
use crate::errors::{AppError, AppResult};

/// Source argument, falling back to the configured EXCEL_URL.
pub(crate) fn resolve_source(arg: &Option<String>, cfg: &Config) -> AppResult<String> {
    arg.clone()
        .or_else(|| cfg.source.clone())
        .ok_or_else(|| {
            AppError::Config("no source given: pass a path/URL or set EXCEL_URL".to_string())
        })
}
