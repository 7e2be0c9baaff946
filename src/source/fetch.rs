use crate::errors::{AppError, AppResult};
use reqwest::blocking::Client;
use std::time::Duration;

const FETCH_TIMEOUT: Duration = Duration::from_secs(60);

pub fn is_remote(source: &str) -> bool {
    let s = source.trim_start().to_ascii_lowercase();
    s.starts_with("http://") || s.starts_with("https://")
}

/// Download the whole document into memory. No retries: any transport error
/// or non-2xx status fails the run.
pub(crate) fn fetch_bytes(url: &str) -> AppResult<Vec<u8>> {
    let fail = |reason: String| AppError::Fetch {
        url: url.to_string(),
        reason,
    };

    let client = Client::builder()
        .timeout(FETCH_TIMEOUT)
        .build()
        .map_err(|e| fail(e.to_string()))?;

    let resp = client.get(url).send().map_err(|e| fail(e.to_string()))?;

    let status = resp.status();
    if !status.is_success() {
        return Err(fail(format!("HTTP {status}")));
    }

    let body = resp.bytes().map_err(|e| fail(e.to_string()))?;
    Ok(body.to_vec())
}
