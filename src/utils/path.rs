//! Path helpers for user-supplied file arguments.

use std::path::PathBuf;

/// Expand a leading `~/` to the home directory; other paths pass through.
pub fn expand_tilde(path: &str) -> PathBuf {
    match (path.strip_prefix("~/"), dirs::home_dir()) {
        (Some(rest), Some(home)) => home.join(rest),
        _ => PathBuf::from(path),
    }
}
