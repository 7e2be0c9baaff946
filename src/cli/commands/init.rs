use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use std::path::Path;

/// Handle the `init` command: create the configuration file if missing.
pub fn handle(path: &Path) -> AppResult<()> {
    if Config::init_file(path)? {
        success(format!("Config file created: {}", path.display()));
        info("Set SMTP and recipient values there or through environment variables.");
    } else {
        info(format!("Config file already exists: {}", path.display()));
    }
    Ok(())
}
