use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};
use std::path::Path;
use std::process::Command;

pub struct ConfigLogic;

impl ConfigLogic {
    /// Print the effective configuration (file + environment), password masked.
    pub fn print(cfg: &Config, path: &Path) -> AppResult<()> {
        println!("📄 Configuration file: {}", path.display());
        if !path.exists() {
            warning("File not found: showing defaults and environment overrides");
        }
        println!();
        println!("{}", cfg.redacted().to_yaml()?);
        Ok(())
    }

    pub fn edit(path: &Path, editor: &Option<String>) -> AppResult<()> {
        let default_editor = std::env::var("EDITOR")
            .or_else(|_| std::env::var("VISUAL"))
            .unwrap_or_else(|_| {
                if cfg!(target_os = "windows") {
                    "notepad".to_string()
                } else {
                    "nano".to_string()
                }
            });
        let ed = editor.clone().unwrap_or(default_editor);

        let status = Command::new(&ed)
            .arg(path)
            .status()
            .map_err(|e| AppError::Config(format!("cannot start editor '{ed}': {e}")))?;

        if !status.success() {
            return Err(AppError::Config(format!("editor '{ed}' exited with {status}")));
        }

        success(format!("Configuration file edited with '{ed}'"));
        Ok(())
    }
}
