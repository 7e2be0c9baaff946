use crate::core::watch::DEFAULT_WATCH_MEMBER;
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_SMTP_PORT: u16 = 465;

/// SMTP transport settings. Every field is optional until a real send needs it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SmtpSettings {
    #[serde(default)]
    pub host: Option<String>,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
    /// Sender address; falls back to `username`.
    #[serde(default)]
    pub sender: Option<String>,
}

/// Fully specified SMTP settings, produced by [`SmtpSettings::require`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SmtpCredentials {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub sender: String,
}

fn default_port() -> u16 {
    DEFAULT_SMTP_PORT
}

impl Default for SmtpSettings {
    fn default() -> Self {
        Self {
            host: None,
            port: DEFAULT_SMTP_PORT,
            username: None,
            password: None,
            sender: None,
        }
    }
}

fn default_watch_member() -> String {
    DEFAULT_WATCH_MEMBER.to_string()
}

fn non_empty(v: &Option<String>) -> Option<String> {
    v.as_ref()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

impl SmtpSettings {
    /// Check that host, credentials and sender are all known.
    pub fn require(&self) -> AppResult<SmtpCredentials> {
        let missing = |what: &str, var: &str| {
            AppError::Config(format!("SMTP {what} is not set ({var})"))
        };

        let host = non_empty(&self.host).ok_or_else(|| missing("host", "SMTP_HOST"))?;
        let username = non_empty(&self.username).ok_or_else(|| missing("username", "EMAIL_USER"))?;
        let password = self
            .password
            .clone()
            .filter(|p| !p.is_empty())
            .ok_or_else(|| missing("password", "EMAIL_PASS"))?;
        let sender = non_empty(&self.sender).unwrap_or_else(|| username.clone());

        Ok(SmtpCredentials {
            host,
            port: self.port,
            username,
            password,
            sender,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Default sheet location (path or URL).
    #[serde(default)]
    pub source: Option<String>,
    /// Default target date (YYYY-MM-DD); yesterday when unset.
    #[serde(default)]
    pub target_date: Option<String>,
    #[serde(default)]
    pub smtp: SmtpSettings,
    /// Recipients of the missing-members summary.
    #[serde(default)]
    pub summary_recipients: Vec<String>,
    /// Recipient of the single-member absence notice.
    #[serde(default)]
    pub absent_recipient: Option<String>,
    /// Member watched by the absence check.
    #[serde(default = "default_watch_member")]
    pub watch_member: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source: None,
            target_date: None,
            smtp: SmtpSettings::default(),
            summary_recipients: Vec::new(),
            absent_recipient: None,
            watch_member: default_watch_member(),
        }
    }
}

/// Split a comma/semicolon separated address list.
pub fn split_recipients(raw: &str) -> Vec<String> {
    raw.split([',', ';'])
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

impl Config {
    /// Return the standard configuration directory
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".rstatuscheck")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rstatuscheck.conf")
    }

    /// Load the YAML file (if any), then apply environment overrides.
    pub fn load(path: Option<&Path>) -> AppResult<Self> {
        let default_path = Self::config_file();
        let path = path.unwrap_or(&default_path);

        let mut cfg = Self::from_file(path)?;
        cfg.apply_env(|key| env::var(key).ok())?;
        Ok(cfg)
    }

    /// Read a configuration file; a missing file yields the defaults.
    pub fn from_file(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)
            .map_err(|e| AppError::ConfigLoad(format!("{}: {e}", path.display())))?;
        serde_yaml::from_str(&content)
            .map_err(|e| AppError::ConfigLoad(format!("{}: {e}", path.display())))
    }

    /// Apply overrides from `lookup` (normally the process environment).
    pub fn apply_env<F>(&mut self, lookup: F) -> AppResult<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(v) = get("EXCEL_URL") {
            self.source = Some(v);
        }
        if let Some(v) = get("TARGET_DATE") {
            self.target_date = Some(v.trim().to_string());
        }
        if let Some(v) = get("SMTP_HOST") {
            self.smtp.host = Some(v);
        }
        if let Some(v) = get("SMTP_PORT") {
            self.smtp.port = v
                .trim()
                .parse()
                .map_err(|_| AppError::Config(format!("invalid SMTP_PORT: {v}")))?;
        }
        if let Some(v) = get("EMAIL_USER") {
            self.smtp.username = Some(v);
        }
        if let Some(v) = get("EMAIL_PASS") {
            self.smtp.password = Some(v);
        }
        if let Some(v) = get("EMAIL_FROM") {
            self.smtp.sender = Some(v);
        }
        if let Some(v) = get("EMAIL_RECIPIENT") {
            self.summary_recipients = split_recipients(&v);
        }
        if let Some(v) = get("ABSENT_RECIPIENT") {
            self.absent_recipient = Some(v.trim().to_string());
        }
        if let Some(v) = get("WATCH_MEMBER") {
            self.watch_member = v.trim().to_string();
        }

        Ok(())
    }

    /// Copy safe to print: the SMTP password is masked.
    pub fn redacted(&self) -> Self {
        let mut copy = self.clone();
        if copy.smtp.password.is_some() {
            copy.smtp.password = Some("********".to_string());
        }
        copy
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        serde_yaml::to_string(self).map_err(|e| AppError::ConfigSave(e.to_string()))
    }

    /// Write a default configuration file unless one already exists.
    /// Returns `true` when a file was created.
    pub fn init_file(path: &Path) -> AppResult<bool> {
        if path.exists() {
            return Ok(false);
        }
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        fs::write(path, Self::default().to_yaml()?)?;
        Ok(true)
    }
}
