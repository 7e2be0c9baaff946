//! Message delivery.
//!
//! A [`Notifier`] wraps one [`Transport`], chosen once at startup: the console
//! transport for dry runs, SMTP otherwise.

mod console;
mod smtp;

pub use console::ConsoleTransport;
pub use smtp::{SmtpTransport, TlsMode};

use crate::config::Config;
use crate::errors::{AppError, AppResult};

/// One outgoing message. All recipients share a single `To` header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub subject: String,
    pub body: String,
    pub recipients: Vec<String>,
}

pub trait Transport {
    fn name(&self) -> &'static str;

    /// Deliver the whole message or fail; there is no per-recipient result.
    fn send(&self, note: &Notification) -> AppResult<()>;

    /// Whether the transport actually transmits anything.
    fn is_live(&self) -> bool {
        true
    }

    /// Validate settings without connecting.
    fn preflight(&self) -> AppResult<()> {
        Ok(())
    }
}

pub struct Notifier {
    transport: Box<dyn Transport>,
}

impl Notifier {
    pub fn new(transport: Box<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Console transport when `dry_run`, SMTP transport otherwise.
    pub fn from_config(cfg: &Config, dry_run: bool) -> Self {
        if dry_run {
            Self::new(Box::new(ConsoleTransport))
        } else {
            Self::new(Box::new(SmtpTransport::new(cfg.smtp.clone())))
        }
    }

    pub fn transport_name(&self) -> &'static str {
        self.transport.name()
    }

    pub fn is_live(&self) -> bool {
        self.transport.is_live()
    }

    pub fn preflight(&self) -> AppResult<()> {
        self.transport.preflight()
    }

    pub fn deliver(&self, subject: &str, body: &str, recipients: &[String]) -> AppResult<()> {
        if self.transport.is_live() && recipients.is_empty() {
            return Err(AppError::Config(format!(
                "no recipients configured for \"{subject}\""
            )));
        }

        self.transport.send(&Notification {
            subject: subject.to_string(),
            body: body.to_string(),
            recipients: recipients.to_vec(),
        })
    }
}
