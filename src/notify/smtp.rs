use crate::config::{SmtpCredentials, SmtpSettings};
use crate::errors::{AppError, AppResult};
use crate::notify::{Notification, Transport};
use crate::ui::messages::success;
use lettre::message::header::ContentType;
use lettre::message::{Mailbox, Message};
use lettre::transport::smtp::authentication::Credentials;
use lettre::transport::smtp::client::{Tls, TlsParameters};
use lettre::Transport as _;

/// Port that uses TLS from the first byte; every other port starts in plain
/// text and upgrades with STARTTLS when the server offers it.
const IMPLICIT_TLS_PORT: u16 = 465;

/// How the connection to the SMTP server is secured.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TlsMode {
    /// TLS handshake right after connecting.
    Implicit,
    /// STARTTLS when the server advertises it.
    Opportunistic,
}

impl TlsMode {
    pub fn for_port(port: u16) -> Self {
        if port == IMPLICIT_TLS_PORT {
            TlsMode::Implicit
        } else {
            TlsMode::Opportunistic
        }
    }
}

pub struct SmtpTransport {
    settings: SmtpSettings,
}

fn mail_err<E: std::fmt::Display>(e: E) -> AppError {
    AppError::Mail(e.to_string())
}

fn mailbox(addr: &str) -> AppResult<Mailbox> {
    addr.trim()
        .parse::<Mailbox>()
        .map_err(|e| AppError::Mail(format!("invalid address '{addr}': {e}")))
}

impl SmtpTransport {
    pub fn new(settings: SmtpSettings) -> Self {
        Self { settings }
    }

    /// Build the RFC 5322 message; all recipients go into one `To` header.
    pub fn build_message(creds: &SmtpCredentials, note: &Notification) -> AppResult<Message> {
        let mut builder = Message::builder()
            .from(mailbox(&creds.sender)?)
            .subject(note.subject.clone())
            .header(ContentType::TEXT_PLAIN);

        for r in &note.recipients {
            builder = builder.to(mailbox(r)?);
        }

        builder.body(note.body.clone()).map_err(mail_err)
    }

    fn tls_for(creds: &SmtpCredentials) -> AppResult<Tls> {
        let params = TlsParameters::new(creds.host.clone()).map_err(mail_err)?;
        Ok(match TlsMode::for_port(creds.port) {
            TlsMode::Implicit => Tls::Wrapper(params),
            TlsMode::Opportunistic => Tls::Opportunistic(params),
        })
    }
}

impl Transport for SmtpTransport {
    fn name(&self) -> &'static str {
        "smtp"
    }

    fn send(&self, note: &Notification) -> AppResult<()> {
        // fail on incomplete settings before any connection is opened
        let creds = self.settings.require()?;
        let message = Self::build_message(&creds, note)?;

        let mailer = lettre::SmtpTransport::builder_dangerous(creds.host.as_str())
            .port(creds.port)
            .tls(Self::tls_for(&creds)?)
            .credentials(Credentials::new(
                creds.username.clone(),
                creds.password.clone(),
            ))
            .build();

        mailer.send(&message).map_err(mail_err)?;

        success(format!(
            "Email \"{}\" sent to {}",
            note.subject,
            note.recipients.join(", ")
        ));
        Ok(())
    }

    fn preflight(&self) -> AppResult<()> {
        self.settings.require().map(|_| ())
    }
}
