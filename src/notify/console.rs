use crate::errors::AppResult;
use crate::notify::{Notification, Transport};
use crate::ui::messages::header;

/// Dry-run transport: prints the envelope and body, never connects anywhere.
pub struct ConsoleTransport;

impl ConsoleTransport {
    pub fn render(note: &Notification) -> String {
        let to = if note.recipients.is_empty() {
            "(no recipients configured)".to_string()
        } else {
            note.recipients.join(", ")
        };

        format!(
            "To: {to}\nSubject: {}\n\n{}\n",
            note.subject, note.body
        )
    }
}

impl Transport for ConsoleTransport {
    fn name(&self) -> &'static str {
        "console"
    }

    fn send(&self, note: &Notification) -> AppResult<()> {
        header("DRY RUN: email not sent");
        println!("{}", Self::render(note));
        Ok(())
    }

    fn is_live(&self) -> bool {
        false
    }
}
