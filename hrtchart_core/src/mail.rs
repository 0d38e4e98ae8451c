//! SMTP delivery of the generated document.
//!
//! A single best-effort attempt: credential or dial failures surface as
//! [`Error::Mail`] and the run ends. The document already on disk is left
//! in place for the operator.

use crate::config::MailConfig;
use crate::error::{Error, Result};
use lettre::message::header::ContentType;
use lettre::message::{Attachment, Mailbox, MultiPart, SinglePart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Message, SmtpTransport, Transport};
use std::path::Path;
use std::time::Duration;

const SUBJECT: &str = "Hormone Tracking Document";
const BODY: &str = "Attached is your hormone tracking document.";
const DOCX_MIME: &str = "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

/// Environment variable holding the sending mailbox's secret.
pub const SENDER_PASSWORD_VAR: &str = "SENDER_PASSWORD";

/// Send the file at `path` as an attachment to `recipient`.
///
/// The secret comes from `SENDER_PASSWORD` (a `.env` file next to the
/// working directory is honored); everything else comes from the mail
/// section of the config. The send is bounded by the configured timeout.
pub fn send_document(cfg: &MailConfig, path: &Path, recipient: &str) -> Result<()> {
    let password = load_sender_password()?;

    if cfg.sender.is_empty() {
        return Err(Error::Config(
            "mail.sender is not set; fill in the [mail] section of the config".into(),
        ));
    }
    if recipient.is_empty() {
        return Err(Error::Config(
            "no recipient: set mail.recipient in the config or pass --recipient".into(),
        ));
    }

    let message = build_message(&cfg.sender, recipient, path)?;

    let mailer = SmtpTransport::starttls_relay(&cfg.smtp_host)
        .map_err(|e| Error::Mail(format!("failed to set up SMTP relay: {}", e)))?
        .port(cfg.smtp_port)
        .credentials(Credentials::new(cfg.sender.clone(), password))
        .timeout(Some(Duration::from_secs(cfg.send_timeout_seconds)))
        .build();

    mailer
        .send(&message)
        .map_err(|e| Error::Mail(format!("failed to send email: {}", e)))?;

    tracing::info!("Email sent successfully to {}", recipient);
    Ok(())
}

/// Load the mailbox secret from the environment, honoring a `.env` file.
fn load_sender_password() -> Result<String> {
    // A missing .env file is fine as long as the variable is set
    let _ = dotenvy::dotenv();

    std::env::var(SENDER_PASSWORD_VAR)
        .map_err(|_| Error::Mail(format!("{} is not set", SENDER_PASSWORD_VAR)))
}

/// Build the fixed-subject message with the document attached.
fn build_message(sender: &str, recipient: &str, path: &Path) -> Result<Message> {
    let from: Mailbox = sender
        .parse()
        .map_err(|e| Error::Mail(format!("invalid sender address {:?}: {}", sender, e)))?;
    let to: Mailbox = recipient
        .parse()
        .map_err(|e| Error::Mail(format!("invalid recipient address {:?}: {}", recipient, e)))?;

    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "attachment.docx".into());
    let content = std::fs::read(path)?;
    let content_type = ContentType::parse(DOCX_MIME)
        .map_err(|e| Error::Mail(format!("invalid attachment content type: {}", e)))?;

    Message::builder()
        .from(from)
        .to(to)
        .subject(SUBJECT)
        .multipart(
            MultiPart::mixed()
                .singlepart(SinglePart::plain(BODY.to_string()))
                .singlepart(Attachment::new(file_name).body(content, content_type)),
        )
        .map_err(|e| Error::Mail(format!("failed to build email: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_carries_subject_and_attachment() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("schedule.docx");
        std::fs::write(&path, b"document bytes").unwrap();

        let message = build_message("sender@example.com", "someone@example.com", &path).unwrap();
        let formatted = String::from_utf8(message.formatted()).unwrap();

        assert!(formatted.contains(SUBJECT));
        assert!(formatted.contains("schedule.docx"));
        assert!(formatted.contains("To: someone@example.com"));
    }

    #[test]
    fn test_invalid_recipient_is_a_mail_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("schedule.docx");
        std::fs::write(&path, b"document bytes").unwrap();

        let err = build_message("sender@example.com", "not an address", &path).unwrap_err();
        assert!(matches!(err, Error::Mail(_)));
    }

    #[test]
    fn test_missing_attachment_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nowhere.docx");

        let err = build_message("sender@example.com", "someone@example.com", &path).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
