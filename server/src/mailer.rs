//! Outbound contact mail, delivered through an HTTP mail API.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MailError {
    #[error("Mail request failed: {0}")]
    RequestFailed(String),

    #[error("Mail API error ({status}): {message}")]
    ApiError { status: u16, message: String },
}

/// A submitted contact form.
#[derive(Debug, Clone)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// Client for the transactional mail API.
#[derive(Debug, Clone)]
pub struct Mailer {
    endpoint: String,
    api_key: String,
    recipient: String,
    client: reqwest::Client,
}

#[derive(Debug, Serialize)]
struct SendMailRequest<'a> {
    from: &'a str,
    to: &'a str,
    reply_to: &'a str,
    subject: String,
    html: String,
}

#[derive(Debug, Deserialize)]
struct MailApiError {
    message: String,
}

impl Mailer {
    /// Build the mailer from `MAIL_API_URL`, `MAIL_API_KEY` and
    /// `CONTACT_RECIPIENT`. Returns `None` when any of them is unset, in
    /// which case the contact endpoint reports a send failure.
    pub fn from_env() -> Option<Self> {
        let endpoint = std::env::var("MAIL_API_URL").ok()?;
        let api_key = std::env::var("MAIL_API_KEY").ok()?;
        let recipient = std::env::var("CONTACT_RECIPIENT").ok()?;
        Some(Mailer {
            endpoint,
            api_key,
            recipient,
            client: reqwest::Client::new(),
        })
    }

    pub async fn send_contact(&self, message: &ContactMessage) -> Result<(), MailError> {
        let request = SendMailRequest {
            from: "noreply@nukoken.nl",
            to: &self.recipient,
            reply_to: &message.email,
            subject: format!("[NuKoken Contact] {}", message.subject),
            html: contact_body(message),
        };

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| MailError::RequestFailed(e.to_string()))?;

        let status = response.status().as_u16();
        if status >= 300 {
            let body = response
                .text()
                .await
                .map_err(|e| MailError::RequestFailed(e.to_string()))?;
            // Try to parse a structured error body
            let message = match serde_json::from_str::<MailApiError>(&body) {
                Ok(err) => err.message,
                Err(_) => body,
            };
            return Err(MailError::ApiError { status, message });
        }

        Ok(())
    }
}

fn contact_body(message: &ContactMessage) -> String {
    format!(
        "<div style=\"font-family: Arial, sans-serif; max-width: 600px;\">\
         <h2>Nieuw bericht via NuKoken</h2>\
         <p><strong>Van:</strong> {}</p>\
         <p><strong>Email:</strong> {}</p>\
         <p><strong>Onderwerp:</strong> {}</p>\
         <div>{}</div>\
         <hr>\
         <p>Dit bericht is verzonden via het contactformulier op NuKoken.nl</p>\
         </div>",
        escape_html(&message.name),
        escape_html(&message.email),
        escape_html(&message.subject),
        escape_html(&message.message).replace('\n', "<br>"),
    )
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contact_body_escapes_and_breaks_lines() {
        let message = ContactMessage {
            name: "A <b> B".to_string(),
            email: "a@b.nl".to_string(),
            subject: "Vraag".to_string(),
            message: "regel 1\nregel 2".to_string(),
        };
        let body = contact_body(&message);
        assert!(body.contains("A &lt;b&gt; B"));
        assert!(body.contains("regel 1<br>regel 2"));
    }
}
