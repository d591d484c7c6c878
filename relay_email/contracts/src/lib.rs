use std::future::Future;

use relay_models::email_address::{EmailAddressWithName, EmailMessageId};

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait EmailService: Send + Sync + 'static {
    /// Deliver the email and return the id of the sent message.
    fn send(&self, email: Email) -> impl Future<Output = anyhow::Result<EmailMessageId>> + Send;

    /// Check that the smtp server accepts connections and credentials.
    fn ping(&self) -> impl Future<Output = anyhow::Result<()>> + Send;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Email {
    pub recipient: EmailAddressWithName,
    pub subject: String,
    pub body: EmailBody,
    pub reply_to: Option<EmailAddressWithName>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmailBody {
    Text(String),
    /// Sent as `multipart/alternative`, clients pick the richest part they
    /// can display.
    Alternative { text: String, html: String },
}

#[cfg(feature = "mock")]
impl MockEmailService {
    pub fn with_send(mut self, email: Email, result: Result<EmailMessageId, String>) -> Self {
        self.expect_send()
            .once()
            .with(mockall::predicate::eq(email))
            .return_once(move |_| {
                Box::pin(std::future::ready(result.map_err(|err| anyhow::anyhow!(err))))
            });
        self
    }

    pub fn with_ping(mut self, result: Result<(), String>) -> Self {
        self.expect_ping().once().return_once(move || {
            Box::pin(std::future::ready(result.map_err(|err| anyhow::anyhow!(err))))
        });
        self
    }
}
