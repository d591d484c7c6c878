use relay_models::{contact::ContactSubmission, email_address::EmailMessageId};
use serde::{Deserialize, Serialize};

/// Body of the contact form. Every field is optional on the wire so that
/// missing fields are reported with the regular validation message.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiContactMessage {
    /// Full name of the sender
    #[serde(rename = "nama")]
    pub name: Option<String>,
    /// Display timestamp chosen by the client
    #[serde(rename = "waktu_pengiriman")]
    pub sent_at: Option<String>,
    /// Email address of the sender, used as `Reply-To`
    #[serde(rename = "email_pengirim")]
    pub email: Option<String>,
    /// Subject of the message
    #[serde(rename = "perihal")]
    pub subject: Option<String>,
    /// Content of the message
    #[serde(rename = "pesan")]
    pub message: Option<String>,
}

impl From<ApiContactMessage> for ContactSubmission {
    fn from(value: ApiContactMessage) -> Self {
        Self {
            name: value.name,
            sent_at: value.sent_at,
            email: value.email,
            subject: value.subject,
            content: value.message,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiSentEmail {
    pub message_id: EmailMessageId,
}
