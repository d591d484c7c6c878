use std::sync::LazyLock;

use nutype::nutype;
use regex::Regex;
use thiserror::Error;

use crate::{email_address::EmailAddress, macros::nutype_string};

/// Shape a sender address has to match before it is handed to the mail library.
pub static CONTACT_EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

/// Raw contact form as received from a client, before any validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: Option<String>,
    pub sent_at: Option<String>,
    pub email: Option<String>,
    pub subject: Option<String>,
    pub content: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactMessage {
    pub author: ContactMessageAuthor,
    pub sent_at: Option<ContactMessageSentAt>,
    pub subject: ContactMessageSubject,
    pub content: ContactMessageContent,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactMessageAuthor {
    pub name: ContactMessageAuthorName,
    pub email: EmailAddress,
}

nutype_string!(ContactMessageAuthorName(validate(not_empty)));
nutype_string!(ContactMessageSubject(validate(not_empty)));
nutype_string!(ContactMessageContent(validate(not_empty)));

/// Free-form display timestamp chosen by the client.
#[nutype(derive(Debug, Clone, PartialEq, Eq, Hash, From, Deref, Serialize, Deserialize))]
pub struct ContactMessageSentAt(String);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ContactMessageValidationError {
    #[error("All fields are required.")]
    MissingFields,
    #[error("Invalid email format.")]
    InvalidEmail,
}

impl TryFrom<ContactSubmission> for ContactMessage {
    type Error = ContactMessageValidationError;

    fn try_from(value: ContactSubmission) -> Result<Self, Self::Error> {
        let name = value
            .name
            .and_then(|x| ContactMessageAuthorName::try_new(x).ok());
        let email = value.email.filter(|x| !x.is_empty());
        let subject = value
            .subject
            .and_then(|x| ContactMessageSubject::try_new(x).ok());
        let content = value
            .content
            .and_then(|x| ContactMessageContent::try_new(x).ok());

        let (Some(name), Some(email), Some(subject), Some(content)) =
            (name, email, subject, content)
        else {
            return Err(ContactMessageValidationError::MissingFields);
        };

        if !CONTACT_EMAIL_REGEX.is_match(&email) {
            return Err(ContactMessageValidationError::InvalidEmail);
        }

        // the pattern is looser than RFC 5322, lettre has the final say
        let email = email
            .parse::<EmailAddress>()
            .map_err(|_| ContactMessageValidationError::InvalidEmail)?;

        Ok(Self {
            author: ContactMessageAuthor { name, email },
            sent_at: value.sent_at.map(Into::into),
            subject,
            content,
        })
    }
}
