use std::str::FromStr;

use serde::{Deserialize, Deserializer};
use thiserror::Error;

/// Mail providers whose SMTP relay settings are known in advance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SmtpService {
    Gmail,
    Outlook,
    Office365,
    Yahoo,
    Zoho,
    Icloud,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SmtpRelay {
    pub host: &'static str,
    pub port: u16,
    pub tls: SmtpTls,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SmtpTls {
    /// Plain connection upgraded with `STARTTLS`.
    StartTls,
    /// TLS from the first byte (SMTPS).
    Wrapper,
}

impl SmtpService {
    pub fn relay(self) -> SmtpRelay {
        let (host, port, tls) = match self {
            Self::Gmail => ("smtp.gmail.com", 465, SmtpTls::Wrapper),
            Self::Outlook => ("smtp-mail.outlook.com", 587, SmtpTls::StartTls),
            Self::Office365 => ("smtp.office365.com", 587, SmtpTls::StartTls),
            Self::Yahoo => ("smtp.mail.yahoo.com", 465, SmtpTls::Wrapper),
            Self::Zoho => ("smtp.zoho.com", 465, SmtpTls::Wrapper),
            Self::Icloud => ("smtp.mail.me.com", 587, SmtpTls::StartTls),
        };
        SmtpRelay { host, port, tls }
    }
}

#[derive(Debug, Error)]
#[error("Unknown smtp service: {0}")]
pub struct UnknownSmtpServiceError(pub String);

impl FromStr for SmtpService {
    type Err = UnknownSmtpServiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "gmail" | "googlemail" => Ok(Self::Gmail),
            "outlook" | "hotmail" | "live" => Ok(Self::Outlook),
            "office365" | "outlook365" => Ok(Self::Office365),
            "yahoo" => Ok(Self::Yahoo),
            "zoho" => Ok(Self::Zoho),
            "icloud" => Ok(Self::Icloud),
            _ => Err(UnknownSmtpServiceError(s.into())),
        }
    }
}

impl<'de> Deserialize<'de> for SmtpService {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        String::deserialize(deserializer)?
            .parse()
            .map_err(serde::de::Error::custom)
    }
}
