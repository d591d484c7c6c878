use anyhow::{anyhow, ensure};
use lettre::{
    message::{header, MessageBuilder, MultiPart},
    transport::smtp::{authentication::Credentials, AsyncSmtpTransportBuilder},
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};
use relay_email_contracts::{Email, EmailBody, EmailService};
use relay_models::{
    email_address::{EmailAddressWithName, EmailMessageId},
    smtp::{SmtpService, SmtpTls},
};
use relay_utils::Apply;
use tracing::debug;
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct EmailServiceImpl {
    /// Without a sender every send fails, the transport itself stays usable.
    from: Option<EmailAddressWithName>,
    transport: AsyncSmtpTransport<Tokio1Executor>,
}

/// Where to find the smtp server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SmtpEndpoint {
    /// A `smtp://` or `smtps://` url as understood by lettre.
    Url(String),
    Service(SmtpService),
}

impl EmailServiceImpl {
    pub fn new(
        endpoint: &SmtpEndpoint,
        credentials: Option<Credentials>,
        from: Option<EmailAddressWithName>,
    ) -> anyhow::Result<Self> {
        let builder = match endpoint {
            SmtpEndpoint::Url(url) => AsyncSmtpTransport::<Tokio1Executor>::from_url(url)?,
            SmtpEndpoint::Service(service) => {
                let relay = service.relay();
                let builder = match relay.tls {
                    SmtpTls::Wrapper => AsyncSmtpTransport::<Tokio1Executor>::relay(relay.host)?,
                    SmtpTls::StartTls => {
                        AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(relay.host)?
                    }
                };
                builder.port(relay.port)
            }
        };

        let transport = builder
            .apply_map(credentials, AsyncSmtpTransportBuilder::credentials)
            .build();

        Ok(Self { from, transport })
    }

    #[cfg(feature = "dummy")]
    pub fn dummy() -> Self {
        Self::new(
            &SmtpEndpoint::Url("smtp://dummy".into()),
            None,
            Some("Dummy <dummy@example.com>".parse().unwrap()),
        )
        .unwrap()
    }
}

fn new_message_id(from: &EmailAddressWithName) -> EmailMessageId {
    format!("<{}@{}>", Uuid::new_v4(), from.0.email.domain()).into()
}

impl EmailService for EmailServiceImpl {
    async fn send(&self, email: Email) -> anyhow::Result<EmailMessageId> {
        let from = self
            .from
            .as_ref()
            .ok_or_else(|| anyhow!("email.user is not configured"))?;
        let message_id = new_message_id(from);

        let builder = Message::builder()
            .from(from.0.clone())
            .to(email.recipient.0)
            .apply_map(email.reply_to.map(|x| x.0), MessageBuilder::reply_to)
            .subject(email.subject)
            .message_id(Some(message_id.0.clone()));

        let message = match email.body {
            EmailBody::Text(body) => builder.header(header::ContentType::TEXT_PLAIN).body(body)?,
            EmailBody::Alternative { text, html } => {
                builder.multipart(MultiPart::alternative_plain_html(text, html))?
            }
        };

        let response = self.transport.send(message).await?;
        ensure!(
            response.is_positive(),
            "smtp server did not accept the message ({})",
            response.code()
        );

        debug!(%message_id, "email accepted by smtp server");

        Ok(message_id)
    }

    async fn ping(&self) -> anyhow::Result<()> {
        self.transport
            .test_connection()
            .await?
            .then_some(())
            .ok_or_else(|| anyhow!("Failed to ping smtp server"))
    }
}
