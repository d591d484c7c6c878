use std::sync::Arc;

use relay_core_contact_contracts::{ContactSendMessageError, ContactService};
use relay_email_contracts::{Email, EmailBody, EmailService};
use relay_models::{
    contact::{ContactMessage, ContactSubmission},
    email_address::{EmailAddressWithName, EmailMessageId},
};
use relay_templates_contracts::{ContactMessageTemplate, TemplateService};
use anyhow::anyhow;
use tracing::{error, info};

#[derive(Debug, Clone)]
pub struct ContactServiceImpl<Email, Template> {
    email: Email,
    template: Template,
    config: ContactServiceConfig,
}

#[derive(Debug, Clone)]
pub struct ContactServiceConfig {
    /// Mailbox that receives all contact messages. Sending fails while it is
    /// unknown.
    pub recipient: Option<Arc<EmailAddressWithName>>,
    pub subject_prefix: Arc<str>,
}

impl<Email, Template> ContactServiceImpl<Email, Template> {
    pub fn new(email: Email, template: Template, config: ContactServiceConfig) -> Self {
        Self {
            email,
            template,
            config,
        }
    }
}

impl<EmailS, TemplateS> ContactService for ContactServiceImpl<EmailS, TemplateS>
where
    EmailS: EmailService,
    TemplateS: TemplateService,
{
    #[tracing::instrument(skip_all)]
    async fn send_message(
        &self,
        submission: ContactSubmission,
    ) -> Result<EmailMessageId, ContactSendMessageError> {
        let message = ContactMessage::try_from(submission)?;

        let rendered = self.template.render(&make_template(&message))?;

        let Some(recipient) = self.config.recipient.as_deref() else {
            error!("Error sending email: no recipient configured");
            return Err(ContactSendMessageError::Send(anyhow!(
                "No recipient configured, set contact.receiver or email.user"
            )));
        };

        let email = Email {
            recipient: recipient.clone(),
            subject: format!("{}{}", self.config.subject_prefix, *message.subject),
            body: EmailBody::Alternative {
                text: rendered.text,
                html: rendered.html,
            },
            reply_to: Some(message.author.email.into()),
        };

        match self.email.send(email).await {
            Ok(message_id) => {
                info!(%message_id, "Email sent successfully");
                Ok(message_id)
            }
            Err(err) => {
                error!("Error sending email: {err:#}");
                Err(ContactSendMessageError::Send(err))
            }
        }
    }
}

fn make_template(message: &ContactMessage) -> ContactMessageTemplate {
    ContactMessageTemplate {
        name: (*message.author.name).clone(),
        email: message.author.email.as_str().into(),
        sent_at: message.sent_at.as_ref().map(|x| (**x).clone()),
        subject: (*message.subject).clone(),
        message: (*message.content).clone(),
    }
}
