use std::sync::Arc;

use anyhow::Context;
use relay_config::Config;
use relay_core_contact_impl::ContactServiceConfig;
use relay_models::email_address::EmailAddressWithName;
use tracing::warn;
use types::{Contact, Email, Health, RestServer, Template, Time};

use crate::email;

pub mod types;

/// Wire up the http server around an already connected email service.
pub fn rest_server(config: &Config, email: Email) -> anyhow::Result<RestServer> {
    let template = Template::new().context("Failed to load templates")?;
    let contact = Contact::new(email, template, contact_config(config));
    let health = Health::new(Time::default());

    Ok(RestServer::new(health, contact))
}

pub fn contact_config(config: &Config) -> ContactServiceConfig {
    let recipient: Option<EmailAddressWithName> = match &config.contact.receiver {
        Some(receiver) => Some(receiver.clone().into()),
        None => email::sender(&config.email)
            .map(|sender| sender.into_email_address().into())
            .inspect_err(|_| warn!("No contact recipient, set contact.receiver or email.user"))
            .ok(),
    };

    ContactServiceConfig {
        recipient: recipient.map(Arc::new),
        subject_prefix: config.contact.subject_prefix.as_str().into(),
    }
}
