use anyhow::Context;
use lettre::transport::smtp::authentication::Credentials;
use relay_config::EmailConfig;
use relay_email_impl::{EmailServiceImpl, SmtpEndpoint};
use relay_models::email_address::{EmailAddress, EmailAddressWithName};
use tracing::warn;

/// Connect to the SMTP server
///
/// A missing or invalid `email.user` only disables sending, so that the
/// credentials can be configured after deployment.
pub fn connect(config: &EmailConfig) -> anyhow::Result<EmailServiceImpl> {
    let endpoint = match &config.smtp_url {
        Some(url) => SmtpEndpoint::Url((**url).clone()),
        None => SmtpEndpoint::Service(config.service),
    };

    // credentials embedded in smtp_url are picked up by lettre
    let credentials = (!config.user.is_empty())
        .then(|| Credentials::new(config.user.clone(), (*config.password).clone()));

    let from = sender(config)
        .inspect_err(|err| warn!("Sending emails is disabled: {err:#}"))
        .ok();

    EmailServiceImpl::new(&endpoint, credentials, from).context("Failed to connect to SMTP server")
}

/// The mailbox all emails are sent from: the configured display name and
/// the smtp user.
pub fn sender(config: &EmailConfig) -> anyhow::Result<EmailAddressWithName> {
    config
        .user
        .parse::<EmailAddress>()
        .map(|address| address.with_name(&config.from_name))
        .with_context(|| {
            format!(
                "Invalid email.user {:?}, expected an email address",
                config.user
            )
        })
}
