use std::{collections::HashMap, net::IpAddr, path::Path};

use anyhow::Context;
use config::{File, FileFormat};
use relay_models::{email_address::EmailAddress, smtp::SmtpService, Sensitive};
use serde::Deserialize;

pub const DEFAULT_CONFIG: &str = include_str!("../../config.toml");

/// Colon separated list of additional config files.
pub const CONFIG_PATHS_ENV: &str = "RELAY_CONFIG";

/// Environment variables that override single config keys.
pub const ENV_OVERRIDES: &[(&str, &str)] = &[
    ("PORT", "http.port"),
    ("EMAIL_SERVICE", "email.service"),
    ("EMAIL_USER", "email.user"),
    ("EMAIL_PASSWORD", "email.password"),
    ("EMAIL_RECEIVER", "contact.receiver"),
];

/// Load the config from the built-in defaults, the files listed in
/// `RELAY_CONFIG` and the process environment.
pub fn load() -> anyhow::Result<Config> {
    let env = std::env::vars().collect::<HashMap<_, _>>();
    let paths = env
        .get(CONFIG_PATHS_ENV)
        .map(|paths| {
            paths
                .split(':')
                .filter(|path| !path.is_empty())
                .map(String::from)
                .collect::<Vec<_>>()
        })
        .unwrap_or_default();

    load_from(&paths, &env)
}

pub fn load_from(
    paths: &[impl AsRef<Path>],
    env: &HashMap<String, String>,
) -> anyhow::Result<Config> {
    let builder = config::Config::builder()
        .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

    let builder = paths.iter().try_fold(builder, |builder, path| {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file at {}", path.display()))?;
        let source = File::from_str(&content, FileFormat::Toml);
        anyhow::Ok(builder.add_source(source))
    })?;

    ENV_OVERRIDES
        .iter()
        .try_fold(builder, |builder, &(var, key)| {
            builder.set_override_option(key, env.get(var).filter(|x| !x.is_empty()).cloned())
        })?
        .build()?
        .try_deserialize()
        .context("Failed to load config")
}

#[derive(Debug, Deserialize)]
pub struct Config {
    pub http: HttpConfig,
    pub email: EmailConfig,
    pub contact: ContactConfig,
}

#[derive(Debug, Deserialize)]
pub struct HttpConfig {
    pub host: IpAddr,
    pub port: u16,
}

#[derive(Debug, Deserialize)]
pub struct EmailConfig {
    pub service: SmtpService,
    /// Takes precedence over `service`.
    pub smtp_url: Option<Sensitive<String>>,
    pub user: String,
    pub password: Sensitive<String>,
    pub from_name: String,
}

#[derive(Debug, Deserialize)]
pub struct ContactConfig {
    /// Defaults to `email.user`.
    pub receiver: Option<EmailAddress>,
    pub subject_prefix: String,
}
