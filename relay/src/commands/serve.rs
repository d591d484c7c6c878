use relay_config::Config;
use relay_email_contracts::EmailService;
use tracing::{info, warn};

use crate::{email, environment};

pub async fn serve(config: Config) -> anyhow::Result<()> {
    info!("Connecting to smtp server");
    let email = email::connect(&config.email)?;
    verify(&email).await;

    let server = environment::rest_server(&config, email)?;
    info!(
        "Starting http server on {}:{}",
        config.http.host, config.http.port
    );
    server.serve(config.http.host, config.http.port).await
}

/// Check the smtp connection. The server starts either way, the outcome is
/// only logged.
pub async fn verify(email: &impl EmailService) -> bool {
    match email.ping().await {
        Ok(()) => {
            info!("Server is ready to send emails");
            true
        }
        Err(err) => {
            warn!("Failed to verify smtp connection: {err:#}");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use relay_email_contracts::MockEmailService;

    use super::*;

    #[tokio::test]
    async fn verify_ok() {
        // Arrange
        let email = MockEmailService::new().with_ping(Ok(()));

        // Act
        let ready = verify(&email).await;

        // Assert
        assert!(ready);
    }

    #[tokio::test]
    async fn verify_failure_is_not_fatal() {
        // Arrange
        let email = MockEmailService::new().with_ping(Err("auth failed".into()));

        // Act
        let ready = verify(&email).await;

        // Assert
        assert!(!ready);
    }
}
