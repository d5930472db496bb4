//! SMTP mailer using lettre.

use async_trait::async_trait;
use lettre::{
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
    message::header::ContentType,
    transport::smtp::authentication::Credentials,
};
use tracing::debug;

use contactly_core::config::smtp::SmtpConfig;
use contactly_core::error::AppError;
use contactly_core::result::AppResult;
use contactly_core::traits::Mailer;

/// Sends email through an SMTP relay (STARTTLS).
pub struct SmtpMailer {
    /// Async SMTP transport with connection pooling.
    transport: AsyncSmtpTransport<Tokio1Executor>,
    /// Sender address for all outbound mail.
    from: String,
}

impl SmtpMailer {
    /// Creates a new SMTP mailer from configuration.
    pub fn new(config: &SmtpConfig) -> Result<Self, AppError> {
        let mut builder = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.host)
            .map_err(|e| {
                AppError::configuration(format!("Invalid SMTP relay '{}': {e}", config.host))
            })?
            .port(config.port);

        if let (Some(username), Some(password)) = (&config.username, &config.password) {
            builder = builder.credentials(Credentials::new(username.clone(), password.clone()));
        }

        Ok(Self {
            transport: builder.build(),
            from: config.from.clone(),
        })
    }
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send(&self, to: &str, subject: &str, html: &str) -> AppResult<()> {
        let message = Message::builder()
            .from(
                self.from
                    .parse()
                    .map_err(|e| AppError::configuration(format!("Invalid from address: {e}")))?,
            )
            .to(to
                .parse()
                .map_err(|e| AppError::validation(format!("Invalid recipient address: {e}")))?)
            .subject(subject)
            .header(ContentType::TEXT_HTML)
            .body(html.to_string())
            .map_err(|e| AppError::internal(format!("Failed to build email: {e}")))?;

        self.transport.send(message).await.map_err(|e| {
            AppError::with_source(
                contactly_core::error::ErrorKind::ExternalService,
                format!("SMTP delivery failed: {e}"),
                e,
            )
        })?;

        debug!(to = %to, subject = %subject, "Email dispatched");
        Ok(())
    }
}
