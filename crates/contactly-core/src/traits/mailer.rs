//! Mailer trait for outbound email delivery.
//!
//! Abstracts the delivery backend so that services depend only on the
//! trait. Production uses SMTP; tests use a recording implementation.

use async_trait::async_trait;

use crate::result::AppResult;

/// Trait for email delivery backends.
#[async_trait]
pub trait Mailer: Send + Sync + 'static {
    /// Send an HTML email to a single recipient.
    ///
    /// Delivery failures surface as `ExternalService` errors; callers
    /// decide whether a failed dispatch is fatal for their operation.
    async fn send(&self, to: &str, subject: &str, html: &str) -> AppResult<()>;
}
