use crate::email::transport::{EmailMessage, EmailOutcome, EmailTransport};

use async_trait::async_trait;

/// Transport used when no relay endpoint is configured. Every send
/// reports failure through the outcome so the dispatcher logs it; the
/// database channel is unaffected.
pub struct DisabledMailer;

#[async_trait]
impl EmailTransport for DisabledMailer {
    async fn send(&self, message: &EmailMessage) -> EmailOutcome {
        log::debug!("Email transport disabled, not sending '{}'", message.subject);
        EmailOutcome::failed("email transport not configured")
    }
}
