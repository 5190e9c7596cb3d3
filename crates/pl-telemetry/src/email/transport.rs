use pl_core::NotificationPriority;

use async_trait::async_trait;

/// Rendered outbound email handed to the transport collaborator
#[derive(Debug, Clone)]
pub struct EmailMessage {
    /// Comma-joined recipient addresses
    pub recipients: String,
    pub subject: String,
    pub html_body: String,
    pub text_body: String,
    pub priority: NotificationPriority,
}

/// Delivery outcome reported by the transport
#[derive(Debug, Clone)]
pub struct EmailOutcome {
    pub success: bool,
    pub error: Option<String>,
}

impl EmailOutcome {
    pub fn ok() -> Self {
        Self {
            success: true,
            error: None,
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(error.into()),
        }
    }
}

/// Outbound email delivery seam.
///
/// Failures are reported through the outcome, never raised; a failed
/// delivery must not unwind the database write already committed by the
/// dispatcher.
#[async_trait]
pub trait EmailTransport: Send + Sync {
    async fn send(&self, message: &EmailMessage) -> EmailOutcome;
}
