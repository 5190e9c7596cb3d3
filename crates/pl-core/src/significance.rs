//! Alert significance classification.
//!
//! Decides whether an error or security log entry is important enough to
//! trigger a notification, and at which priority. The rules are an
//! explicit table so they can be unit-tested and tuned without touching
//! the logger.

use crate::models::error_details::ErrorDetails;
use crate::models::notification_priority::NotificationPriority;

/// Rule table driving error/security alert classification
#[derive(Debug, Clone)]
pub struct SignificanceRules {
    /// Error names that always alert
    pub error_names: Vec<String>,
    /// Stack substrings that always alert
    pub stack_markers: Vec<String>,
    /// Error message substrings that always alert
    pub error_message_markers: Vec<String>,
    /// Security message substrings that alert
    pub security_markers: Vec<String>,
    /// Security message substrings that escalate the alert to critical
    pub critical_security_markers: Vec<String>,
}

impl Default for SignificanceRules {
    fn default() -> Self {
        Self {
            error_names: vec!["TypeError".into(), "ReferenceError".into()],
            stack_markers: vec!["api/".into()],
            error_message_markers: vec!["failed".into(), "critical".into()],
            security_markers: vec![
                "attempt".into(),
                "suspicious".into(),
                "unauthorized".into(),
                "attack".into(),
                "injection".into(),
                "exceeded".into(),
            ],
            critical_security_markers: vec!["attack".into(), "injection".into()],
        }
    }
}

impl SignificanceRules {
    /// Classify an error log event. `Some(priority)` means an
    /// `error_alert` notification should be dispatched.
    pub fn error_alert_priority(
        &self,
        message: &str,
        details: Option<&ErrorDetails>,
    ) -> Option<NotificationPriority> {
        if let Some(details) = details {
            if self.error_names.iter().any(|n| n == &details.name) {
                return Some(NotificationPriority::High);
            }
            if let Some(stack) = &details.stack {
                if self.stack_markers.iter().any(|m| stack.contains(m.as_str())) {
                    return Some(NotificationPriority::High);
                }
            }
        }

        let message = message.to_lowercase();
        if self
            .error_message_markers
            .iter()
            .any(|m| message.contains(m.as_str()))
        {
            return Some(NotificationPriority::High);
        }

        None
    }

    /// Classify a security log event. `Some(priority)` means a
    /// `security_alert` notification should be dispatched.
    pub fn security_alert_priority(&self, message: &str) -> Option<NotificationPriority> {
        let message = message.to_lowercase();

        if !self
            .security_markers
            .iter()
            .any(|m| message.contains(m.as_str()))
        {
            return None;
        }

        if self
            .critical_security_markers
            .iter()
            .any(|m| message.contains(m.as_str()))
        {
            Some(NotificationPriority::Critical)
        } else {
            Some(NotificationPriority::High)
        }
    }
}
