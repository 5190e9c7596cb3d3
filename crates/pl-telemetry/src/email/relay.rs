use crate::email::transport::{EmailMessage, EmailOutcome, EmailTransport};

use std::time::Duration;

use async_trait::async_trait;
use serde_json::json;

/// `EmailTransport` backed by an HTTP mail-relay endpoint.
///
/// Posts the rendered message as JSON; a non-2xx response or transport
/// error is reported through the outcome.
pub struct HttpRelayMailer {
    client: reqwest::Client,
    endpoint: String,
    api_key: Option<String>,
}

impl HttpRelayMailer {
    pub fn new(endpoint: impl Into<String>, api_key: Option<String>, timeout_secs: u64) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .unwrap_or_default();

        Self {
            client,
            endpoint: endpoint.into(),
            api_key,
        }
    }
}

#[async_trait]
impl EmailTransport for HttpRelayMailer {
    async fn send(&self, message: &EmailMessage) -> EmailOutcome {
        let payload = json!({
            "to": message.recipients,
            "subject": message.subject,
            "html": message.html_body,
            "text": message.text_body,
            "priority": message.priority.as_str(),
        });

        let mut request = self.client.post(&self.endpoint).json(&payload);
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        match request.send().await {
            Ok(response) if response.status().is_success() => EmailOutcome::ok(),
            Ok(response) => {
                EmailOutcome::failed(format!("mail relay returned {}", response.status()))
            }
            Err(e) => EmailOutcome::failed(e.to_string()),
        }
    }
}
