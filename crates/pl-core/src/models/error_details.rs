use serde::{Deserialize, Serialize};

/// Caller-supplied description of a failure being logged.
///
/// The name and message are merged into the entry's metadata; the stack,
/// when present, is persisted alongside and consulted by the error
/// significance rules.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetails {
    pub name: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stack: Option<String>,
}

impl ErrorDetails {
    pub fn new(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            message: message.into(),
            stack: None,
        }
    }

    pub fn with_stack(mut self, stack: impl Into<String>) -> Self {
        self.stack = Some(stack.into());
        self
    }
}
