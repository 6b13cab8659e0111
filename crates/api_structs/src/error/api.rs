use serde::{Deserialize, Serialize};

/// Body of every response built from a propagated error
#[derive(Debug, Deserialize, Serialize)]
pub struct ErrorResponse {
    pub message: String,
    /// Diagnostic detail, always `null` in production
    pub stack: Option<String>,
}

/// Body of failures a handler answers on its own
#[derive(Debug, Deserialize, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
