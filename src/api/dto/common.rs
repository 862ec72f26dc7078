//! Small shared response shapes.

use serde::Serialize;

/// Human-readable confirmation used by mutating endpoints.
#[derive(Debug, Serialize)]
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
