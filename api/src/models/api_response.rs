use serde::{Deserialize, Serialize};

/// Envelope for error replies and status messages.
#[derive(Serialize, Deserialize, Debug)]
pub struct ApiResponse<T> {
    pub message: String,
    pub result: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn failure(message: impl Into<String>) -> Self {
        ApiResponse {
            message: message.into(),
            result: None,
        }
    }
}
