use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Plain message body used for mutation responses and all error responses
#[derive(Debug, Serialize, Deserialize, ToSchema)]
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
