use serde::{Deserialize, Serialize};
use std::fmt::Display;
use utoipa::ToSchema;

/// The payload of an error response.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ErrorInformation {
    /// A machine readable error type
    pub error: String,
    /// A human readable error message
    pub message: String,
    /// Optional details, may be empty
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ErrorInformation {
    pub fn new(error: impl Into<String>, message: impl Display) -> Self {
        Self {
            error: error.into(),
            message: message.to_string(),
            details: None,
        }
    }
}
