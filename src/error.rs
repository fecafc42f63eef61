use crate::messages;
use reqwest::StatusCode;
use thiserror::Error;

/// Anything that kept a well-formed answer from reaching the page.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("server answered {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("response body could not be decoded: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("invalid url {url}: {reason}")]
    InvalidUrl { url: String, reason: String },
}

/// A well-formed answer that still means "no".
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApplicationError {
    #[error("booking rejected")]
    Rejected {
        message: Option<String>,
        errors: Vec<(String, String)>,
    },

    #[error("no slots available")]
    NoSlots { message: Option<String> },
}

impl ApplicationError {
    pub fn notification_text(&self) -> String {
        match self {
            ApplicationError::Rejected { errors, .. } if !errors.is_empty() => {
                let mut text = format!("{}\n", messages::BOOKING_FORM_ERRORS);
                for (field, message) in errors {
                    text.push_str(&format!("{field}: {message}\n"));
                }
                text
            }
            ApplicationError::Rejected { message, .. } => message
                .clone()
                .unwrap_or_else(|| messages::BOOKING_REJECTED.to_string()),
            ApplicationError::NoSlots { message } => message
                .clone()
                .unwrap_or_else(|| messages::NO_SLOTS.to_string()),
        }
    }
}
