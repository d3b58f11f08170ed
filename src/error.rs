use thiserror::Error;

/// Everything that can go wrong during a synthesis call.
#[derive(Debug, Error)]
pub enum Error {
    /// A parameter is outside the domain the service accepts. Raised before
    /// any network activity.
    #[error("{field}: {value} is not allowed")]
    Validation { field: &'static str, value: String },

    /// The service answered with something other than 200 or 201.
    #[error("http request error, status code: {status}")]
    Service { status: u16 },

    /// The response body was not the expected JSON document, or its audio
    /// payload was not valid base64.
    #[error("failed to decode synthesis response: {reason}")]
    Decode { reason: String },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("network transport error: {0}")]
    Transport(#[from] reqwest::Error),
}

impl Error {
    pub(crate) fn validation(field: &'static str, value: impl ToString) -> Self {
        Error::Validation {
            field,
            value: value.to_string(),
        }
    }

    pub(crate) fn decode(reason: impl Into<String>) -> Self {
        Error::Decode {
            reason: reason.into(),
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Error::Validation { .. })
    }

    /// HTTP status of a rejected request, if that is what this error is.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Service { status } => Some(*status),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_message_names_field_and_value() {
        let err = Error::validation("voiceSpeed", 2.5);
        assert_eq!(err.to_string(), "voiceSpeed: 2.5 is not allowed");
        assert!(err.is_validation());
        assert_eq!(err.status(), None);
    }

    #[test]
    fn service_error_exposes_status() {
        let err = Error::Service { status: 404 };
        assert_eq!(err.status(), Some(404));
        assert!(!err.is_validation());
    }
}
