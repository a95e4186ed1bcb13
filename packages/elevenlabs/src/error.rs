use http::StatusCode;
use serde_json::Value;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("reqwest error: {0}")]
    ReqwestError(#[from] reqwest::Error),
    #[error("serde error: {0}")]
    SerdeError(#[from] serde_json::Error),
    #[error("url error: {0}")]
    UrlError(#[from] url::ParseError),
    #[error("ElevenLabs API error: {}", .status.as_u16())]
    HttpError {
        status: StatusCode,
        /// Error body, if the provider sent parseable JSON.
        body: Option<Value>,
    },
    #[error("request must have a body")]
    MissingRequestBody,
}

impl Error {
    /// The provider's own explanation, from `detail.message` of an error body.
    pub fn provider_message(&self) -> Option<&str> {
        match self {
            Error::HttpError { body: Some(body), .. } => {
                body.get("detail")?.get("message")?.as_str()
            }
            _ => None,
        }
    }

    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Error::HttpError { status, .. } => Some(*status),
            Error::ReqwestError(err) => err.status(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn provider_message_reads_detail() {
        let err = Error::HttpError {
            status: StatusCode::UNAUTHORIZED,
            body: Some(json!({"detail": {"status": "invalid_api_key", "message": "Invalid API key"}})),
        };
        assert_eq!(err.provider_message(), Some("Invalid API key"));
    }

    #[test]
    fn status_message_when_detail_is_missing() {
        let err = Error::HttpError {
            status: StatusCode::TOO_MANY_REQUESTS,
            body: Some(json!({"detail": "slow down"})),
        };
        assert_eq!(err.provider_message(), None);
        assert_eq!(err.to_string(), "ElevenLabs API error: 429");
    }
}
