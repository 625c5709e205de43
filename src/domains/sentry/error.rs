//! Upstream Sentry API error types.

use thiserror::Error;

/// Result type for upstream Sentry operations.
pub type SentryResult<T> = Result<T, SentryError>;

/// Errors raised while talking to the Sentry REST API.
#[derive(Debug, Error)]
pub enum SentryError {
    /// The request never produced a usable response (connection failure,
    /// timeout, malformed response body).
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Sentry answered with a non-2xx status. The raw body is kept so the
    /// caller can surface it verbatim.
    #[error("Sentry API returned status {status}: {body}")]
    Api { status: u16, body: String },

    /// The configured auth token cannot be used as an HTTP header value.
    #[error("auth token contains characters not valid in an HTTP header")]
    InvalidToken,
}

impl SentryError {
    /// The HTTP status associated with this error, if a response was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            Self::Transport(e) => e.status().map(|s| s.as_u16()),
            Self::InvalidToken => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_accessor() {
        let api = SentryError::Api {
            status: 404,
            body: String::new(),
        };
        assert_eq!(api.status(), Some(404));
        assert_eq!(SentryError::InvalidToken.status(), None);
    }
}
