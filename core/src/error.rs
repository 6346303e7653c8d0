//! Error types for fetching a user.
//!
//! # Design
//! One variant per stage of the pipeline: the round-trip itself, the status
//! check, and decoding the body. A non-2xx response never has its body
//! decoded, so `HttpStatus` carries only the code.

use thiserror::Error;

/// Why a fetch failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The request never produced a response: refused connection, DNS
    /// failure, reset, or an unreadable body stream.
    #[error("transport failed: {0}")]
    Transport(String),

    /// The server answered with a status outside 200–299.
    #[error("HTTP error! status: {status}")]
    HttpStatus { status: u16 },

    /// The body of a successful response was not a valid user record.
    #[error("could not decode user record: {0}")]
    Decode(String),

    /// The service root is not an absolute URL that can carry a path.
    #[error("invalid base url {0}")]
    InvalidBaseUrl(String),
}

impl FetchError {
    /// The HTTP status code, for `HttpStatus` errors.
    pub fn status(&self) -> Option<u16> {
        match self {
            FetchError::HttpStatus { status } => Some(*status),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_status_message_includes_code() {
        let err = FetchError::HttpStatus { status: 404 };
        assert_eq!(err.to_string(), "HTTP error! status: 404");
        assert_eq!(err.status(), Some(404));
    }

    #[test]
    fn non_status_errors_have_no_code() {
        assert_eq!(FetchError::Transport("refused".into()).status(), None);
        assert_eq!(FetchError::Decode("eof".into()).status(), None);
    }
}
