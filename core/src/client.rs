//! Stateless request builder and response parser for the user service.
//!
//! # Design
//! `UserClient` holds only a `base_url`. `build_get_user` produces an
//! `HttpRequest` and `parse_get_user` consumes an `HttpResponse`; the
//! round-trip between them belongs to a `Transport`, which keeps this half
//! deterministic and free of I/O. The identifier is appended as one
//! percent-encoded path segment, so any text reaches the service intact.

use url::Url;

use crate::error::FetchError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{User, UserId};

/// Public endpoint the original card pulled its demo users from.
pub const DEFAULT_BASE_URL: &str = "https://dummyjson.com";

/// Synchronous, stateless client for the user service.
#[derive(Debug, Clone)]
pub struct UserClient {
    base_url: Url,
}

impl UserClient {
    /// Fails if `base_url` is not an absolute URL that can carry a path.
    pub fn new(base_url: &str) -> Result<Self, FetchError> {
        let url = Url::parse(base_url)
            .map_err(|e| FetchError::InvalidBaseUrl(format!("{base_url}: {e}")))?;
        if url.cannot_be_a_base() {
            return Err(FetchError::InvalidBaseUrl(format!(
                "{base_url}: cannot be a base"
            )));
        }
        Ok(Self { base_url: url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn build_get_user(&self, id: &UserId) -> HttpRequest {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push("users").push(id.as_str());
        }
        HttpRequest {
            method: HttpMethod::Get,
            url: url.into(),
            headers: vec![("accept".to_string(), "application/json".to_string())],
        }
    }

    /// Validate the status, then decode the body into a `User`.
    ///
    /// The raw response is logged before anything else. The body of a
    /// non-2xx response is never decoded.
    pub fn parse_get_user(&self, response: HttpResponse) -> Result<User, FetchError> {
        tracing::info!(?response, "received user response");
        check_status(&response)?;
        serde_json::from_str(&response.body).map_err(|e| {
            let content_type = response.header("content-type").unwrap_or("none");
            FetchError::Decode(format!("{e} (content-type: {content_type})"))
        })
    }
}

fn check_status(response: &HttpResponse) -> Result<(), FetchError> {
    if response.is_success() {
        return Ok(());
    }
    Err(FetchError::HttpStatus {
        status: response.status,
    })
}
