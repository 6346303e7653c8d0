//! Executing an `HttpRequest` against the network.
//!
//! # Design
//! `Transport` is the seam between the deterministic client and real I/O,
//! so tests can swap in canned responses. `UreqTransport` disables ureq's
//! status-as-error behaviour: 4xx/5xx come back as data and status
//! interpretation stays with `UserClient`. The blocking call runs on
//! tokio's blocking pool so the calling task suspends instead of stalling
//! the scheduler.

use async_trait::async_trait;

use crate::error::FetchError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};

/// Performs one HTTP round-trip.
///
/// Any failure to obtain a complete response maps to
/// `FetchError::Transport`. A response with an error status is not a
/// transport failure.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, FetchError>;
}

/// `Transport` backed by a shared ureq agent.
#[derive(Debug, Clone)]
pub struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    pub fn new() -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self { agent }
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Transport for UreqTransport {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, FetchError> {
        let agent = self.agent.clone();
        tokio::task::spawn_blocking(move || execute_blocking(&agent, request))
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?
    }
}

fn execute_blocking(agent: &ureq::Agent, request: HttpRequest) -> Result<HttpResponse, FetchError> {
    let mut builder = match request.method {
        HttpMethod::Get => agent.get(&request.url),
    };
    for (name, value) in &request.headers {
        builder = builder.header(name.as_str(), value.as_str());
    }

    let mut response = builder
        .call()
        .map_err(|e| FetchError::Transport(e.to_string()))?;

    let status = response.status().as_u16();
    let headers = response
        .headers()
        .iter()
        .filter_map(|(name, value)| {
            value
                .to_str()
                .ok()
                .map(|v| (name.as_str().to_string(), v.to_string()))
        })
        .collect();
    let body = response
        .body_mut()
        .read_to_string()
        .map_err(|e| FetchError::Transport(e.to_string()))?;

    Ok(HttpResponse {
        status,
        headers,
        body,
    })
}
