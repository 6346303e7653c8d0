//! Async fetch of a user and the fetch-then-render pipeline.
//!
//! # Design
//! `Fetcher` pairs the stateless `UserClient` with a `Transport`. A fetch
//! suspends once for the round-trip and yields exactly one outcome. The
//! pipeline only hands a record to the renderer after a successful decode.
//! `get_details` is the fire-and-forget entry point: failures end the
//! pipeline with a logged diagnostic and are not returned to the caller.

use tracing::Instrument;

use crate::client::UserClient;
use crate::error::FetchError;
use crate::mount::InsertPosition;
use crate::render::CardRenderer;
use crate::transport::{Transport, UreqTransport};
use crate::types::{User, UserId};

/// The result of one fetch: `Ok` is a decoded record, `Err` says why not.
pub type FetchOutcome = Result<User, FetchError>;

/// Placement and styling for cards produced by the pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardOptions {
    pub position: InsertPosition,
    pub class_name: String,
}

impl Default for CardOptions {
    fn default() -> Self {
        Self {
            position: InsertPosition::BeforeEnd,
            class_name: "user".to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Fetcher<T> {
    client: UserClient,
    transport: T,
}

impl Fetcher<UreqTransport> {
    /// A fetcher for `base_url` using the bundled ureq transport.
    pub fn with_base_url(base_url: &str) -> Result<Self, FetchError> {
        Ok(Self::new(UserClient::new(base_url)?, UreqTransport::new()))
    }
}

impl<T: Transport> Fetcher<T> {
    pub fn new(client: UserClient, transport: T) -> Self {
        Self { client, transport }
    }

    pub fn client(&self) -> &UserClient {
        &self.client
    }

    pub async fn fetch_user(&self, id: &UserId) -> FetchOutcome {
        let request = self.client.build_get_user(id);
        let span = tracing::debug_span!("fetch_user", user_id = %id, url = %request.url);
        async {
            let response = self.transport.execute(request).await?;
            self.client.parse_get_user(response)
        }
        .instrument(span)
        .await
    }

    /// Fetch `id` and render it, returning the failure if there was one.
    pub async fn fetch_and_render(
        &self,
        id: &UserId,
        renderer: &CardRenderer,
        options: &CardOptions,
    ) -> Result<User, FetchError> {
        let user = self.fetch_user(id).await?;
        renderer.render(&user, options.position, &options.class_name);
        Ok(user)
    }

    /// Fetch `id` and render it. Failures are logged, never returned.
    pub async fn get_details(&self, id: &UserId, renderer: &CardRenderer, options: &CardOptions) {
        match self.fetch_and_render(id, renderer, options).await {
            Ok(user) => tracing::info!(user_id = user.id, "rendered user details"),
            Err(error) => tracing::error!(
                user_id = %id,
                status = error.status(),
                %error,
                "Error fetching user details"
            ),
        }
    }
}
