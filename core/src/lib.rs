//! Async user-profile fetch and card rendering.
//!
//! # Overview
//! Fetches one user from a JSON service and renders a profile card into a
//! mount point. The request/response half is deterministic (host-does-IO
//! pattern); a `Transport` performs the actual round-trip.
//!
//! # Design
//! - `UserClient` is stateless: it holds only `base_url` and splits the
//!   fetch into `build_get_user` and `parse_get_user`.
//! - `Fetcher` adds the async round-trip and the fetch-then-render
//!   pipeline. A record reaches `CardRenderer` only after a clean decode.
//! - `CardRenderer` receives its `MountPoint` at construction; the mount
//!   point is a shared, append-only handle.
//! - DTOs are defined independently from the mock-server crate;
//!   integration tests catch schema drift.

pub mod client;
pub mod error;
pub mod fetch;
pub mod http;
pub mod mount;
pub mod render;
pub mod transport;
pub mod types;

pub use client::{UserClient, DEFAULT_BASE_URL};
pub use error::FetchError;
pub use fetch::{CardOptions, FetchOutcome, Fetcher};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use mount::{InsertPosition, MountPoint, UnknownPosition};
pub use render::{card_html, CardRenderer};
pub use transport::{Transport, UreqTransport};
pub use types::{User, UserId};
