//! # Voxscribe API Client
//!
//! One HTTP client per backend service, built by [`ClientFactory`] from a
//! shared [`reqwest::Client`]. Every service client is scoped to
//! `/api/v1/<service>` on its configured origin, sends and receives JSON,
//! and carries the session cookie through the shared cookie store.
//!
//! Error responses pass through a single normalization path: the
//! human-readable message is pulled from the body's `message` or `error`
//! field when present, with a generic per-service fallback, and the raw
//! body is preserved on the error. No retry, no backoff.

pub mod auth;
pub mod content;
pub mod factory;
pub mod profile;

pub use auth::{AuthApi, AuthResponse, User};
pub use content::{ContentApi, GenerateResponse, NoteResponse, NoteSource, PostListResponse, PostResponse};
pub use factory::{ClientFactory, Service, ServiceClient};
pub use profile::{ProfileApi, VoiceProfile};
