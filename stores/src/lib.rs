//! # Voxscribe Stores
//!
//! Cached state over the service clients: one store per backend concern.
//! Every action issues one HTTP call, updates the store's cache from the
//! response, records a display message on failure, and returns the
//! original error for the caller to interpret.
//!
//! Stores are `Send + Sync`; share them with `Arc`. Overlapping calls
//! interleave with last-write-wins cache semantics, and `is_loading()`
//! stays true while any call is outstanding.
//!
//! ```no_run
//! use std::sync::Arc;
//! use client::ClientFactory;
//! use config::ClientConfig;
//! use stores::{AuthStore, ContentStore, ProfileStore};
//!
//! # async fn wire() -> errors::ApiResult<()> {
//! let factory = ClientFactory::new(ClientConfig::detect_env())?;
//! let auth = AuthStore::new(factory.auth_api());
//! let profile = Arc::new(ProfileStore::new(factory.profile_api()));
//! let content = ContentStore::new(factory.content_api(), Arc::clone(&profile));
//!
//! auth.login("ada@example.com", "hunter22").await?;
//! let posts = content.list_posts(None, None).await?;
//! # let _ = posts;
//! # Ok(())
//! # }
//! ```

pub mod auth;
pub mod content;
mod flight;
pub mod markdown;
pub mod notify;
pub mod profile;

pub use auth::AuthStore;
pub use client::content::NoteSource;
pub use content::{ContentItem, ContentStore, Generated, PostStatus};
pub use notify::{NoticeLevel, Notifier, TracingNotifier};
pub use profile::{DnaStatus, ProfileStore};
