use crate::flight::Flight;
use crate::markdown;
use crate::notify::{NoticeLevel, Notifier, TracingNotifier};
use crate::profile::ProfileStore;
use chrono::{DateTime, Utc};
use client::content::{ContentApi, NoteResponse, NoteSource, PostResponse};
use errors::{ApiError, ApiResult};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostStatus {
    Draft,
    Published
}

impl PostStatus {
    fn from_wire(raw: &str) -> Self {
        match raw {
            "published" => Self::Published,
            _ => Self::Draft
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Published => "published"
        }
    }
}

/// A post shaped for display. `title` and `excerpt` are derived from the
/// Markdown body at mapping time; the server never stores them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentItem {
    pub id: u64,
    pub user_id: u64,
    pub note_id: Option<u64>,
    pub title: String,
    pub excerpt: String,
    pub body: String,
    pub status: PostStatus,
    pub is_generated: bool,
    pub is_published: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>
}

/// Outcome of [`ContentStore::generate`]: a finished post, or the
/// generated Markdown inline when the backend has not persisted one yet.
#[derive(Debug, Clone, PartialEq)]
pub enum Generated {
    Post(ContentItem),
    Inline {
        content: String,
        status: Option<String>
    }
}

fn map_post(raw: PostResponse) -> ContentItem {
    let status = PostStatus::from_wire(&raw.status);
    let note_id = (raw.note_id != 0).then_some(raw.note_id);

    ContentItem {
        id: raw.id,
        user_id: raw.user_id,
        note_id,
        title: markdown::derive_title(&raw.content_md),
        excerpt: markdown::derive_excerpt(&raw.content_md),
        body: raw.content_md,
        status,
        is_generated: note_id.is_some(),
        is_published: status == PostStatus::Published,
        created_at: raw.created_at,
        updated_at: raw.updated_at
    }
}

/// Content state over the content service: the cached post list, the
/// currently selected post, and the note-then-generate workflow.
///
/// Mutating calls keep the list and the current post consistent: create
/// prepends, update replaces in both, delete removes from both.
pub struct ContentStore {
    api: ContentApi,
    profile: Arc<ProfileStore>,
    notifier: Arc<dyn Notifier>,
    posts: RwLock<Vec<ContentItem>>,
    total: AtomicU64,
    current: RwLock<Option<ContentItem>>,
    flight: Flight,
    last_error: RwLock<Option<String>>
}

impl ContentStore {
    pub fn new(api: ContentApi, profile: Arc<ProfileStore>) -> Self {
        Self::with_notifier(api, profile, Arc::new(TracingNotifier))
    }

    pub fn with_notifier(api: ContentApi, profile: Arc<ProfileStore>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            api,
            profile,
            notifier,
            posts: RwLock::new(Vec::new()),
            total: AtomicU64::new(0),
            current: RwLock::new(None),
            flight: Flight::default(),
            last_error: RwLock::new(None)
        }
    }

    pub fn posts(&self) -> Vec<ContentItem> {
        self.posts.read().clone()
    }

    /// Server-side total across all pages, from the last listing.
    pub fn total(&self) -> u64 {
        self.total.load(Ordering::SeqCst)
    }

    pub fn current_post(&self) -> Option<ContentItem> {
        self.current.read().clone()
    }

    pub fn is_loading(&self) -> bool {
        self.flight.is_active()
    }

    pub fn last_error(&self) -> Option<String> {
        self.last_error.read().clone()
    }

    fn clear_error(&self) {
        *self.last_error.write() = None;
    }

    /// Records the display message, pushes a toast-style notification,
    /// and hands the original error back.
    fn fail(&self, err: ApiError, fallback: &str) -> ApiError {
        let message = err.display_message(fallback);
        self.notifier.notify(NoticeLevel::Error, &message);
        *self.last_error.write() = Some(message);
        err
    }

    pub async fn list_posts(&self, page: Option<u32>, size: Option<u32>) -> ApiResult<Vec<ContentItem>> {
        let _flight = self.flight.begin();
        self.clear_error();

        match self.api.list(page, size).await {
            Ok(listing) => {
                let items: Vec<ContentItem> = listing.posts.into_iter().map(map_post).collect();
                self.total.store(listing.total.max(0) as u64, Ordering::SeqCst);
                *self.posts.write() = items.clone();
                Ok(items)
            }
            Err(err) => Err(self.fail(err, "Failed to load posts"))
        }
    }

    pub async fn get_post(&self, id: u64) -> ApiResult<ContentItem> {
        let _flight = self.flight.begin();
        self.clear_error();

        match self.api.get(id).await {
            Ok(raw) => {
                let item = map_post(raw);
                *self.current.write() = Some(item.clone());
                Ok(item)
            }
            Err(err) => Err(self.fail(err, "Failed to load post"))
        }
    }

    pub async fn create_post(&self, content_md: &str) -> ApiResult<ContentItem> {
        let _flight = self.flight.begin();
        self.clear_error();

        match self.api.create(content_md).await {
            Ok(raw) => {
                let item = map_post(raw);
                self.posts.write().insert(0, item.clone());
                self.total.fetch_add(1, Ordering::SeqCst);
                Ok(item)
            }
            Err(err) => Err(self.fail(err, "Failed to create post"))
        }
    }

    pub async fn update_post(&self, id: u64, content_md: &str, status: PostStatus) -> ApiResult<ContentItem> {
        let _flight = self.flight.begin();
        self.clear_error();

        match self.api.update(id, content_md, status.as_str()).await {
            Ok(raw) => {
                let item = map_post(raw);
                {
                    let mut posts = self.posts.write();
                    if let Some(existing) = posts.iter_mut().find(|p| p.id == id) {
                        *existing = item.clone();
                    }
                }
                *self.current.write() = Some(item.clone());
                Ok(item)
            }
            Err(err) => Err(self.fail(err, "Failed to update post"))
        }
    }

    pub async fn delete_post(&self, id: u64) -> ApiResult<()> {
        let _flight = self.flight.begin();
        self.clear_error();

        match self.api.delete(id).await {
            Ok(()) => {
                self.posts.write().retain(|p| p.id != id);
                let mut current = self.current.write();
                if current.as_ref().is_some_and(|p| p.id == id) {
                    *current = None;
                }
                drop(current);

                let total = self.total.load(Ordering::SeqCst);
                self.total.store(total.saturating_sub(1), Ordering::SeqCst);
                Ok(())
            }
            Err(err) => Err(self.fail(err, "Failed to delete post"))
        }
    }

    /// Submits a free-text or transcribed note for later generation.
    pub async fn create_note(&self, text: &str, source: NoteSource) -> ApiResult<NoteResponse> {
        let _flight = self.flight.begin();
        self.clear_error();

        match self.api.create_note(text, source).await {
            Ok(note) => Ok(note),
            Err(err) => Err(self.fail(err, "Failed to create note"))
        }
    }

    /// Generates a post from a note, creating the note first when only a
    /// prompt is supplied.
    ///
    /// Preconditions are checked before any network call: some input must
    /// be present, and the profile store must report an active voice
    /// profile. When note creation succeeds and generation then fails,
    /// the note stays behind; there is no compensating delete.
    pub async fn generate(&self, note_id: Option<u64>, prompt: Option<&str>) -> ApiResult<Generated> {
        let _flight = self.flight.begin();
        self.clear_error();

        let prompt = prompt.map(str::trim).filter(|p| !p.is_empty());
        let input = match (note_id, prompt) {
            (Some(id), _) => GenerateInput::Note(id),
            (None, Some(text)) => GenerateInput::Prompt(text),
            (None, None) => {
                let err = ApiError::validation("Generation requires a note id or a prompt");
                return Err(self.fail(err, "Failed to generate content"));
            }
        };

        if !self.profile.has_voice_dna() {
            let err = ApiError::validation("Voice profile is not configured");
            return Err(self.fail(err, "Failed to generate content"));
        }

        let note_id = match input {
            GenerateInput::Note(id) => id,
            GenerateInput::Prompt(text) => {
                let note = self
                    .api
                    .create_note(text, NoteSource::Text)
                    .await
                    .map_err(|err| self.fail(err, "Failed to create note"))?;
                debug!(note_id = note.id, "created note for generation");
                note.id
            }
        };

        let generated = self
            .api
            .generate(note_id)
            .await
            .map_err(|err| self.fail(err, "Failed to generate content"))?;

        if let Some(post_id) = generated.post_id {
            let raw = self
                .api
                .get(post_id)
                .await
                .map_err(|err| self.fail(err, "Failed to load post"))?;
            let item = map_post(raw);

            {
                let mut posts = self.posts.write();
                if let Some(existing) = posts.iter_mut().find(|p| p.id == item.id) {
                    *existing = item.clone();
                } else {
                    posts.insert(0, item.clone());
                    self.total.fetch_add(1, Ordering::SeqCst);
                }
            }
            *self.current.write() = Some(item.clone());

            return Ok(Generated::Post(item));
        }

        Ok(Generated::Inline {
            content: generated.content.unwrap_or_default(),
            status: generated.status
        })
    }
}

enum GenerateInput<'a> {
    Note(u64),
    Prompt(&'a str)
}
