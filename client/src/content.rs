use crate::factory::ServiceClient;
use chrono::{DateTime, Utc};
use errors::ApiResult;
use serde::{Deserialize, Serialize};

/// Wire shape of a post. `note_id` is the Go zero value (`0`) for posts
/// with no source note; the store mapping turns that into `None`. Status
/// arrives as a plain string and is narrowed by the store mapping.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostResponse {
    pub id: u64,
    pub user_id: u64,
    #[serde(default)]
    pub note_id: u64,
    pub content_md: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostListResponse {
    pub posts: Vec<PostResponse>,
    pub total: i64,
    pub page: u32,
    pub size: u32
}

/// Where a note came from: typed in or transcribed from voice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoteSource {
    Text,
    Voice
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NoteResponse {
    pub id: u64,
    pub user_id: u64,
    pub original_text: String,
    pub source: NoteSource,
    pub created_at: DateTime<Utc>
}

/// Response of the generation endpoint. Either `post_id` references a
/// finished post, or `content` carries the generated Markdown inline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateResponse {
    #[serde(default)]
    pub post_id: Option<u64>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub status: Option<String>
}

#[derive(Debug, Serialize)]
struct NoteRequest<'a> {
    text: &'a str,
    source: NoteSource
}

#[derive(Debug, Serialize)]
struct GenerateRequest {
    note_id: u64
}

#[derive(Debug, Serialize)]
struct CreatePostRequest<'a> {
    content_md: &'a str
}

#[derive(Debug, Serialize)]
struct UpdatePostRequest<'a> {
    content_md: &'a str,
    status: &'a str
}

/// Typed endpoints of the content service.
pub struct ContentApi {
    client: ServiceClient
}

impl ContentApi {
    pub fn new(client: ServiceClient) -> Self {
        Self { client }
    }

    pub async fn list(&self, page: Option<u32>, size: Option<u32>) -> ApiResult<PostListResponse> {
        let mut query = Vec::new();
        if let Some(page) = page {
            query.push(format!("page={page}"));
        }
        if let Some(size) = size {
            query.push(format!("size={size}"));
        }
        let path = if query.is_empty() {
            String::new()
        } else {
            format!("?{}", query.join("&"))
        };

        self.client.get(&path).await
    }

    pub async fn get(&self, id: u64) -> ApiResult<PostResponse> {
        self.client.get(&format!("/{id}")).await
    }

    pub async fn create(&self, content_md: &str) -> ApiResult<PostResponse> {
        self.client.post("", &CreatePostRequest { content_md }).await
    }

    pub async fn update(&self, id: u64, content_md: &str, status: &str) -> ApiResult<PostResponse> {
        self.client
            .put(&format!("/{id}"), &UpdatePostRequest { content_md, status })
            .await
    }

    pub async fn delete(&self, id: u64) -> ApiResult<()> {
        self.client.delete_unit(&format!("/{id}")).await
    }

    pub async fn create_note(&self, text: &str, source: NoteSource) -> ApiResult<NoteResponse> {
        self.client.post("/notes", &NoteRequest { text, source }).await
    }

    pub async fn generate(&self, note_id: u64) -> ApiResult<GenerateResponse> {
        self.client.post("/generate", &GenerateRequest { note_id }).await
    }
}
