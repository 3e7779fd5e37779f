use crate::factory::ServiceClient;
use chrono::{DateTime, Utc};
use errors::ApiResult;
use serde::{Deserialize, Serialize};

/// A user's voice profile. `dna_data` is an opaque JSON blob describing
/// writing-style parameters; the store layer derives its status without
/// interpreting it beyond two top-level keys.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VoiceProfile {
    pub user_id: u64,
    #[serde(default)]
    pub dna_data: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>
}

#[derive(Debug, Serialize)]
struct UpdateProfileRequest<'a> {
    dna_data: &'a str
}

/// Typed endpoints of the profile service. The whole resource lives at
/// the service root: one profile per authenticated user.
pub struct ProfileApi {
    client: ServiceClient
}

impl ProfileApi {
    pub fn new(client: ServiceClient) -> Self {
        Self { client }
    }

    pub async fn fetch(&self) -> ApiResult<VoiceProfile> {
        self.client.get("").await
    }

    pub async fn update(&self, dna_data: &str) -> ApiResult<VoiceProfile> {
        self.client.put("", &UpdateProfileRequest { dna_data }).await
    }
}
