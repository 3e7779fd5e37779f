use crate::flight::Flight;
use client::profile::{ProfileApi, VoiceProfile};
use errors::{ApiError, ApiResult};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Derived state of the voice-DNA blob.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DnaStatus {
    /// The blob parses and carries both `profile` and `style` keys.
    Active,
    /// No profile, an empty blob, or a parseable blob missing either key.
    NotConfigured,
    /// The blob is present but is not valid JSON.
    Corrupted
}

/// Voice-profile state over the profile service.
pub struct ProfileStore {
    api: ProfileApi,
    profile: RwLock<Option<VoiceProfile>>,
    flight: Flight,
    last_error: RwLock<Option<String>>
}

impl ProfileStore {
    pub fn new(api: ProfileApi) -> Self {
        Self {
            api,
            profile: RwLock::new(None),
            flight: Flight::default(),
            last_error: RwLock::new(None)
        }
    }

    pub fn profile(&self) -> Option<VoiceProfile> {
        self.profile.read().clone()
    }

    pub fn is_loading(&self) -> bool {
        self.flight.is_active()
    }

    pub fn last_error(&self) -> Option<String> {
        self.last_error.read().clone()
    }

    pub fn dna_status(&self) -> DnaStatus {
        let profile = self.profile.read();
        derive_dna_status(profile.as_ref().and_then(|p| p.dna_data.as_deref()))
    }

    pub fn has_voice_dna(&self) -> bool {
        self.dna_status() == DnaStatus::Active
    }

    fn clear_error(&self) {
        *self.last_error.write() = None;
    }

    fn fail(&self, err: ApiError, fallback: &str) -> ApiError {
        *self.last_error.write() = Some(err.display_message(fallback));
        err
    }

    /// Fetches the voice profile. A 404 means the user has none yet: the
    /// cache is cleared and the call succeeds with `None`.
    pub async fn get_profile(&self) -> ApiResult<Option<VoiceProfile>> {
        let _flight = self.flight.begin();
        self.clear_error();

        match self.api.fetch().await {
            Ok(profile) => {
                *self.profile.write() = Some(profile.clone());
                Ok(Some(profile))
            }
            Err(err) if err.is_not_found() => {
                debug!("no voice profile yet");
                *self.profile.write() = None;
                Ok(None)
            }
            Err(err) => Err(self.fail(err, "Failed to load voice profile"))
        }
    }

    pub async fn update_profile(&self, dna_data: &str) -> ApiResult<VoiceProfile> {
        let _flight = self.flight.begin();
        self.clear_error();

        match self.api.update(dna_data).await {
            Ok(profile) => {
                *self.profile.write() = Some(profile.clone());
                Ok(profile)
            }
            Err(err) => Err(self.fail(err, "Failed to update voice profile"))
        }
    }
}

/// A blob is active only when it parses and has both `profile` and
/// `style` top-level keys. Parse failures degrade to [`DnaStatus::Corrupted`]
/// rather than surfacing; everything else short of active reads as not
/// configured.
fn derive_dna_status(dna_data: Option<&str>) -> DnaStatus {
    let raw = match dna_data {
        None | Some("") => return DnaStatus::NotConfigured,
        Some(raw) => raw
    };

    match serde_json::from_str::<serde_json::Value>(raw) {
        Ok(value) => {
            if value.get("profile").is_some() && value.get("style").is_some() {
                DnaStatus::Active
            } else {
                DnaStatus::NotConfigured
            }
        }
        Err(err) => {
            debug!(error = %err, "voice DNA blob is not valid JSON");
            DnaStatus::Corrupted
        }
    }
}
