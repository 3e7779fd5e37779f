use crate::flight::Flight;
use client::auth::{AuthApi, AuthResponse, User};
use errors::{ApiError, ApiResult};
use parking_lot::RwLock;
use tracing::debug;

/// Session state over the auth service.
///
/// Holds the current user, replaced wholesale by login/register/fetch and
/// cleared by logout. `is_authenticated()` derives from presence.
pub struct AuthStore {
    api: AuthApi,
    user: RwLock<Option<User>>,
    flight: Flight,
    last_error: RwLock<Option<String>>
}

impl AuthStore {
    pub fn new(api: AuthApi) -> Self {
        Self {
            api,
            user: RwLock::new(None),
            flight: Flight::default(),
            last_error: RwLock::new(None)
        }
    }

    pub fn user(&self) -> Option<User> {
        self.user.read().clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.read().is_some()
    }

    pub fn is_loading(&self) -> bool {
        self.flight.is_active()
    }

    /// Display message from the most recent failed action, for UI binding.
    pub fn last_error(&self) -> Option<String> {
        self.last_error.read().clone()
    }

    fn clear_error(&self) {
        *self.last_error.write() = None;
    }

    fn fail(&self, err: ApiError, fallback: &str) -> ApiError {
        *self.last_error.write() = Some(err.display_message(fallback));
        err
    }

    pub async fn register(&self, email: &str, password: &str, full_name: &str) -> ApiResult<AuthResponse> {
        let _flight = self.flight.begin();
        self.clear_error();

        match self.api.register(email, password, full_name).await {
            Ok(response) => {
                *self.user.write() = Some(response.user.clone());
                Ok(response)
            }
            Err(err) => Err(self.fail(err, "Failed to register"))
        }
    }

    pub async fn login(&self, email: &str, password: &str) -> ApiResult<AuthResponse> {
        let _flight = self.flight.begin();
        self.clear_error();

        match self.api.login(email, password).await {
            Ok(response) => {
                *self.user.write() = Some(response.user.clone());
                Ok(response)
            }
            Err(err) => Err(self.fail(err, "Failed to log in"))
        }
    }

    /// Ends the current session. The cached user is cleared only on
    /// success; a failed logout leaves the session state as it was.
    pub async fn logout(&self) -> ApiResult<()> {
        let _flight = self.flight.begin();
        self.clear_error();

        match self.api.logout(false).await {
            Ok(()) => {
                *self.user.write() = None;
                Ok(())
            }
            Err(err) => Err(self.fail(err, "Failed to log out"))
        }
    }

    /// Fetches the session user. A 401 means "no session": the cached
    /// user is cleared and no display error is recorded, but the error
    /// is still returned so callers can tell the cases apart.
    pub async fn get_current_user(&self) -> ApiResult<User> {
        let _flight = self.flight.begin();
        self.clear_error();

        match self.api.me().await {
            Ok(user) => {
                *self.user.write() = Some(user.clone());
                Ok(user)
            }
            Err(err) if err.is_unauthenticated() => {
                debug!("no active session");
                *self.user.write() = None;
                Err(err)
            }
            Err(err) => Err(self.fail(err, "Failed to load current user"))
        }
    }

    /// Updates the display name of the current user.
    pub async fn update_profile(&self, full_name: &str) -> ApiResult<User> {
        let _flight = self.flight.begin();
        self.clear_error();

        match self.api.update_profile(full_name).await {
            Ok(user) => {
                *self.user.write() = Some(user.clone());
                Ok(user)
            }
            Err(err) => Err(self.fail(err, "Failed to update profile"))
        }
    }

    pub async fn change_password(&self, current_password: &str, new_password: &str) -> ApiResult<()> {
        let _flight = self.flight.begin();
        self.clear_error();

        match self.api.change_password(current_password, new_password).await {
            Ok(()) => Ok(()),
            Err(err) => Err(self.fail(err, "Failed to change password"))
        }
    }
}
