use crate::factory::ServiceClient;
use chrono::{DateTime, Utc};
use errors::ApiResult;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub email: String,
    pub full_name: String,
    pub created_at: DateTime<Utc>
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    pub user: User,
    #[serde(default)]
    pub token: Option<String>
}

#[derive(Debug, Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str
}

#[derive(Debug, Serialize)]
struct RegisterRequest<'a> {
    email: &'a str,
    password: &'a str,
    full_name: &'a str
}

#[derive(Debug, Serialize)]
struct LogoutRequest {
    all: bool
}

#[derive(Debug, Serialize)]
struct UpdateProfileRequest<'a> {
    full_name: &'a str
}

#[derive(Debug, Serialize)]
struct ChangePasswordRequest<'a> {
    current_password: &'a str,
    new_password: &'a str
}

/// Typed endpoints of the auth service. The session cookie issued on
/// login/register is handled by the shared cookie store.
pub struct AuthApi {
    client: ServiceClient
}

impl AuthApi {
    pub fn new(client: ServiceClient) -> Self {
        Self { client }
    }

    pub async fn login(&self, email: &str, password: &str) -> ApiResult<AuthResponse> {
        self.client
            .post("/login", &LoginRequest { email, password })
            .await
    }

    pub async fn register(&self, email: &str, password: &str, full_name: &str) -> ApiResult<AuthResponse> {
        self.client
            .post(
                "/register",
                &RegisterRequest {
                    email,
                    password,
                    full_name
                }
            )
            .await
    }

    /// Ends the current session, or every session when `all` is set.
    pub async fn logout(&self, all: bool) -> ApiResult<()> {
        self.client.post_unit("/logout", &LogoutRequest { all }).await
    }

    pub async fn me(&self) -> ApiResult<User> {
        self.client.get("/me").await
    }

    pub async fn update_profile(&self, full_name: &str) -> ApiResult<User> {
        self.client
            .put("/profile", &UpdateProfileRequest { full_name })
            .await
    }

    pub async fn change_password(&self, current_password: &str, new_password: &str) -> ApiResult<()> {
        self.client
            .put_unit(
                "/password",
                &ChangePasswordRequest {
                    current_password,
                    new_password
                }
            )
            .await
    }
}
