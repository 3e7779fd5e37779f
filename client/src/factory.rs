use crate::auth::AuthApi;
use crate::content::ContentApi;
use crate::profile::ProfileApi;
use config::ClientConfig;
use errors::{ApiError, ApiResult};
use reqwest::{Client, Response, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, warn};

/// The three backend services behind the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Service {
    Auth,
    Profile,
    Content
}

impl Service {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Auth => "auth",
            Self::Profile => "profile",
            Self::Content => "content"
        }
    }
}

/// Builds service-scoped clients over one shared HTTP client.
///
/// The shared client enables the cookie store, so the session cookie set
/// by the auth service rides along on every subsequent request to any
/// service, mirroring browser `withCredentials` behavior.
pub struct ClientFactory {
    http: Client,
    config: ClientConfig
}

impl ClientFactory {
    pub fn new(config: ClientConfig) -> ApiResult<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .cookie_store(true)
            .build()
            .map_err(ApiError::Network)?;

        Ok(Self { http, config })
    }

    pub fn service(&self, service: Service) -> ServiceClient {
        let origin = match service {
            Service::Auth => &self.config.auth.base_url,
            Service::Profile => &self.config.profile.base_url,
            Service::Content => &self.config.content.base_url
        };
        let base_url = format!("{}/api/v1/{}", origin.trim_end_matches('/'), service.name());

        ServiceClient {
            http: self.http.clone(),
            base_url,
            service
        }
    }

    pub fn auth_api(&self) -> AuthApi {
        AuthApi::new(self.service(Service::Auth))
    }

    pub fn profile_api(&self) -> ProfileApi {
        ProfileApi::new(self.service(Service::Profile))
    }

    pub fn content_api(&self) -> ContentApi {
        ContentApi::new(self.service(Service::Content))
    }
}

/// HTTP client scoped to one service's `/api/v1/<service>` base path.
#[derive(Clone)]
pub struct ServiceClient {
    http: Client,
    base_url: String,
    service: Service
}

impl ServiceClient {
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let response = self.http.get(self.url(path)).send().await?;
        self.read_json(response).await
    }

    pub async fn post<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> ApiResult<T> {
        let response = self.http.post(self.url(path)).json(body).send().await?;
        self.read_json(response).await
    }

    pub async fn post_unit<B: Serialize>(&self, path: &str, body: &B) -> ApiResult<()> {
        let response = self.http.post(self.url(path)).json(body).send().await?;
        self.ensure_success(response).await?;
        Ok(())
    }

    pub async fn put<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> ApiResult<T> {
        let response = self.http.put(self.url(path)).json(body).send().await?;
        self.read_json(response).await
    }

    pub async fn put_unit<B: Serialize>(&self, path: &str, body: &B) -> ApiResult<()> {
        let response = self.http.put(self.url(path)).json(body).send().await?;
        self.ensure_success(response).await?;
        Ok(())
    }

    pub async fn delete_unit(&self, path: &str) -> ApiResult<()> {
        let response = self.http.delete(self.url(path)).send().await?;
        self.ensure_success(response).await?;
        Ok(())
    }

    async fn read_json<T: DeserializeOwned>(&self, response: Response) -> ApiResult<T> {
        let response = self.ensure_success(response).await?;
        Ok(response.json::<T>().await?)
    }

    /// Normalizes every non-2xx response into [`ApiError::Http`].
    async fn ensure_success(&self, response: Response) -> ApiResult<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let message = extract_error_message(&body)
            .unwrap_or_else(|| format!("{} service request failed", self.service.name()));

        if status == StatusCode::UNAUTHORIZED {
            warn!(service = self.service.name(), "authentication required");
        }
        debug!(service = self.service.name(), status = status.as_u16(), %message, "request failed");

        Err(ApiError::Http {
            status: status.as_u16(),
            message,
            body
        })
    }
}

/// The auth service reports errors as `{"message": ...}`, the profile and
/// content services as `{"error": ...}`. Either field is accepted.
fn extract_error_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value
        .get("message")
        .or_else(|| value.get("error"))
        .and_then(|v| v.as_str())
        .map(|s| s.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_message_field() {
        let body = r#"{"code": 400, "message": "email already registered"}"#;
        assert_eq!(
            extract_error_message(body),
            Some("email already registered".to_string())
        );
    }

    #[test]
    fn falls_back_to_error_field() {
        let body = r#"{"error": "profile not found"}"#;
        assert_eq!(extract_error_message(body), Some("profile not found".to_string()));
    }

    #[test]
    fn non_json_body_yields_none() {
        assert_eq!(extract_error_message("<html>502 Bad Gateway</html>"), None);
        assert_eq!(extract_error_message(""), None);
    }

    #[test]
    fn non_string_message_yields_none() {
        assert_eq!(extract_error_message(r#"{"message": 42}"#), None);
    }
}
