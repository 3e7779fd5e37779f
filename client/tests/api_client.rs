use client::{ClientFactory, Service};
use config::ClientConfig;
use errors::ApiError;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn factory(server: &MockServer) -> ClientFactory {
    ClientFactory::new(ClientConfig::single_origin(&server.uri())).unwrap()
}

#[tokio::test]
async fn service_clients_are_scoped_to_their_base_path() {
    let server = MockServer::start().await;
    let factory = factory(&server);

    Mock::given(method("GET"))
        .and(path("/api/v1/auth/me"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 7,
            "email": "ada@example.com",
            "full_name": "Ada Lovelace",
            "created_at": "2025-11-02T10:00:00Z"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let user = factory.auth_api().me().await.unwrap();
    assert_eq!(user.id, 7);
    assert_eq!(user.full_name, "Ada Lovelace");
}

#[tokio::test]
async fn error_message_is_extracted_from_message_field() {
    let server = MockServer::start().await;
    let factory = factory(&server);

    Mock::given(method("POST"))
        .and(path("/api/v1/auth/register"))
        .respond_with(ResponseTemplate::new(409).set_body_json(json!({
            "code": 409,
            "message": "email already registered"
        })))
        .mount(&server)
        .await;

    let err = factory
        .auth_api()
        .register("ada@example.com", "hunter22", "Ada")
        .await
        .unwrap_err();

    match err {
        ApiError::Http { status, message, .. } => {
            assert_eq!(status, 409);
            assert_eq!(message, "email already registered");
        }
        other => panic!("expected Http error, got {other:?}")
    }
}

#[tokio::test]
async fn error_message_is_extracted_from_error_field() {
    let server = MockServer::start().await;
    let factory = factory(&server);

    Mock::given(method("GET"))
        .and(path("/api/v1/profile"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({
            "error": "database unavailable"
        })))
        .mount(&server)
        .await;

    let err = factory.profile_api().fetch().await.unwrap_err();
    assert_eq!(err.display_message("fallback"), "database unavailable");
}

#[tokio::test]
async fn unparseable_error_body_falls_back_to_service_message() {
    let server = MockServer::start().await;
    let factory = factory(&server);

    Mock::given(method("GET"))
        .and(path("/api/v1/profile"))
        .respond_with(ResponseTemplate::new(502).set_body_string("<html>Bad Gateway</html>"))
        .mount(&server)
        .await;

    let err = factory.profile_api().fetch().await.unwrap_err();
    match err {
        ApiError::Http { status, message, body } => {
            assert_eq!(status, 502);
            assert_eq!(message, "profile service request failed");
            assert_eq!(body, "<html>Bad Gateway</html>");
        }
        other => panic!("expected Http error, got {other:?}")
    }
}

#[tokio::test]
async fn unauthorized_is_detectable_by_callers() {
    let server = MockServer::start().await;
    let factory = factory(&server);

    Mock::given(method("GET"))
        .and(path("/api/v1/auth/me"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "code": 401,
            "message": "no active session"
        })))
        .mount(&server)
        .await;

    let err = factory.auth_api().me().await.unwrap_err();
    assert!(err.is_unauthenticated());
}

#[tokio::test]
async fn session_cookie_is_carried_to_subsequent_requests() {
    let server = MockServer::start().await;
    let factory = factory(&server);

    Mock::given(method("POST"))
        .and(path("/api/v1/auth/login"))
        .and(body_json(json!({
            "email": "ada@example.com",
            "password": "hunter22"
        })))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("set-cookie", "session=abc123; Path=/; HttpOnly")
                .set_body_json(json!({
                    "user": {
                        "id": 7,
                        "email": "ada@example.com",
                        "full_name": "Ada Lovelace",
                        "created_at": "2025-11-02T10:00:00Z"
                    }
                }))
        )
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/v1/auth/me"))
        .and(header("cookie", "session=abc123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 7,
            "email": "ada@example.com",
            "full_name": "Ada Lovelace",
            "created_at": "2025-11-02T10:00:00Z"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let auth = factory.auth_api();
    auth.login("ada@example.com", "hunter22").await.unwrap();
    let user = auth.me().await.unwrap();
    assert_eq!(user.email, "ada@example.com");
}

#[tokio::test]
async fn delete_discards_the_response_body() {
    let server = MockServer::start().await;
    let factory = factory(&server);

    Mock::given(method("DELETE"))
        .and(path("/api/v1/content/42"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    factory.content_api().delete(42).await.unwrap();
}

#[tokio::test]
async fn list_builds_pagination_query() {
    let server = MockServer::start().await;
    let factory = factory(&server);

    Mock::given(method("GET"))
        .and(path("/api/v1/content"))
        .and(wiremock::matchers::query_param("page", "2"))
        .and(wiremock::matchers::query_param("size", "25"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "posts": [],
            "total": 0,
            "page": 2,
            "size": 25
        })))
        .expect(1)
        .mount(&server)
        .await;

    let listing = factory.content_api().list(Some(2), Some(25)).await.unwrap();
    assert_eq!(listing.page, 2);
    assert!(listing.posts.is_empty());
}

#[test]
fn service_names_match_base_paths() {
    assert_eq!(Service::Auth.name(), "auth");
    assert_eq!(Service::Profile.name(), "profile");
    assert_eq!(Service::Content.name(), "content");
}
