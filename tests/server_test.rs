mod common;

use std::sync::Arc;

use linkedin_relay::{
    api::AppState,
    config::{ConfigStore, Settings},
    server::router,
};
use reqwest::{Client, StatusCode, header::LOCATION, redirect::Policy};
use serde_json::{Value, json};
use tempfile::tempdir;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{any, method, path},
};

// Serves the relay router on an ephemeral port and returns its base URL.
async fn spawn(state: Arc<AppState>) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router(state)).await.unwrap();
    });
    format!("http://{addr}")
}

fn client() -> Client {
    Client::builder().redirect(Policy::none()).build().unwrap()
}

#[tokio::test]
async fn test_health() {
    let upstream = MockServer::start().await;
    let dir = tempdir().unwrap();
    let (_, state) = common::relay(&upstream, &dir.path().join(".env"), &[]);
    let base = spawn(Arc::new(state)).await;

    let response = client().get(format!("{base}/health")).send().await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_auth_redirects_to_consent_screen() {
    let upstream = MockServer::start().await;
    let dir = tempdir().unwrap();
    let (_, state) = common::relay(&upstream, &dir.path().join(".env"), &[]);
    let state = Arc::new(state);
    let base = spawn(Arc::clone(&state)).await;

    let response = client().get(format!("{base}/auth")).send().await.unwrap();

    assert_eq!(response.status(), StatusCode::FOUND);
    let location = response
        .headers()
        .get(LOCATION)
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert!(location.starts_with(&format!("{}/oauth/v2/authorization?", upstream.uri())));
    let issued = location
        .split('&')
        .find_map(|pair| pair.strip_prefix("state="))
        .unwrap();
    assert!(state.oauth.states().has(issued));
}

#[tokio::test]
async fn test_auth_without_credentials_answers_json_error() {
    let upstream = MockServer::start().await;
    let store = Arc::new(ConfigStore::from_lines("unused.env", Vec::new()));
    let mut settings = Settings::with_base_url(&upstream.uri(), "cid", "csecret");
    settings.client_id = None;
    let base = spawn(Arc::new(AppState::new(settings, store))).await;

    let response = client().get(format!("{base}/auth")).send().await.unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["error"], "configuration_error");
    assert!(
        body["message"]
            .as_str()
            .unwrap()
            .contains("LINKEDIN_CLIENT_ID")
    );
}

#[tokio::test]
async fn test_denied_callback_answers_bad_request() {
    let upstream = MockServer::start().await;
    let dir = tempdir().unwrap();
    let (_, state) = common::relay(&upstream, &dir.path().join(".env"), &[]);
    let base = spawn(Arc::new(state)).await;

    let response = client()
        .get(format!(
            "{base}/auth/callback?error=access_denied&error_description=user%20cancelled"
        ))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = response.json().await.unwrap();
    assert_eq!(
        body,
        json!({
            "error": "oauth_denied",
            "message": "Authorization denied: user cancelled"
        })
    );
}

#[tokio::test]
async fn test_status_reports_held_token_and_actor() {
    let upstream = MockServer::start().await;
    let dir = tempdir().unwrap();
    let (_, state) = common::relay(
        &upstream,
        &dir.path().join(".env"),
        &["LINKEDIN_TOKEN=tok_abc", "LINKEDIN_PROFILE_URN=urn:li:person:u1"],
    );
    let base = spawn(Arc::new(state)).await;

    let body: Value = client()
        .get(format!("{base}/auth/status"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(
        body,
        json!({ "authenticated": true, "actor": "urn:li:person:u1" })
    );
}

#[tokio::test]
async fn test_profile_without_token_answers_unauthorized() {
    let upstream = MockServer::start().await;
    let dir = tempdir().unwrap();
    let (_, state) = common::relay(&upstream, &dir.path().join(".env"), &[]);
    let base = spawn(Arc::new(state)).await;

    let response = client().get(format!("{base}/profile")).send().await.unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["error"], "not_authenticated");
}

#[tokio::test]
async fn test_blank_comment_fields_are_rejected() {
    let upstream = MockServer::start().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&upstream)
        .await;

    let dir = tempdir().unwrap();
    let (_, state) = common::relay(
        &upstream,
        &dir.path().join(".env"),
        &["LINKEDIN_TOKEN=tok_abc", "LINKEDIN_PROFILE_URN=urn:li:person:u1"],
    );
    let base = spawn(Arc::new(state)).await;

    for request in [
        json!({ "target": "urn:li:activity:42", "text": "   " }),
        json!({ "target": "", "text": "nice post" }),
    ] {
        let response = client()
            .post(format!("{base}/comments"))
            .json(&request)
            .send()
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body: Value = response.json().await.unwrap();
        assert_eq!(body["error"], "invalid_input");
    }
}

#[tokio::test]
async fn test_comment_is_created() {
    let upstream = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(
            "/v2/socialActions/urn%3Ali%3Aactivity%3A42/comments",
        ))
        .respond_with(ResponseTemplate::new(201).insert_header("x-restli-id", "c99"))
        .expect(1)
        .mount(&upstream)
        .await;

    let dir = tempdir().unwrap();
    let (_, state) = common::relay(
        &upstream,
        &dir.path().join(".env"),
        &["LINKEDIN_TOKEN=tok_abc", "LINKEDIN_PROFILE_URN=urn:li:person:u1"],
    );
    let base = spawn(Arc::new(state)).await;

    let response = client()
        .post(format!("{base}/comments"))
        .json(&json!({ "target": "urn:li:activity:42", "text": "nice post" }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let body: Value = response.json().await.unwrap();
    assert_eq!(
        body,
        json!({
            "id": "c99",
            "text": "nice post",
            "target": "urn:li:activity:42",
            "actor": "urn:li:person:u1"
        })
    );
}
