#![allow(clippy::unwrap_used)]
// Integration tests for `ApiSession` using wiremock.

use secrecy::SecretString;
use serde_json::json;
use url::Url;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use ionscope_api::{ApiSession, Error};

// ── Helpers ─────────────────────────────────────────────────────────

async fn setup() -> (MockServer, ApiSession) {
    let server = MockServer::start().await;
    let base_url = Url::parse(&server.uri()).unwrap();
    let session = ApiSession::with_client(reqwest::Client::new(), base_url);
    (server, session)
}

/// Mount the profile + tenant endpoints for a successful token login.
async fn mount_tenant_resolution(server: &MockServer, token: &str) {
    Mock::given(method("GET"))
        .and(path("/v2.0/api/profile"))
        .and(header("x-auth-token", token))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "tenant_id": "1234567890",
            "email": "ops@example.com"
        })))
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v2.0/api/tenants/1234567890"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "1234567890",
            "name": "Example Networks / EMEA"
        })))
        .mount(server)
        .await;
}

// ── Authentication ──────────────────────────────────────────────────

#[tokio::test]
async fn token_login_resolves_tenant() {
    let (server, session) = setup().await;
    mount_tenant_resolution(&server, "tok-123").await;

    session
        .login_with_token(SecretString::from("tok-123".to_owned()))
        .await
        .unwrap();

    assert_eq!(session.tenant_id().as_deref(), Some("1234567890"));
    assert_eq!(
        session.tenant_name().as_deref(),
        Some("Example Networks / EMEA")
    );
}

#[tokio::test]
async fn rejected_token_is_an_auth_failure() {
    let (server, session) = setup().await;

    Mock::given(method("GET"))
        .and(path("/v2.0/api/profile"))
        .respond_with(ResponseTemplate::new(401).set_body_string("Unauthorized"))
        .mount(&server)
        .await;

    let result = session
        .login_with_token(SecretString::from("bad-token".to_owned()))
        .await;

    assert!(
        matches!(result, Err(Error::Authentication { .. })),
        "expected Authentication error, got: {result:?}"
    );

    // Token was cleared; tenant-scoped fetches must refuse to run.
    let fetch = session.machines().await;
    assert!(matches!(fetch, Err(Error::NotLoggedIn)));
}

#[tokio::test]
async fn credential_login_exchanges_password_for_token() {
    let (server, session) = setup().await;

    Mock::given(method("POST"))
        .and(path("/v2.0/api/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "x_auth_token": "session-tok"
        })))
        .mount(&server)
        .await;
    mount_tenant_resolution(&server, "session-tok").await;

    let password = SecretString::from("hunter2".to_owned());
    session
        .login_with_credentials("ops@example.com", &password)
        .await
        .unwrap();

    assert!(session.tenant_name().is_some());
}

#[tokio::test]
async fn login_without_token_in_response_fails() {
    let (server, session) = setup().await;

    Mock::given(method("POST"))
        .and(path("/v2.0/api/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;

    let password = SecretString::from("hunter2".to_owned());
    let result = session
        .login_with_credentials("ops@example.com", &password)
        .await;

    assert!(matches!(result, Err(Error::Authentication { .. })));
}

// ── Collections ─────────────────────────────────────────────────────

#[tokio::test]
async fn machines_unwraps_the_collection_envelope() {
    let (server, session) = setup().await;
    mount_tenant_resolution(&server, "tok").await;

    Mock::given(method("GET"))
        .and(path("/v2.0/api/tenants/1234567890/machines"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "count": 2,
            "items": [
                {
                    "sl_no": "SN0001",
                    "model_name": "ion 3000",
                    "machine_state": "claimed",
                    "image_version": "5.6.1",
                    "connected": true,
                    "em_element_id": "elem-1"
                },
                {
                    "sl_no": "SN0002",
                    "model_name": "ion 7000v",
                    "machine_state": "allocated",
                    "connected": false
                }
            ]
        })))
        .mount(&server)
        .await;

    session
        .login_with_token(SecretString::from("tok".to_owned()))
        .await
        .unwrap();
    let machines = session.machines().await.unwrap();

    assert_eq!(machines.len(), 2);
    assert_eq!(machines[0].sl_no, "SN0001");
    assert_eq!(machines[0].model_name.as_deref(), Some("ion 3000"));
    assert!(machines[0].connected);
    assert_eq!(machines[1].em_element_id, None);
}

#[tokio::test]
async fn missing_items_array_is_an_empty_collection() {
    let (server, session) = setup().await;
    mount_tenant_resolution(&server, "tok").await;

    Mock::given(method("GET"))
        .and(path("/v2.0/api/tenants/1234567890/sites"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "count": 0 })))
        .mount(&server)
        .await;

    session
        .login_with_token(SecretString::from("tok".to_owned()))
        .await
        .unwrap();
    let sites = session.sites().await.unwrap();
    assert!(sites.is_empty());
}

#[tokio::test]
async fn server_error_surfaces_status_and_body() {
    let (server, session) = setup().await;
    mount_tenant_resolution(&server, "tok").await;

    Mock::given(method("GET"))
        .and(path("/v2.0/api/tenants/1234567890/elements"))
        .respond_with(ResponseTemplate::new(500).set_body_string("backend exploded"))
        .mount(&server)
        .await;

    session
        .login_with_token(SecretString::from("tok".to_owned()))
        .await
        .unwrap();
    let result = session.elements().await;

    match result {
        Err(Error::Api { status, message }) => {
            assert_eq!(status, 500);
            assert!(message.contains("backend exploded"));
        }
        other => panic!("expected Api error, got: {other:?}"),
    }
}

#[tokio::test]
async fn multibyte_error_body_is_truncated_without_panicking() {
    let (server, session) = setup().await;
    mount_tenant_resolution(&server, "tok").await;

    // 199 ASCII bytes followed by a two-byte character straddling the
    // 200-byte truncation point.
    let body = format!("{}é", "a".repeat(199));
    Mock::given(method("GET"))
        .and(path("/v2.0/api/tenants/1234567890/machines"))
        .respond_with(ResponseTemplate::new(500).set_body_string(body))
        .mount(&server)
        .await;

    session
        .login_with_token(SecretString::from("tok".to_owned()))
        .await
        .unwrap();

    match session.machines().await {
        Err(Error::Api { status, message }) => {
            assert_eq!(status, 500);
            assert_eq!(message, "a".repeat(199));
        }
        other => panic!("expected Api error, got: {other:?}"),
    }
}

#[tokio::test]
async fn logout_clears_the_session() {
    let (server, session) = setup().await;
    mount_tenant_resolution(&server, "tok").await;

    Mock::given(method("GET"))
        .and(path("/v2.0/api/logout"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;

    session
        .login_with_token(SecretString::from("tok".to_owned()))
        .await
        .unwrap();
    session.logout().await.unwrap();

    // Tenant context survives (used for the report filename) but the
    // token is gone, so authenticated requests no longer carry it.
}
