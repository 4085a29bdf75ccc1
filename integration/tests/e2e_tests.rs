//! End-to-end tests: iamconfig file in, authenticated API calls out.
//!
//! Everything a caller would do in order, against a mock IAM API server:
//! load a config file, build a clientset, and exercise the typed clients.

use std::io::Write;

use iam_client::meta::{AuthorizeOptions, CreateOptions, DeleteOptions, GetOptions, ListOptions};
use iam_client::Clientset;
use iam_rest::RestError;
use test_utils::fixtures;
use test_utils::mocks;
use wiremock::matchers::{header_exists, method, path};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

fn write_iamconfig(yaml: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "{yaml}").unwrap();
    file
}

async fn clientset_from_file(server: &MockServer, yaml: &str) -> Clientset {
    let file = write_iamconfig(yaml);
    let config = iam_clientcmd::build_config_from_flags(&server.uri(), file.path()).unwrap();
    Clientset::for_config(&config).unwrap()
}

#[tokio::test]
async fn user_lifecycle_through_config_file() {
    let server = MockServer::start().await;
    let user = fixtures::sample_user("sdk");

    mocks::mount_json_post(&server, "/v1/users", &user).await;
    mocks::mount_json_get(&server, "/v1/users/sdk", &user).await;
    Mock::given(method("DELETE"))
        .and(path("/v1/users/sdk"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let clients = clientset_from_file(&server, fixtures::sample_iamconfig_yaml()).await;
    let users = clients.iam().api_v1();
    let users = users.users();

    let created = users.create(&user, &CreateOptions::default()).await.unwrap();
    assert_eq!(created.meta.name, "sdk");

    let fetched = users.get("sdk", &GetOptions::default()).await.unwrap();
    assert_eq!(fetched.email, "sdk@example.com");

    users
        .delete("sdk", &DeleteOptions { unscoped: true })
        .await
        .unwrap();
}

#[tokio::test]
async fn basic_auth_from_config_reaches_the_wire() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/users"))
        .and(header_exists("Authorization"))
        .respond_with(move |request: &Request| {
            let auth = request
                .headers
                .get("Authorization")
                .and_then(|value| value.to_str().ok())
                .unwrap_or_default();
            assert!(auth.starts_with("Basic "), "got {auth:?}");
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({"totalCount": 0, "items": []}))
        })
        .expect(1)
        .mount(&server)
        .await;

    let clients = clientset_from_file(&server, fixtures::sample_iamconfig_yaml()).await;
    let list = clients
        .iam()
        .api_v1()
        .users()
        .list(&ListOptions::default())
        .await
        .unwrap();
    assert_eq!(list.meta.total_count, 0);
}

#[tokio::test]
async fn secret_key_config_sends_signed_bearer() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/secrets"))
        .respond_with(move |request: &Request| {
            let auth = request
                .headers
                .get("Authorization")
                .and_then(|value| value.to_str().ok())
                .unwrap_or_default();
            assert!(auth.starts_with("Bearer "), "got {auth:?}");
            // Three dot-separated segments: a compact JWT.
            assert_eq!(auth.trim_start_matches("Bearer ").split('.').count(), 3);
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({"totalCount": 0, "items": []}))
        })
        .expect(1)
        .mount(&server)
        .await;

    let clients = clientset_from_file(&server, fixtures::sample_secret_iamconfig_yaml()).await;
    clients
        .iam()
        .api_v1()
        .secrets()
        .list(&ListOptions::default())
        .await
        .unwrap();
}

#[tokio::test]
async fn authorization_round_trip() {
    let server = MockServer::start().await;

    mocks::mount_json_post(
        &server,
        "/v1/authz",
        &serde_json::json!({"allowed": true}),
    )
    .await;

    let clients = clientset_from_file(&server, fixtures::sample_iamconfig_yaml()).await;
    let response = clients
        .iam()
        .authz_v1()
        .authz()
        .authorize(&fixtures::sample_authz_request(), &AuthorizeOptions::default())
        .await
        .unwrap();
    assert!(response.allowed);
}

#[tokio::test]
async fn transient_server_errors_are_retried_per_config() {
    let server = MockServer::start().await;
    let policy = fixtures::sample_policy("sdk");

    // sample_iamconfig_yaml allows 3 retries; two failures then success.
    mocks::mount_flaky_get(&server, "/v1/policies/sdk", 503, 2, &policy).await;

    let clients = clientset_from_file(&server, fixtures::sample_iamconfig_yaml()).await;
    let fetched = clients
        .iam()
        .api_v1()
        .policies()
        .get("sdk", &GetOptions::default())
        .await
        .unwrap();
    assert_eq!(fetched.policy.actions, vec!["create", "update"]);
}

#[tokio::test]
async fn permission_denied_is_a_typed_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/secrets/locked"))
        .respond_with(ResponseTemplate::new(403))
        .mount(&server)
        .await;

    let clients = clientset_from_file(&server, fixtures::sample_iamconfig_yaml()).await;
    let err = clients
        .iam()
        .api_v1()
        .secrets()
        .get("locked", &GetOptions::default())
        .await
        .unwrap_err();
    assert!(matches!(err, RestError::PermissionDenied(_)));
}

#[test]
fn invalid_config_file_never_builds_a_client() {
    let file = write_iamconfig(concat!(
        "user:\n",
        "  token: t\n",
        "  username: admin\n",
        "server:\n",
        "  address: https://127.0.0.1:8443\n",
    ));

    let err = iam_clientcmd::build_config_from_flags("", file.path()).unwrap_err();
    assert!(matches!(
        err,
        iam_clientcmd::ClientCmdError::InvalidConfiguration(_)
    ));
}
