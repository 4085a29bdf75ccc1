//! HTTP-level tests for the REST client against a mock server.

use std::time::Duration;

use iam_rest::{Config, GroupVersion, RestClient, RestError};
use serde::Deserialize;
use wiremock::matchers::{header, header_exists, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[derive(Debug, Deserialize)]
struct Widget {
    name: String,
    count: u32,
}

fn config_for(server: &MockServer) -> Config {
    Config::new(server.uri()).with_group_version(GroupVersion::new("iam.api", "v1"))
}

#[tokio::test]
async fn get_decodes_json_response() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/widgets/w1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "name": "w1",
            "count": 3
        })))
        .mount(&server)
        .await;

    let client = RestClient::for_config(&config_for(&server)).unwrap();
    let widget: Widget = client
        .get()
        .resource("widgets")
        .name("w1")
        .send()
        .await
        .unwrap()
        .decode()
        .unwrap();

    assert_eq!(widget.name, "w1");
    assert_eq!(widget.count, 3);
}

#[tokio::test]
async fn bearer_token_is_sent() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/widgets"))
        .and(header("Authorization", "Bearer tok-123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let config = config_for(&server).with_bearer_token("tok-123");
    let client = RestClient::for_config(&config).unwrap();

    client.get().resource("widgets").send().await.unwrap();
}

#[tokio::test]
async fn secret_key_auth_sends_signed_bearer() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/widgets"))
        .and(header_exists("Authorization"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let config = config_for(&server).with_secret_key_auth("sid", "skey");
    let client = RestClient::for_config(&config).unwrap();

    client.get().resource("widgets").send().await.unwrap();
}

#[tokio::test]
async fn versioned_params_become_query_params() {
    let server = MockServer::start().await;

    #[derive(serde::Serialize)]
    #[serde(rename_all = "camelCase")]
    struct ListOpts {
        #[serde(skip_serializing_if = "Option::is_none")]
        label_selector: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        offset: Option<u64>,
    }

    Mock::given(method("GET"))
        .and(path("/v1/widgets"))
        .and(query_param("labelSelector", "env=prod"))
        .and(query_param("offset", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let client = RestClient::for_config(&config_for(&server)).unwrap();
    client
        .get()
        .resource("widgets")
        .versioned_params(&ListOpts {
            label_selector: Some("env=prod".to_string()),
            offset: Some(10),
        })
        .send()
        .await
        .unwrap();
}

#[tokio::test]
async fn post_sends_json_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/widgets"))
        .and(header("Content-Type", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "name": "w2",
            "count": 0
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = RestClient::for_config(&config_for(&server)).unwrap();
    let created: Widget = client
        .post()
        .resource("widgets")
        .body(&serde_json::json!({"name": "w2"}))
        .send()
        .await
        .unwrap()
        .decode()
        .unwrap();

    assert_eq!(created.name, "w2");
}

#[tokio::test]
async fn not_found_maps_to_typed_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/widgets/missing"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let client = RestClient::for_config(&config_for(&server)).unwrap();
    let err = client
        .get()
        .resource("widgets")
        .name("missing")
        .send()
        .await
        .unwrap_err();

    assert!(matches!(err, RestError::NotFound(_)));
}

#[tokio::test]
async fn api_error_carries_body_verbatim() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/widgets"))
        .respond_with(ResponseTemplate::new(409).set_body_string("widget already exists"))
        .mount(&server)
        .await;

    let client = RestClient::for_config(&config_for(&server)).unwrap();
    let err = client.post().resource("widgets").send().await.unwrap_err();

    match err {
        RestError::Api { status, message } => {
            assert_eq!(status, 409);
            assert_eq!(message, "widget already exists");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn server_errors_are_retried() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/widgets"))
        .respond_with(ResponseTemplate::new(500))
        .up_to_n_times(2)
        .expect(2)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v1/widgets"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let config = config_for(&server).with_retries(3, Duration::from_millis(1));
    let client = RestClient::for_config(&config).unwrap();

    client.get().resource("widgets").send().await.unwrap();
}

#[tokio::test]
async fn retry_budget_is_bounded() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/widgets"))
        .respond_with(ResponseTemplate::new(503))
        .expect(3)
        .mount(&server)
        .await;

    let config = config_for(&server).with_retries(2, Duration::from_millis(1));
    let client = RestClient::for_config(&config).unwrap();

    let err = client.get().resource("widgets").send().await.unwrap_err();
    assert!(matches!(err, RestError::ServerError { status: 503, .. }));
}

#[tokio::test]
async fn user_agent_header_is_present() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/widgets"))
        .and(header_exists("User-Agent"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let config = config_for(&server).with_user_agent_suffix("request-tests");
    let client = RestClient::for_config(&config).unwrap();

    client.get().resource("widgets").send().await.unwrap();
}
