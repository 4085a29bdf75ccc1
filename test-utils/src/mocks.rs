//! Mock IAM API server helpers built on wiremock.

use serde::Serialize;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Mount a mock that answers `GET {route}` with the given JSON body.
pub async fn mount_json_get(server: &MockServer, route: &str, body: &impl Serialize) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

/// Mount a mock that answers `POST {route}` with the given JSON body.
pub async fn mount_json_post(server: &MockServer, route: &str, body: &impl Serialize) {
    Mock::given(method("POST"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

/// Mount a mock that fails with `status` for the first `failures` calls to
/// `GET {route}` and succeeds with the JSON body afterwards.
pub async fn mount_flaky_get(
    server: &MockServer,
    route: &str,
    status: u16,
    failures: u64,
    body: &impl Serialize,
) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(status))
        .up_to_n_times(failures)
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}
