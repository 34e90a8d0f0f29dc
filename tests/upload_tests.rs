//! Upload surface tests
//!
//! Exercises the multipart upload route end to end: an uploaded
//! identifier file triggers one dispatch run against a mock endpoint and
//! the summary comes back in the response envelope.

use actix_web::{App, test, web};
use endpoint_hitter::core::{Credentials, Dispatcher, DispatcherConfig, RetryPolicy};
use endpoint_hitter::server::AppState;
use endpoint_hitter::server::routes::configure_routes;
use std::time::Duration;
use wiremock::matchers::method;
use wiremock::{Mock, MockServer, ResponseTemplate};

const BOUNDARY: &str = "------------------------test-boundary";

fn state_for(server_uri: &str) -> AppState {
    let dispatcher = Dispatcher::new(DispatcherConfig {
        target_url: format!("{server_uri}/content/{{uuid}}"),
        method_type: "POST".to_string(),
        credentials: Credentials::new("user", "password"),
        throttle: 10,
        retry: RetryPolicy {
            max_retries: 3,
            retry_delay: Duration::from_millis(50),
        },
    })
    .expect("dispatcher should build");
    AppState::new(dispatcher)
}

fn multipart_body(field_name: &str, content: &str) -> (String, String) {
    let content_type = format!("multipart/form-data; boundary={BOUNDARY}");
    let body = format!(
        "--{BOUNDARY}\r\n\
         Content-Disposition: form-data; name=\"{field_name}\"; filename=\"uuids.txt\"\r\n\
         Content-Type: text/plain\r\n\r\n\
         {content}\r\n\
         --{BOUNDARY}--\r\n"
    );
    (content_type, body)
}

#[actix_web::test]
async fn health_endpoint_reports_healthy() {
    let server = MockServer::start().await;
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(state_for(&server.uri())))
            .configure(configure_routes),
    )
    .await;

    for uri in ["/health", "/__health"] {
        let req = test::TestRequest::get().uri(uri).to_request();
        let resp: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(resp["status"], "healthy");
    }
}

#[actix_web::test]
async fn uploaded_file_triggers_a_dispatch_run() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(2)
        .mount(&server)
        .await;

    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(state_for(&server.uri())))
            .configure(configure_routes),
    )
    .await;

    let (content_type, body) = multipart_body("file", "aaa\nbbb");
    let req = test::TestRequest::post()
        .uri("/upload")
        .insert_header(("Content-Type", content_type))
        .set_payload(body)
        .to_request();

    let resp: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(resp["success"], true);
    assert_eq!(resp["data"]["total"], 2);
    assert_eq!(resp["data"]["succeeded"], 2);
    assert_eq!(resp["data"]["success_rate"], 100.0);
}

#[actix_web::test]
async fn upload_summary_reflects_failures() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(400))
        .expect(1)
        .mount(&server)
        .await;

    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(state_for(&server.uri())))
            .configure(configure_routes),
    )
    .await;

    let (content_type, body) = multipart_body("file", "aaa");
    let req = test::TestRequest::post()
        .uri("/upload")
        .insert_header(("Content-Type", content_type))
        .set_payload(body)
        .to_request();

    let resp: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(resp["data"]["total"], 1);
    assert_eq!(resp["data"]["succeeded"], 0);
    assert_eq!(resp["data"]["success_rate"], 0.0);
}

#[actix_web::test]
async fn upload_without_file_field_is_a_bad_request() {
    let server = MockServer::start().await;
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(state_for(&server.uri())))
            .configure(configure_routes),
    )
    .await;

    let (content_type, body) = multipart_body("notfile", "aaa");
    let req = test::TestRequest::post()
        .uri("/upload")
        .insert_header(("Content-Type", content_type))
        .set_payload(body)
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), actix_web::http::StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn empty_upload_reports_undefined_rate() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(state_for(&server.uri())))
            .configure(configure_routes),
    )
    .await;

    let (content_type, body) = multipart_body("file", "");
    let req = test::TestRequest::post()
        .uri("/upload")
        .insert_header(("Content-Type", content_type))
        .set_payload(body)
        .to_request();

    let resp: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(resp["data"]["total"], 0);
    assert_eq!(resp["data"]["success_rate"], serde_json::Value::Null);
}
