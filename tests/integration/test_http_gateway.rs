use formpipe::core::entities::{SubmissionInput, SuccessToken, DEFAULT_SUCCESS_TOKEN};
use formpipe::core::gateway::{HttpGateway, PersistenceGateway, SaveError};
use formpipe::core::session::FormSession;
use formpipe::core::stages::PERSISTENCE_FAILURE_MESSAGE;
use formpipe::core::SubmissionPipeline;
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn gateway_for(server: &MockServer) -> HttpGateway {
    HttpGateway::new(&format!("{}/submit", server.uri()), Duration::from_secs(5)).unwrap()
}

#[tokio::test]
async fn posts_input_as_json_and_returns_body_token() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/submit"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({"name": "Alice", "email": "a@x.com"})))
        .respond_with(ResponseTemplate::new(201).set_body_string("stored #17"))
        .expect(1)
        .mount(&server)
        .await;

    let token = gateway_for(&server)
        .save(&SubmissionInput::new("Alice", "a@x.com"))
        .await
        .unwrap();

    assert_eq!(token, SuccessToken("stored #17".to_string()));
}

#[tokio::test]
async fn empty_body_yields_default_token() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let token = gateway_for(&server)
        .save(&SubmissionInput::new("Alice", "a@x.com"))
        .await
        .unwrap();

    assert_eq!(token.as_str(), DEFAULT_SUCCESS_TOKEN);
}

#[tokio::test]
async fn error_status_is_a_rejection() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
        .mount(&server)
        .await;

    let err = gateway_for(&server)
        .save(&SubmissionInput::new("Alice", "a@x.com"))
        .await
        .unwrap_err();

    assert_eq!(err, SaveError::Rejected { status: 503 });
}

#[tokio::test]
async fn slow_store_times_out_as_transport_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(3)))
        .mount(&server)
        .await;

    let gateway = HttpGateway::new(
        &format!("{}/submit", server.uri()),
        Duration::from_millis(100),
    )
    .unwrap();
    let err = gateway
        .save(&SubmissionInput::new("Alice", "a@x.com"))
        .await
        .unwrap_err();

    assert!(matches!(err, SaveError::Transport(_)), "got {:?}", err);
}

#[tokio::test]
async fn pipeline_over_http_records_and_isolates_failures() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(body_json(json!({"name": "Bob", "email": "b@x.com"})))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let session = Arc::new(FormSession::new());
    let (pipeline, mut failures) =
        SubmissionPipeline::new(session.clone(), Arc::new(gateway_for(&server)))
            .with_failure_channel();
    assert_eq!(pipeline.gateway_name(), "http");

    let alice = pipeline
        .submit(SubmissionInput::new("Alice", "a@x.com"))
        .await;
    let bob = pipeline.submit(SubmissionInput::new("Bob", "b@x.com")).await;
    let cara = pipeline
        .submit(SubmissionInput::new("Cara", "c@x.com"))
        .await;

    assert_eq!(alice.record().unwrap().index, 0);
    assert_eq!(bob.error().unwrap().message, PERSISTENCE_FAILURE_MESSAGE);
    let cara = cara.record().unwrap();
    assert_eq!(cara.index, 1);
    assert_eq!(cara.name, "John");

    let event = failures.try_recv().unwrap();
    assert_eq!(event.message, PERSISTENCE_FAILURE_MESSAGE);
    assert!(failures.try_recv().is_err());
    assert_eq!(session.counter(), 2);
}

#[tokio::test]
async fn rejected_input_never_reaches_the_store() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let session = Arc::new(FormSession::new());
    let pipeline = SubmissionPipeline::new(session.clone(), Arc::new(gateway_for(&server)));

    let outcome = pipeline.submit(SubmissionInput::new("", "a@x.com")).await;

    assert!(!outcome.is_recorded());
    assert_eq!(session.counter(), 0);
}
