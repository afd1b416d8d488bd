//! End-to-end tests: a real axum server on loopback, the SDK as client.

use std::convert::Infallible;
use std::time::Duration;

use axum::body::Body;
use axum::extract::Json;
use axum::http::StatusCode;
use axum::routing::post;
use axum::Router;
use mock_answer::MockConfig;
use sitechat_models::{ModelError, QuestionRequest};
use sitechat_sdk::{AnswerClient, ClientConfig, Endpoints, SdkError};

/// Serve `app` on an ephemeral port and return its base URL.
async fn serve(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

fn client(base_url: &str) -> AnswerClient {
    AnswerClient::new(ClientConfig::new(base_url).unwrap())
}

/// Route answering every question with the given raw chunks.
fn chunked(parts: Vec<&'static [u8]>) -> Router {
    Router::new().route(
        Endpoints::QUESTION_ON_URL,
        post(move || async move {
            Body::from_stream(futures::stream::iter(
                parts.into_iter().map(Ok::<_, Infallible>),
            ))
        }),
    )
}

#[derive(Default)]
struct Outcome {
    snapshots: Vec<String>,
    error: Option<SdkError>,
    done: bool,
}

async fn run(client: &AnswerClient, question: &str) -> Outcome {
    let mut snapshots = Vec::new();
    let mut error = None;
    let mut done = false;
    client
        .send(
            question,
            |text| snapshots.push(text.to_string()),
            |err| error = Some(err),
            || done = true,
        )
        .await;
    Outcome {
        snapshots,
        error,
        done,
    }
}

fn assert_growing(snapshots: &[String]) {
    for pair in snapshots.windows(2) {
        assert!(
            pair[1].starts_with(pair[0].as_str()) && pair[1].len() > pair[0].len(),
            "{:?} does not grow into {:?}",
            pair[0],
            pair[1]
        );
    }
}

#[tokio::test]
async fn chunks_arrive_as_growing_snapshots() {
    let base = serve(chunked(vec![b"Hel", b"lo ", b"wor", b"ld"])).await;
    let outcome = run(&client(&base), "hi").await;

    assert!(outcome.error.is_none());
    assert!(outcome.done);
    assert_growing(&outcome.snapshots);
    assert_eq!(outcome.snapshots.last().unwrap(), "Hello world");
}

#[tokio::test]
async fn multibyte_characters_survive_chunk_splits() {
    let base = serve(chunked(vec![b"caf\xC3", b"\xA9 \xE2\x98", b"\x95"])).await;
    let outcome = run(&client(&base), "coffee?").await;

    assert!(outcome.done);
    assert_eq!(outcome.snapshots.last().unwrap(), "café ☕");
    assert!(outcome.snapshots.iter().all(|s| !s.contains('\u{FFFD}')));
}

#[tokio::test]
async fn question_is_posted_as_trimmed_json() {
    let app = Router::new().route(
        Endpoints::QUESTION_ON_URL,
        post(|Json(req): Json<QuestionRequest>| async move { req.question }),
    );
    let base = serve(app).await;
    let outcome = run(&client(&base), "  is it trimmed?  ").await;

    assert!(outcome.done);
    assert_eq!(outcome.snapshots.last().unwrap(), "is it trimmed?");
}

#[tokio::test]
async fn mock_answer_round_trip() {
    let base = serve(mock_answer::router(MockConfig {
        chunk_size: 5,
        chunk_delay: Duration::from_millis(1),
        ..MockConfig::default()
    }))
    .await;

    let answer = client(&base).ask("What is this?").await.unwrap();
    let text = answer.collect_text().await.unwrap();
    assert_eq!(text, mock_answer::answer::compose("What is this?"));
}

#[tokio::test]
async fn failure_status_is_reported_once() {
    let app = Router::new().route(
        Endpoints::QUESTION_ON_URL,
        post(|| async { (StatusCode::BAD_REQUEST, "Domain not processed yet") }),
    );
    let base = serve(app).await;
    let outcome = run(&client(&base), "hi").await;

    assert!(outcome.snapshots.is_empty());
    assert!(!outcome.done);
    match outcome.error {
        Some(SdkError::Status { status, body }) => {
            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert_eq!(body, "Domain not processed yet");
        }
        other => panic!("expected a status error, got {other:?}"),
    }
}

#[tokio::test]
async fn no_content_is_not_streamable() {
    let app = Router::new().route(
        Endpoints::QUESTION_ON_URL,
        post(|| async { StatusCode::NO_CONTENT }),
    );
    let base = serve(app).await;
    let outcome = run(&client(&base), "hi").await;

    assert!(matches!(outcome.error, Some(SdkError::NotStreaming)));
    assert!(!outcome.done);
}

#[tokio::test]
async fn connection_refused_is_an_http_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let outcome = run(&client(&format!("http://{addr}")), "anyone there?").await;
    assert!(matches!(outcome.error, Some(SdkError::Http(_))));
    assert!(outcome.snapshots.is_empty());
    assert!(!outcome.done);
}

#[tokio::test]
async fn blank_question_never_leaves_the_client() {
    let outcome = run(&client("http://127.0.0.1:9"), "   ").await;
    assert!(matches!(
        outcome.error,
        Some(SdkError::Question(ModelError::EmptyQuestion))
    ));
}
