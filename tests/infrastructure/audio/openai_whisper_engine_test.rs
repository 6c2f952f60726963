use std::path::PathBuf;
use std::time::Duration;

use axum::extract::Multipart;
use axum::response::IntoResponse;
use axum::routing::post;
use axum::{Json, Router};
use tokio::net::TcpListener;
use tokio::sync::oneshot;

use whisper_relay::application::ports::{TranscriptionEngine, TranscriptionError};
use whisper_relay::infrastructure::audio::OpenAiWhisperEngine;

async fn start_mock_openai_server(
    response_status: u16,
    response_body: &'static str,
) -> (String, oneshot::Sender<()>) {
    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

    let app = Router::new().route(
        "/audio/transcriptions",
        post(move || async move {
            let status = axum::http::StatusCode::from_u16(response_status).unwrap();
            (status, response_body).into_response()
        }),
    );

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let base_url = format!("http://{}", addr);

    tokio::spawn(async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(async {
                shutdown_rx.await.ok();
            })
            .await
            .ok();
    });

    (base_url, shutdown_tx)
}

fn create_engine(base_url: &str) -> OpenAiWhisperEngine {
    OpenAiWhisperEngine::new(
        "test-key".to_string(),
        Some(base_url.to_string()),
        Some("whisper-1".to_string()),
        Duration::from_secs(5),
    )
    .unwrap()
}

fn write_test_audio(dir: &tempfile::TempDir, name: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, b"fake audio bytes").unwrap();
    path
}

#[tokio::test]
async fn given_text_in_response_when_transcribing_then_returns_text_and_payload() {
    let response_body = r#"{"text": "Hello from Whisper"}"#;
    let (base_url, shutdown_tx) = start_mock_openai_server(200, response_body).await;

    let dir = tempfile::TempDir::new().unwrap();
    let path = write_test_audio(&dir, "clip.mp3");

    let result = create_engine(&base_url).transcribe(&path).await.unwrap();

    assert_eq!(result.text.as_deref(), Some("Hello from Whisper"));
    assert_eq!(result.payload["text"], "Hello from Whisper");
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_error_status_when_transcribing_then_returns_redacted_api_error() {
    let response_body = r#"{"error": {"message": "Incorrect API key provided: sk-abc123XYZ"}}"#;
    let (base_url, shutdown_tx) = start_mock_openai_server(401, response_body).await;

    let dir = tempfile::TempDir::new().unwrap();
    let path = write_test_audio(&dir, "clip.mp3");

    let result = create_engine(&base_url).transcribe(&path).await;

    match result {
        Err(TranscriptionError::ApiRequestFailed(message)) => {
            assert!(message.contains("status 401"));
            assert!(message.contains("[REDACTED]"));
            assert!(!message.contains("sk-abc123XYZ"));
        }
        other => panic!("expected ApiRequestFailed, got {:?}", other.map(|r| r.text)),
    }
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_response_without_text_field_when_transcribing_then_text_is_none() {
    let response_body = r#"{"status": "ok"}"#;
    let (base_url, shutdown_tx) = start_mock_openai_server(200, response_body).await;

    let dir = tempfile::TempDir::new().unwrap();
    let path = write_test_audio(&dir, "clip.mp3");

    let result = create_engine(&base_url).transcribe(&path).await.unwrap();

    assert!(result.text.is_none());
    assert_eq!(result.payload["status"], "ok");
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_missing_audio_file_when_transcribing_then_returns_api_error() {
    let engine = create_engine("http://127.0.0.1:9");

    let result = engine
        .transcribe(std::path::Path::new("/nonexistent/clip.mp3"))
        .await;

    assert!(matches!(
        result,
        Err(TranscriptionError::ApiRequestFailed(_))
    ));
}

#[tokio::test]
async fn given_staged_file_when_transcribing_then_form_carries_model_and_file() {
    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

    let app = Router::new().route(
        "/audio/transcriptions",
        post(|mut multipart: Multipart| async move {
            let mut model = String::new();
            let mut file_desc = String::new();
            while let Some(field) = multipart.next_field().await.unwrap() {
                match field.name().unwrap_or_default().to_string().as_str() {
                    "model" => model = field.text().await.unwrap(),
                    "file" => {
                        let filename = field.file_name().unwrap_or_default().to_string();
                        let bytes = field.bytes().await.unwrap();
                        file_desc = format!("{}:{}", filename, bytes.len());
                    }
                    _ => {}
                }
            }
            Json(serde_json::json!({ "text": format!("model={} file={}", model, file_desc) }))
        }),
    );

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base_url = format!("http://{}", listener.local_addr().unwrap());
    tokio::spawn(async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(async {
                shutdown_rx.await.ok();
            })
            .await
            .ok();
    });

    let dir = tempfile::TempDir::new().unwrap();
    let path = write_test_audio(&dir, "clip.mp3");

    let result = create_engine(&base_url).transcribe(&path).await.unwrap();

    assert_eq!(result.text.as_deref(), Some("model=whisper-1 file=clip.mp3:16"));
    shutdown_tx.send(()).ok();
}
