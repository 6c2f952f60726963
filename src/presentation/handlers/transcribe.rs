use std::sync::Arc;

use axum::Json;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::application::ports::{ScratchStore, TranscriptionEngine};
use crate::application::services::RelayError;
use crate::domain::AudioUpload;
use crate::presentation::state::AppState;

const MISSING_AUDIO_MESSAGE: &str = "No audio file received (field name must be \"audio\")";

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TranscribeResponse {
    pub text: String,
    pub size_bytes: u64,
    pub filename: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: None,
        }
    }
}

#[tracing::instrument(skip(state, multipart))]
pub async fn transcribe_handler<E, S>(
    State(state): State<AppState<E, S>>,
    mut multipart: Multipart,
) -> impl IntoResponse
where
    E: TranscriptionEngine + 'static,
    S: ScratchStore + 'static,
{
    let field = loop {
        match multipart.next_field().await {
            Ok(Some(f)) if f.name() == Some("audio") => break f,
            Ok(Some(_)) => continue,
            Ok(None) => {
                tracing::warn!("Transcribe request without an audio field");
                return (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorResponse::new(MISSING_AUDIO_MESSAGE)),
                )
                    .into_response();
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to read multipart");
                return (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorResponse::new(format!("Failed to read multipart: {}", e))),
                )
                    .into_response();
            }
        }
    };

    let filename = field.file_name().unwrap_or("unknown").to_string();

    let data = match field.bytes().await {
        Ok(d) => d,
        Err(e) => {
            tracing::error!(error = %e, "Failed to read audio bytes");
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::new(format!("Failed to read file: {}", e))),
            )
                .into_response();
        }
    };

    if data.is_empty() {
        tracing::warn!(filename = %filename, "Transcribe request with empty audio field");
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::new(MISSING_AUDIO_MESSAGE)),
        )
            .into_response();
    }

    tracing::debug!(filename = %filename, bytes = data.len(), "Audio upload received");

    let upload = AudioUpload::new(filename, data);

    // Run the relay pipeline on its own task: a client disconnect drops this
    // handler future, but must not abort the remote call or the scratch-file
    // cleanup.
    let service = Arc::clone(&state.relay_service);
    let result = match tokio::spawn(async move { service.transcribe(upload).await }).await {
        Ok(result) => result,
        Err(e) => {
            tracing::error!(error = %e, "Relay task failed to complete");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new("Server transcription error")),
            )
                .into_response();
        }
    };

    match result {
        Ok(transcript) => (
            StatusCode::OK,
            Json(TranscribeResponse {
                text: transcript.text,
                size_bytes: transcript.size_bytes,
                filename: transcript.filename,
                timestamp: transcript.completed_at,
            }),
        )
            .into_response(),
        Err(RelayError::EmptyTranscript { raw }) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: "Transcription returned no text".to_string(),
                details: Some(raw),
            }),
        )
            .into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Transcription relay failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Server transcription error".to_string(),
                    details: Some(serde_json::Value::String(e.to_string())),
                }),
            )
                .into_response()
        }
    }
}
