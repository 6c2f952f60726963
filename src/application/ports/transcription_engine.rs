use std::path::Path;

use async_trait::async_trait;

/// Remote transcription capability. Implementations read the staged audio
/// by path and must not retain it after returning.
#[async_trait]
pub trait TranscriptionEngine: Send + Sync {
    async fn transcribe(&self, audio_path: &Path) -> Result<RawTranscription, TranscriptionError>;
}

/// What the remote capability actually returned. `text` is extracted from
/// the payload when present; the full payload is kept for diagnostics when
/// it is not.
#[derive(Debug, Clone)]
pub struct RawTranscription {
    pub text: Option<String>,
    pub payload: serde_json::Value,
}

#[derive(Debug, thiserror::Error)]
pub enum TranscriptionError {
    #[error("engine initialization failed: {0}")]
    EngineInit(String),
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("invalid transcription response: {0}")]
    InvalidResponse(String),
}
