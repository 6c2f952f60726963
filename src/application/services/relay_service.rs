use std::sync::Arc;

use crate::application::ports::{
    RawTranscription, ScratchStore, ScratchStoreError, TranscriptionEngine, TranscriptionError,
};
use crate::domain::{AudioUpload, ScratchName, Transcript};

/// Orchestrates one relayed transcription: stage the upload to a scratch
/// file, call the remote engine, remove the scratch file, interpret the
/// result. Removal precedes result interpretation and runs on every exit
/// path, including remote failure.
pub struct RelayService<E, S>
where
    E: TranscriptionEngine,
    S: ScratchStore,
{
    engine: Arc<E>,
    store: Arc<S>,
}

impl<E, S> RelayService<E, S>
where
    E: TranscriptionEngine,
    S: ScratchStore,
{
    pub fn new(engine: Arc<E>, store: Arc<S>) -> Self {
        Self { engine, store }
    }

    #[tracing::instrument(skip(self, upload), fields(filename = %upload.filename, bytes = upload.size_bytes))]
    pub async fn transcribe(&self, upload: AudioUpload) -> Result<Transcript, RelayError> {
        let name = ScratchName::for_upload(&upload.filename);
        let lease = self.store.stage(&name, &upload.data).await?;

        tracing::debug!(path = %lease.path().display(), "Upload staged to scratch file");

        let outcome = self.engine.transcribe(lease.path()).await;
        lease.release().await;

        let RawTranscription { text, payload } = outcome?;

        match text
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
        {
            Some(text) => {
                tracing::info!(chars = text.len(), "Transcription completed");
                Ok(Transcript::new(text, upload.size_bytes, upload.filename))
            }
            None => {
                tracing::error!(raw = %payload, "Transcription returned no text");
                Err(RelayError::EmptyTranscript { raw: payload })
            }
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum RelayError {
    #[error("transcription request failed: {0}")]
    Remote(#[from] TranscriptionError),
    #[error("failed to stage upload: {0}")]
    Staging(#[from] ScratchStoreError),
    #[error("transcription returned no text")]
    EmptyTranscript { raw: serde_json::Value },
}
