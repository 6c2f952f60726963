use chrono::{DateTime, Utc};

/// Result of one relayed transcription. Produced by the remote call,
/// serialized into the response, never stored.
#[derive(Debug, Clone)]
pub struct Transcript {
    pub text: String,
    pub size_bytes: u64,
    pub filename: String,
    pub completed_at: DateTime<Utc>,
}

impl Transcript {
    pub fn new(text: String, size_bytes: u64, filename: String) -> Self {
        Self {
            text,
            size_bytes,
            filename,
            completed_at: Utc::now(),
        }
    }
}
