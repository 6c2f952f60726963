use std::fmt;

use chrono::Utc;
use uuid::Uuid;

const DEFAULT_EXTENSION: &str = "webm";
const MAX_EXTENSION_LEN: usize = 8;

/// Unique basename for a request's scratch file. Carries a millisecond
/// timestamp plus a random token, so two uploads landing in the same clock
/// tick cannot collide. Never contains path separators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScratchName(String);

impl ScratchName {
    /// Builds a scratch name for an upload. Only a vetted extension is taken
    /// from the client-supplied filename; everything else is generated.
    pub fn for_upload(original_filename: &str) -> Self {
        Self(format!(
            "upload-{}-{}.{}",
            Utc::now().timestamp_millis(),
            Uuid::new_v4().simple(),
            infer_extension(original_filename),
        ))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ScratchName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Extracts a file extension from an untrusted filename. Accepts short
/// alphanumeric suffixes only; anything else falls back to a generic audio
/// container extension.
fn infer_extension(filename: &str) -> String {
    let Some((stem, ext)) = filename.rsplit_once('.') else {
        return DEFAULT_EXTENSION.to_string();
    };
    if stem.is_empty() {
        return DEFAULT_EXTENSION.to_string();
    }

    let ext = ext.to_ascii_lowercase();
    if ext.is_empty()
        || ext.len() > MAX_EXTENSION_LEN
        || !ext.chars().all(|c| c.is_ascii_alphanumeric())
    {
        return DEFAULT_EXTENSION.to_string();
    }

    ext
}
