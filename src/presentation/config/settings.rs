use std::time::Duration;

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
const DEFAULT_MODEL: &str = "gpt-4o-mini-transcribe";
const DEFAULT_TIMEOUT_SECS: u64 = 120;
const DEFAULT_MAX_UPLOAD_MB: usize = 25;

#[derive(Debug, Clone)]
pub struct Settings {
    pub server: ServerSettings,
    pub openai: OpenAiSettings,
    pub upload: UploadSettings,
}

impl Settings {
    pub fn from_env() -> Self {
        Self {
            server: ServerSettings::from_env(),
            openai: OpenAiSettings::from_env(),
            upload: UploadSettings::from_env(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ServerSettings {
    pub port: u16,
}

impl ServerSettings {
    fn from_env() -> Self {
        Self {
            port: env_parsed("PORT").unwrap_or(DEFAULT_PORT),
        }
    }
}

#[derive(Debug, Clone)]
pub struct OpenAiSettings {
    /// Missing credential is a startup warning, not a fatal error; requests
    /// fail at call time instead.
    pub api_key: String,
    pub base_url: String,
    pub model: String,
    pub timeout_secs: u64,
}

impl OpenAiSettings {
    fn from_env() -> Self {
        Self {
            api_key: std::env::var("OPENAI_API_KEY").unwrap_or_default(),
            base_url: std::env::var("OPENAI_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
            model: std::env::var("TRANSCRIBE_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
            timeout_secs: env_parsed("OPENAI_TIMEOUT_SECS").unwrap_or(DEFAULT_TIMEOUT_SECS),
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[derive(Debug, Clone)]
pub struct UploadSettings {
    pub max_upload_mb: usize,
}

impl UploadSettings {
    fn from_env() -> Self {
        Self {
            max_upload_mb: env_parsed("MAX_UPLOAD_MB").unwrap_or(DEFAULT_MAX_UPLOAD_MB),
        }
    }

    pub fn max_upload_bytes(&self) -> usize {
        self.max_upload_mb * 1024 * 1024
    }
}

fn env_parsed<T: std::str::FromStr>(key: &str) -> Option<T> {
    std::env::var(key).ok().and_then(|v| v.parse().ok())
}
