//! Configuration system (layered: code > env > config file).

use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use tracing::warn;

use crate::attachment::PollPolicy;
use crate::error::AgentError;
use crate::models::GeminiModel;
use crate::provider::gemini::DEFAULT_BASE_URL;
use crate::provider::http::DEFAULT_TIMEOUT;

/// API key variables, checked in order.
const API_KEY_VARS: [&str; 2] = ["GEMINI_API_KEY", "GOOGLE_API_KEY"];

/// Resolved settings for talking to the Gemini API.
///
/// Resolution order, last wins:
/// 1. Built-in defaults
/// 2. TOML config file (`~/.gemini-agent/config.toml` or an explicit path)
/// 3. Environment variables (a `.env` file is loaded first if present)
/// 4. Explicit setters
#[derive(Clone)]
pub struct GeminiConfig {
    api_key: Option<String>,
    base_url: String,
    request_timeout: Duration,
    poll: PollPolicy,
    default_model: Option<GeminiModel>,
}

impl fmt::Debug for GeminiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeminiConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "[redacted]"))
            .field("base_url", &self.base_url)
            .field("request_timeout", &self.request_timeout)
            .field("poll", &self.poll)
            .field("default_model", &self.default_model)
            .finish()
    }
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// On-disk shape of the config file. Every key is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct FileConfig {
    api_key: Option<String>,
    base_url: Option<String>,
    timeout_secs: Option<u64>,
    poll_interval_ms: Option<u64>,
    poll_max_attempts: Option<u32>,
    model: Option<GeminiModel>,
}

impl GeminiConfig {
    /// Defaults only: no key, public endpoint, 120 s timeout, 2 s x 150 polls.
    pub fn new() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout: DEFAULT_TIMEOUT,
            poll: PollPolicy::default(),
            default_model: None,
        }
    }

    /// Defaults overlaid with environment variables.
    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv(); // load .env if present, ignore error
        Self::new().with_env()
    }

    /// Defaults, then the default config file if it exists, then the environment.
    pub fn load() -> Result<Self, AgentError> {
        let _ = dotenvy::dotenv();
        let path = default_config_path();
        let config = if path.is_file() {
            Self::new().with_file(&path)?
        } else {
            Self::new()
        };
        Ok(config.with_env())
    }

    /// Defaults, then `path` (which must exist), then the environment.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, AgentError> {
        let _ = dotenvy::dotenv();
        Ok(Self::new().with_file(path.as_ref())?.with_env())
    }

    /// Overlay values from a TOML file.
    pub fn with_file(mut self, path: &Path) -> Result<Self, AgentError> {
        let raw = std::fs::read_to_string(path).map_err(|err| {
            AgentError::Configuration(format!("Cannot read {}: {err}", path.display()))
        })?;
        let file: FileConfig = toml::from_str(&raw).map_err(|err| {
            AgentError::Configuration(format!("Invalid config file {}: {err}", path.display()))
        })?;

        if let Some(key) = file.api_key.filter(|k| !k.trim().is_empty()) {
            self.api_key = Some(key);
        }
        if let Some(url) = file.base_url {
            self.base_url = url;
        }
        if let Some(secs) = file.timeout_secs {
            self.request_timeout = Duration::from_secs(secs);
        }
        if let Some(ms) = file.poll_interval_ms {
            self.poll.interval = Duration::from_millis(ms);
        }
        if let Some(attempts) = file.poll_max_attempts {
            self.poll.max_attempts = attempts;
        }
        if file.model.is_some() {
            self.default_model = file.model;
        }
        Ok(self)
    }

    /// Overlay values from environment variables.
    ///
    /// Unparseable numeric values are logged and skipped.
    pub fn with_env(mut self) -> Self {
        if let Some(key) = API_KEY_VARS
            .iter()
            .filter_map(|var| std::env::var(var).ok())
            .find(|key| !key.trim().is_empty())
        {
            self.api_key = Some(key);
        }
        if let Ok(url) = std::env::var("GEMINI_BASE_URL") {
            self.base_url = url;
        }
        if let Some(secs) = env_number::<u64>("GEMINI_TIMEOUT_SECS") {
            self.request_timeout = Duration::from_secs(secs);
        }
        if let Some(ms) = env_number::<u64>("GEMINI_POLL_INTERVAL_MS") {
            self.poll.interval = Duration::from_millis(ms);
        }
        if let Some(attempts) = env_number::<u32>("GEMINI_POLL_MAX_ATTEMPTS") {
            self.poll.max_attempts = attempts;
        }
        if let Ok(model) = std::env::var("GEMINI_MODEL") {
            self.default_model = Some(GeminiModel::parse(&model));
        }
        self
    }

    pub fn set_api_key(&mut self, key: impl Into<String>) {
        self.api_key = Some(key.into());
    }

    pub fn set_base_url(&mut self, url: impl Into<String>) {
        self.base_url = url.into();
    }

    pub fn set_request_timeout(&mut self, timeout: Duration) {
        self.request_timeout = timeout;
    }

    pub fn set_poll_policy(&mut self, policy: PollPolicy) {
        self.poll = policy;
    }

    pub fn set_default_model(&mut self, model: GeminiModel) {
        self.default_model = Some(model);
    }

    pub fn api_key(&self) -> Option<String> {
        self.api_key.clone()
    }

    pub fn has_credentials(&self) -> bool {
        self.api_key.is_some()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn request_timeout(&self) -> Duration {
        self.request_timeout
    }

    pub fn poll_policy(&self) -> PollPolicy {
        self.poll
    }

    /// Model to use when a caller does not pick one.
    pub fn default_model(&self) -> GeminiModel {
        self.default_model.clone().unwrap_or_default()
    }
}

/// `~/.gemini-agent/config.toml`, or a relative fallback without a home dir.
pub fn default_config_path() -> PathBuf {
    directories::UserDirs::new()
        .map(|dirs| dirs.home_dir().join(".gemini-agent"))
        .unwrap_or_else(|| PathBuf::from(".gemini-agent"))
        .join("config.toml")
}

fn env_number<T: std::str::FromStr>(var: &str) -> Option<T> {
    let raw = std::env::var(var).ok()?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!(var, value = %raw, "Ignoring unparseable environment value");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(body: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(body.as_bytes()).unwrap();
        file
    }

    #[test]
    fn defaults_match_public_endpoint() {
        let config = GeminiConfig::new();
        assert_eq!(config.base_url(), DEFAULT_BASE_URL);
        assert_eq!(config.request_timeout(), Duration::from_secs(120));
        assert_eq!(config.poll_policy(), PollPolicy::default());
        assert_eq!(config.default_model(), GeminiModel::Gemini25FlashLite);
        assert!(!config.has_credentials());
    }

    #[test]
    fn file_values_overlay_defaults() {
        let file = write_config(
            r#"
api_key = "file-key"
base_url = "http://localhost:9000"
timeout_secs = 30
poll_interval_ms = 250
poll_max_attempts = 4
model = "gemini-2.5-flash"
"#,
        );

        let config = GeminiConfig::new().with_file(file.path()).unwrap();
        assert_eq!(config.api_key().as_deref(), Some("file-key"));
        assert_eq!(config.base_url(), "http://localhost:9000");
        assert_eq!(config.request_timeout(), Duration::from_secs(30));
        assert_eq!(config.poll_policy().interval, Duration::from_millis(250));
        assert_eq!(config.poll_policy().max_attempts, 4);
        assert_eq!(config.default_model(), GeminiModel::Gemini25Flash);
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let file = write_config("poll_max_attempts = 10\n");
        let config = GeminiConfig::new().with_file(file.path()).unwrap();
        assert_eq!(config.poll_policy().max_attempts, 10);
        assert_eq!(config.poll_policy().interval, Duration::from_secs(2));
        assert_eq!(config.base_url(), DEFAULT_BASE_URL);
    }

    #[test]
    fn unknown_key_is_configuration_error() {
        let file = write_config("api_kye = \"typo\"\n");
        let err = GeminiConfig::new().with_file(file.path()).unwrap_err();
        assert!(matches!(err, AgentError::Configuration(_)));
    }

    #[test]
    fn missing_explicit_file_is_configuration_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = GeminiConfig::new()
            .with_file(&dir.path().join("absent.toml"))
            .unwrap_err();
        assert!(matches!(err, AgentError::Configuration(_)));
    }

    #[test]
    fn setters_win() {
        let file = write_config("api_key = \"file-key\"\n");
        let mut config = GeminiConfig::new().with_file(file.path()).unwrap();
        config.set_api_key("explicit");
        config.set_base_url("http://127.0.0.1:1");
        assert_eq!(config.api_key().as_deref(), Some("explicit"));
        assert_eq!(config.base_url(), "http://127.0.0.1:1");
    }

    #[test]
    fn debug_redacts_api_key() {
        let mut config = GeminiConfig::new();
        config.set_api_key("secret-value");
        let rendered = format!("{config:?}");
        assert!(!rendered.contains("secret-value"));
        assert!(rendered.contains("[redacted]"));
    }

    #[test]
    fn default_path_ends_with_config_toml() {
        let path = default_config_path();
        assert!(path.ends_with(".gemini-agent/config.toml"));
    }
}
