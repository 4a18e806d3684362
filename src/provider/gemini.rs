//! Google Gemini REST provider (generation + Files API).

use std::path::Path;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::debug;

use crate::attachment::guess_mime_type;
use crate::config::GeminiConfig;
use crate::error::AgentError;
use crate::types::{Turn, TurnContent};

use super::http::{build_client, status_to_error, API_KEY_HEADER};
use super::{
    FileHandle, FileService, GenerateContentRequest, GenerateContentResponse, GenerationService,
};

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// HTTP client for the Gemini API.
#[derive(Clone)]
pub struct GeminiProvider {
    api_key: String,
    base_url: String,
    client: reqwest::Client,
}

impl std::fmt::Debug for GeminiProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiProvider")
            .field("base_url", &self.base_url)
            .field("api_key", &"..")
            .finish()
    }
}

impl GeminiProvider {
    pub fn new(api_key: impl Into<String>) -> Result<Self, AgentError> {
        Self::new_with_base_url(api_key, DEFAULT_BASE_URL)
    }

    pub fn new_with_base_url(
        api_key: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Result<Self, AgentError> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(AgentError::Authentication(
                "Gemini API key cannot be empty".to_string(),
            ));
        }
        Ok(Self {
            api_key,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client: super::http::shared_client().clone(),
        })
    }

    /// Build a provider from resolved configuration.
    pub fn from_config(config: &GeminiConfig) -> Result<Self, AgentError> {
        let api_key = config
            .api_key()
            .ok_or_else(|| AgentError::Authentication("Missing GEMINI_API_KEY".into()))?;
        let mut provider = Self::new_with_base_url(api_key, config.base_url())?;
        provider.client = build_client(config.request_timeout())?;
        Ok(provider)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn auth_headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        if let Ok(val) = HeaderValue::from_str(&self.api_key) {
            headers.insert(API_KEY_HEADER, val);
        }
        headers
    }

    fn build_request_body(
        &self,
        request: &GenerateContentRequest,
    ) -> Result<serde_json::Value, AgentError> {
        let contents: Vec<serde_json::Value> = request.contents.iter().map(turn_to_json).collect();
        let config = &request.config;

        let mut gen_config = serde_json::Map::new();
        gen_config.insert("temperature".into(), config.temperature.into());
        if let Some(level) = config.reasoning_level {
            gen_config.insert(
                "thinkingConfig".into(),
                serde_json::json!({ "thinkingLevel": level }),
            );
        }
        if let Some(ref schema) = config.response_schema {
            gen_config.insert("responseMimeType".into(), "application/json".into());
            gen_config.insert("responseSchema".into(), serde_json::to_value(schema)?);
        }

        let mut body = serde_json::json!({
            "contents": contents,
            "systemInstruction": { "parts": [{ "text": config.system_instruction }] },
            "generationConfig": gen_config,
        });

        if config.search_tool {
            if let Some(obj) = body.as_object_mut() {
                obj.insert("tools".into(), serde_json::json!([{ "googleSearch": {} }]));
            }
        }

        Ok(body)
    }
}

fn turn_to_json(turn: &Turn) -> serde_json::Value {
    let part = match &turn.content {
        TurnContent::Text { text } => serde_json::json!({ "text": text }),
        TurnContent::File { uri, mime_type } => serde_json::json!({
            "fileData": { "fileUri": uri, "mimeType": mime_type }
        }),
    };
    serde_json::json!({ "role": turn.role.as_str(), "parts": [part] })
}

async fn read_json<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, AgentError> {
    let status = resp.status().as_u16();
    let body = resp.text().await?;
    if !(200..300).contains(&status) {
        return Err(status_to_error(status, &body));
    }
    Ok(serde_json::from_str(&body)?)
}

#[async_trait]
impl GenerationService for GeminiProvider {
    async fn generate_content(
        &self,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse, AgentError> {
        let body = self.build_request_body(request)?;
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url,
            request.model.as_str()
        );

        debug!(
            model = request.model.as_str(),
            turns = request.contents.len(),
            search = request.config.search_tool,
            structured = request.config.response_schema.is_some(),
            "Gemini generate_content"
        );

        let resp = self
            .client
            .post(&url)
            .headers(self.auth_headers())
            .json(&body)
            .send()
            .await?;

        read_json(resp).await
    }
}

#[derive(Deserialize)]
struct UploadedFile {
    file: FileHandle,
}

#[async_trait]
impl FileService for GeminiProvider {
    async fn upload(&self, path: &Path, display_name: &str) -> Result<FileHandle, AgentError> {
        let bytes = tokio::fs::read(path).await?;
        let mime_type = guess_mime_type(path, &bytes);

        debug!(
            path = %path.display(),
            size = bytes.len(),
            mime_type = %mime_type,
            "Gemini file upload start"
        );

        let start = self
            .client
            .post(format!("{}/upload/v1beta/files", self.base_url))
            .headers(self.auth_headers())
            .header("X-Goog-Upload-Protocol", "resumable")
            .header("X-Goog-Upload-Command", "start")
            .header("X-Goog-Upload-Header-Content-Length", bytes.len().to_string())
            .header("X-Goog-Upload-Header-Content-Type", mime_type.as_str())
            .json(&serde_json::json!({ "file": { "display_name": display_name } }))
            .send()
            .await?;

        let status = start.status().as_u16();
        if !(200..300).contains(&status) {
            let body = start.text().await.unwrap_or_default();
            return Err(status_to_error(status, &body));
        }
        let upload_url = start
            .headers()
            .get("x-goog-upload-url")
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
            .ok_or_else(|| AgentError::remote(status, "Upload session URL missing from response"))?;

        let finalize = self
            .client
            .post(&upload_url)
            .headers(self.auth_headers())
            .header(CONTENT_TYPE, mime_type.as_str())
            .header("X-Goog-Upload-Offset", "0")
            .header("X-Goog-Upload-Command", "upload, finalize")
            .body(bytes)
            .send()
            .await?;

        let uploaded: UploadedFile = read_json(finalize).await?;
        Ok(uploaded.file)
    }

    async fn get(&self, name: &str) -> Result<FileHandle, AgentError> {
        let resp = self
            .client
            .get(format!("{}/v1beta/{}", self.base_url, name))
            .headers(self.auth_headers())
            .send()
            .await?;
        read_json(resp).await
    }
}
