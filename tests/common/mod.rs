//! Shared test helpers and mock services.
#![allow(dead_code)]

use std::collections::VecDeque;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use gemini_agent::agent::{AgentOptions, AgentSession};
use gemini_agent::attachment::PollPolicy;
use gemini_agent::error::AgentError;
use gemini_agent::provider::{
    Candidate, CandidateContent, FileHandle, FileService, FileState, GenerateContentRequest,
    GenerateContentResponse, GenerationService, Part, UsageMetadata,
};
use gemini_agent::GeminiClient;

/// A mock service that records requests and replays canned responses.
///
/// Generation replies are taken from the front of the queue; an empty queue
/// answers "Mock response". File uploads return the first scripted handle and
/// every re-fetch returns the next one.
#[derive(Default)]
pub struct MockService {
    responses: Mutex<VecDeque<Result<GenerateContentResponse, AgentError>>>,
    requests: Mutex<Vec<GenerateContentRequest>>,
    handles: Mutex<VecDeque<FileHandle>>,
    uploads: Mutex<Vec<(PathBuf, String)>>,
    gets: Mutex<Vec<String>>,
}

impl MockService {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Queue a text reply with usage counters.
    pub fn queue_text(&self, text: &str, input: u32, output: u32) {
        self.queue_raw(text_response(text, input, output));
    }

    pub fn queue_raw(&self, response: GenerateContentResponse) {
        self.responses.lock().unwrap().push_back(Ok(response));
    }

    pub fn queue_error(&self, error: AgentError) {
        self.responses.lock().unwrap().push_back(Err(error));
    }

    /// Script the handles returned by upload (first) and get (rest).
    pub fn script_files(&self, handles: impl IntoIterator<Item = FileHandle>) {
        self.handles.lock().unwrap().extend(handles);
    }

    pub fn requests(&self) -> Vec<GenerateContentRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> Option<GenerateContentRequest> {
        self.requests.lock().unwrap().last().cloned()
    }

    pub fn upload_count(&self) -> usize {
        self.uploads.lock().unwrap().len()
    }

    pub fn uploads(&self) -> Vec<(PathBuf, String)> {
        self.uploads.lock().unwrap().clone()
    }

    pub fn get_count(&self) -> usize {
        self.gets.lock().unwrap().len()
    }

    fn next_handle(&self) -> Result<FileHandle, AgentError> {
        self.handles
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| AgentError::remote(404, "no scripted file handle"))
    }
}

#[async_trait]
impl GenerationService for MockService {
    async fn generate_content(
        &self,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse, AgentError> {
        self.requests.lock().unwrap().push(request.clone());
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(text_response("Mock response", 0, 0)))
    }
}

#[async_trait]
impl FileService for MockService {
    async fn upload(&self, path: &Path, display_name: &str) -> Result<FileHandle, AgentError> {
        self.uploads
            .lock()
            .unwrap()
            .push((path.to_path_buf(), display_name.to_string()));
        self.next_handle()
    }

    async fn get(&self, name: &str) -> Result<FileHandle, AgentError> {
        self.gets.lock().unwrap().push(name.to_string());
        self.next_handle()
    }
}

pub fn text_response(text: &str, input: u32, output: u32) -> GenerateContentResponse {
    GenerateContentResponse {
        candidates: Some(vec![Candidate {
            content: Some(CandidateContent {
                parts: Some(vec![Part::text(text)]),
                role: Some("model".to_string()),
            }),
            finish_reason: Some("STOP".to_string()),
        }]),
        usage_metadata: Some(UsageMetadata {
            prompt_token_count: Some(input),
            candidates_token_count: Some(output),
            total_token_count: Some(input + output),
        }),
    }
}

pub fn file_handle(name: &str, state: FileState) -> FileHandle {
    FileHandle {
        name: name.to_string(),
        uri: (state == FileState::Active)
            .then(|| format!("https://generativelanguage.googleapis.com/v1beta/{name}")),
        mime_type: Some("audio/wav".to_string()),
        state,
        ..Default::default()
    }
}

/// Fast polling for tests running on a paused clock.
pub fn test_poll_policy(max_attempts: u32) -> PollPolicy {
    PollPolicy {
        interval: std::time::Duration::from_secs(2),
        max_attempts,
    }
}

pub fn client(mock: &Arc<MockService>) -> GeminiClient {
    GeminiClient::with_services(mock.clone(), mock.clone()).with_poll_policy(test_poll_policy(10))
}

pub fn session(mock: &Arc<MockService>, options: AgentOptions) -> AgentSession {
    client(mock).create_agent(options)
}

/// A minimal RIFF/WAVE header followed by silence.
pub fn wav_bytes() -> Vec<u8> {
    let mut bytes = b"RIFF\x24\x00\x00\x00WAVEfmt ".to_vec();
    bytes.extend_from_slice(&[0u8; 32]);
    bytes
}

pub fn write_file(dir: &Path, name: &str, bytes: &[u8]) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, bytes).unwrap();
    path
}
