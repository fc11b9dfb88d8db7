//! In-memory connection for testing.
//!
//! `RecordingConnection` captures every request the clients send and answers
//! from a queue of canned responses, without making actual API calls.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::{json, Value};

use crate::connection::{ApiRequest, ApiResponse, Connection};
use crate::error::Error;

/// Internal state for the recording connection.
#[derive(Default)]
struct RecorderState {
    requests: Vec<ApiRequest>,
    responses: VecDeque<ApiResponse>,
}

/// Connection that records requests and replays queued responses.
///
/// When the queue is empty it answers `200` with an empty JSON array, which
/// satisfies any list endpoint.
///
/// # Example
///
/// ```rust,ignore
/// let recorder = Arc::new(RecordingConnection::new());
/// let client = GitHubClient::with_connection(recorder.clone());
///
/// client.repository().forks().get_all(("fake", "repo"), &ApiOptions::none()).await?;
/// assert_eq!(recorder.last_request().unwrap().path, "repos/fake/repo/forks");
/// ```
#[derive(Default)]
pub struct RecordingConnection {
    state: Mutex<RecorderState>,
}

impl RecordingConnection {
    /// Create a recorder with an empty response queue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a response to be returned by the next unanswered request.
    pub fn enqueue(&self, response: ApiResponse) {
        self.state
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .responses
            .push_back(response);
    }

    /// Queue a JSON response with the given status.
    pub fn enqueue_json(&self, status: u16, body: Value) {
        self.enqueue(ApiResponse::new(status, body));
    }

    /// Queue a GitHub-style error response.
    pub fn enqueue_error(&self, status: u16, message: &str) {
        self.enqueue(ApiResponse::new(
            status,
            json!({
                "message": message,
                "documentation_url": "https://docs.github.com/rest"
            }),
        ));
    }

    /// All requests received so far, oldest first.
    #[must_use]
    pub fn requests(&self) -> Vec<ApiRequest> {
        self.state
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .requests
            .clone()
    }

    /// The most recent request, if any.
    #[must_use]
    pub fn last_request(&self) -> Option<ApiRequest> {
        self.state
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .requests
            .last()
            .cloned()
    }

    /// Number of requests received.
    #[must_use]
    pub fn request_count(&self) -> usize {
        self.state
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .requests
            .len()
    }

    /// Forget recorded requests and queued responses.
    pub fn reset(&self) {
        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        state.requests.clear();
        state.responses.clear();
    }
}

#[async_trait]
impl Connection for RecordingConnection {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, Error> {
        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        state.requests.push(request);
        Ok(state
            .responses
            .pop_front()
            .unwrap_or_else(|| ApiResponse::new(200, json!([]))))
    }
}
