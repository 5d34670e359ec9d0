//! Mock completion backend for testing
//!
//! MockBackend replays scripted replies in order, enabling fast,
//! deterministic tests of agents and workflows without a server.

use std::collections::VecDeque;
use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;
use aural_models::{Completion, CompletionBackend, CompletionRequest};

/// One scripted reply
#[derive(Debug, Clone)]
enum MockReply {
    Text(String),
    Error { status: u16, body: String },
}

/// Scripted implementation of [`CompletionBackend`]
///
/// Queue replies with `queue_text()` / `queue_error()` before use. Each
/// completion consumes one reply; an empty queue fails the call.
pub struct MockBackend {
    model: String,
    replies: Mutex<VecDeque<MockReply>>,
    requests: Mutex<Vec<CompletionRequest>>,
}

impl MockBackend {
    pub fn new() -> Self {
        Self {
            model: "mock-model".to_string(),
            replies: Mutex::new(VecDeque::new()),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Queue a successful reply
    pub fn queue_text(&self, text: impl Into<String>) {
        self.lock_replies().push_back(MockReply::Text(text.into()));
    }

    /// Queue an HTTP error reply
    pub fn queue_error(&self, status: u16, body: impl Into<String>) {
        self.lock_replies().push_back(MockReply::Error {
            status,
            body: body.into(),
        });
    }

    /// Requests received so far, in order
    pub fn requests(&self) -> Vec<CompletionRequest> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Number of completions attempted
    pub fn call_count(&self) -> usize {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Number of replies not yet consumed
    pub fn queued_reply_count(&self) -> usize {
        self.lock_replies().len()
    }

    fn lock_replies(&self) -> std::sync::MutexGuard<'_, VecDeque<MockReply>> {
        self.replies.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for MockBackend {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CompletionBackend for MockBackend {
    fn name(&self) -> &str {
        "mock"
    }

    fn default_model(&self) -> &str {
        &self.model
    }

    async fn create_completion(
        &self,
        request: CompletionRequest,
    ) -> aural_models::Result<Completion> {
        let model = request.model.clone().unwrap_or_else(|| self.model.clone());
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(request);

        match self.lock_replies().pop_front() {
            Some(MockReply::Text(text)) => Ok(Completion::from_text(model, text)),
            Some(MockReply::Error { status, body }) => {
                Err(aural_models::Error::Completion { status, body })
            }
            None => Err(aural_models::Error::Request(
                "No queued reply in MockBackend".to_string(),
            )),
        }
    }
}
