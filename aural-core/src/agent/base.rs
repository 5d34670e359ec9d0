//! Role-bound agent with a running conversation history

use std::sync::Arc;

use aural_models::{CompletionBackend, CompletionRequest, Message};
use tracing::{debug, instrument, warn};

use super::context::WorkflowContext;
use super::summary::{ContextSummarizer, TruncatingSummarizer};
use super::task::Task;
use super::types::{AgentConfig, CompletionOverrides};

/// Error text recorded when a failure carries no message.
const UNKNOWN_ERROR: &str = "unknown error";

/// An agent bound to one role configuration
///
/// History accumulates across calls until [`reset_history`](Agent::reset_history).
/// It never contains the system prompt; that is prepended per call.
pub struct Agent {
    config: Arc<AgentConfig>,
    backend: Arc<dyn CompletionBackend>,
    summarizer: Arc<dyn ContextSummarizer>,
    history: Vec<Message>,
}

impl Agent {
    /// Create an agent with the default truncating summarizer
    pub fn new(config: Arc<AgentConfig>, backend: Arc<dyn CompletionBackend>) -> Self {
        Self {
            config,
            backend,
            summarizer: Arc::new(TruncatingSummarizer::default()),
            history: Vec::new(),
        }
    }

    /// Use a different prior-task summarization policy
    pub fn with_summarizer(mut self, summarizer: Arc<dyn ContextSummarizer>) -> Self {
        self.summarizer = summarizer;
        self
    }

    pub fn name(&self) -> &str {
        self.config.name()
    }

    pub fn config(&self) -> &AgentConfig {
        &self.config
    }

    /// Conversation so far (user and assistant turns)
    pub fn history(&self) -> &[Message] {
        &self.history
    }

    pub fn reset_history(&mut self) {
        self.history.clear();
    }

    /// Run one task with the configured generation parameters
    pub async fn execute(&mut self, description: &str, context: &WorkflowContext) -> Task {
        self.execute_with(description, context, CompletionOverrides::default())
            .await
    }

    /// Run one task, overriding generation parameters for this call only
    ///
    /// The returned task is always `Completed` or `Failed`. On failure the
    /// user turn stays in history and no assistant turn is added.
    #[instrument(name = "agent::execute", skip_all, fields(agent = %self.config.name()))]
    pub async fn execute_with(
        &mut self,
        description: &str,
        context: &WorkflowContext,
        overrides: CompletionOverrides,
    ) -> Task {
        let mut task = Task::new(self.config.name(), description);
        if let Err(e) = task.start() {
            warn!(error = %e, "task transition rejected");
        }

        let user_turn = context.render_user_turn(description, self.summarizer.as_ref());
        self.history.push(Message::user(user_turn));

        let request = self.build_request(overrides);
        debug!(task_id = %task.id, turns = self.history.len(), "executing task");

        let transition = match self.backend.create_completion(request).await {
            Ok(completion) => {
                let content = completion.message.content;
                self.history.push(Message::assistant(content.clone()));
                task.complete(content)
            }
            Err(e) => {
                let message = e.to_string();
                warn!(task_id = %task.id, error = %message, "task failed");
                if message.trim().is_empty() {
                    task.fail(UNKNOWN_ERROR)
                } else {
                    task.fail(message)
                }
            }
        };
        if let Err(e) = transition {
            warn!(error = %e, "task transition rejected");
        }

        task
    }

    /// `[system prompt] + history`, with this agent's parameters
    fn build_request(&self, overrides: CompletionOverrides) -> CompletionRequest {
        let mut messages = Vec::with_capacity(self.history.len() + 1);
        messages.push(Message::system(self.config.system_prompt()));
        messages.extend(self.history.iter().cloned());

        CompletionRequest::new(messages)
            .model(
                overrides
                    .model
                    .unwrap_or_else(|| self.config.model().to_string()),
            )
            .temperature(overrides.temperature.unwrap_or(self.config.temperature()))
            .max_tokens(overrides.max_tokens.unwrap_or(self.config.max_tokens()))
    }
}

impl std::fmt::Debug for Agent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Agent")
            .field("name", &self.config.name())
            .field("backend", &self.backend.name())
            .field("history_len", &self.history.len())
            .finish()
    }
}
