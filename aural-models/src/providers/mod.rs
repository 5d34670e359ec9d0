//! Completion backend trait and implementations.
//!
//! The [`CompletionBackend`] trait is the seam agents call through. The
//! production implementation is [`OllamaClient`]; tests substitute scripted
//! backends.
//!
//! # Example
//!
//! ```ignore
//! use aural_models::{CompletionBackend, CompletionRequest, Message, OllamaClient};
//!
//! async fn ask(backend: &dyn CompletionBackend) -> aural_models::Result<String> {
//!     let request = CompletionRequest::new(vec![
//!         Message::system("You review design tokens."),
//!         Message::user("Is #777 on #fff readable?"),
//!     ]);
//!     let completion = backend.create_completion(request).await?;
//!     Ok(completion.message.content)
//! }
//! ```

mod ollama;
mod types;

use async_trait::async_trait;

pub use ollama::OllamaClient;
pub use types::*;

use crate::Result;

/// A server that turns a conversation into one completion.
///
/// Implementations are stateless between calls and perform exactly one
/// round-trip per [`create_completion`](CompletionBackend::create_completion).
#[async_trait]
pub trait CompletionBackend: Send + Sync {
    /// Human-readable backend name (e.g. "ollama").
    fn name(&self) -> &str;

    /// Model used when a request does not name one.
    fn default_model(&self) -> &str;

    /// Complete the conversation in `request`.
    ///
    /// Fails with [`Error::Completion`](crate::Error::Completion) when the
    /// server answers with a non-success status.
    async fn create_completion(&self, request: CompletionRequest) -> Result<Completion>;
}
