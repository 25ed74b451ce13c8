//! Base provider trait for AlphaChat
//!
//! Defines the seam between the chat session and the hosted model API.
//! A provider performs exactly one request per call; there is no retry
//! policy and no streaming.

use crate::error::Result;
use async_trait::async_trait;

/// Remote model client
///
/// One operation: turn a prompt into a reply. A call either succeeds with
/// the reply text or fails with a provider error; callers treat a failure
/// as terminal for the submission that triggered it.
#[async_trait]
pub trait Provider: Send + Sync + std::fmt::Debug {
    /// Short provider name used in logs and error messages
    fn name(&self) -> &str;

    /// Generates a reply for `prompt` using the given model
    ///
    /// # Arguments
    ///
    /// * `model` - Model identifier (free text, provider-specific)
    /// * `prompt` - Full prompt text to send
    ///
    /// # Errors
    ///
    /// Returns a provider error on transport failure, a non-success HTTP
    /// status, or an unparseable response body.
    async fn generate(&self, model: &str, prompt: &str) -> Result<String>;
}
