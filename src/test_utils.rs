//! Shared test helpers
//!
//! Provides a scripted in-memory [`Provider`] so orchestration and
//! summarization logic can be exercised without a network.

use crate::error::{AlphachatError, Result};
use crate::providers::Provider;

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// Provider that replays a fixed script of replies
///
/// Each `generate` call pops the next scripted outcome and records the
/// `(model, prompt)` pair it was invoked with. Running past the end of
/// the script is a provider error, which keeps tests honest about how
/// many calls they expect.
#[derive(Debug)]
pub struct ScriptedProvider {
    replies: Mutex<VecDeque<std::result::Result<String, String>>>,
    calls: Arc<Mutex<Vec<(String, String)>>>,
}

impl ScriptedProvider {
    /// Provider that replays the given outcomes in order
    pub fn scripted(replies: Vec<std::result::Result<String, String>>) -> Self {
        Self {
            replies: Mutex::new(replies.into()),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Provider that answers one call with `reply`
    pub fn single(reply: &str) -> Self {
        Self::scripted(vec![Ok(reply.to_string())])
    }

    /// Provider whose first call fails with `message`
    pub fn failing(message: &str) -> Self {
        Self::scripted(vec![Err(message.to_string())])
    }

    /// Recorded `(model, prompt)` pairs so far
    pub fn calls(&self) -> Vec<(String, String)> {
        self.calls.lock().unwrap().clone()
    }

    /// Shared handle to the call log, usable after the provider is boxed
    pub fn calls_handle(&self) -> Arc<Mutex<Vec<(String, String)>>> {
        Arc::clone(&self.calls)
    }
}

#[async_trait]
impl Provider for ScriptedProvider {
    fn name(&self) -> &str {
        "scripted"
    }

    async fn generate(&self, model: &str, prompt: &str) -> Result<String> {
        self.calls
            .lock()
            .unwrap()
            .push((model.to_string(), prompt.to_string()));

        match self.replies.lock().unwrap().pop_front() {
            Some(Ok(text)) => Ok(text),
            Some(Err(message)) => Err(AlphachatError::Provider(message).into()),
            None => Err(AlphachatError::Provider(
                "ScriptedProvider ran out of replies".to_string(),
            )
            .into()),
        }
    }
}
