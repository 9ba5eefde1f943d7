//! In-memory `CompletionBackend` double that replays a scripted list of outcomes.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use super::{CompletionBackend, CompletionRequest, LlmError};

#[derive(Default)]
pub struct ScriptedBackend {
    /// `Ok(text)` is returned as-is; `Err(status)` becomes an `LlmError::Api`.
    script: Mutex<VecDeque<Result<String, u16>>>,
    requests: Mutex<Vec<CompletionRequest>>,
}

impl ScriptedBackend {
    pub fn new<I>(outcomes: I) -> Self
    where
        I: IntoIterator<Item = Result<&'static str, u16>>,
    {
        Self {
            script: Mutex::new(
                outcomes
                    .into_iter()
                    .map(|o| o.map(str::to_string))
                    .collect(),
            ),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Every request received so far, in order.
    pub fn requests(&self) -> Vec<CompletionRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn calls(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl CompletionBackend for ScriptedBackend {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, LlmError> {
        self.requests.lock().unwrap().push(request.clone());
        match self.script.lock().unwrap().pop_front() {
            Some(Ok(text)) => Ok(text),
            Some(Err(status)) => Err(LlmError::Api {
                status,
                message: "scripted failure".to_string(),
            }),
            None => Err(LlmError::EmptyContent),
        }
    }
}
