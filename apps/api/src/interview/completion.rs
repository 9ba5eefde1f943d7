//! Completion client — turns a system prompt plus user content into one retried
//! completion call, and converts remote failures into typed errors.

use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, warn};

use crate::interview::sanitizer::{is_safe, sanitize};
use crate::llm_client::retry::{call_with_retry, RetryPolicy};
use crate::llm_client::{CompletionBackend, CompletionRequest, LlmError};
use crate::models::session::SamplingParams;

/// Fixed user message sent with every question-generation request.
pub const GENERATE_QUESTION_MESSAGE: &str = "Generate a question for me.";

#[derive(Debug, Error)]
pub enum CompletionError {
    #[error("{0}")]
    InputValidation(String),

    #[error("Question generation failed: {0}")]
    GenerationFailed(#[source] LlmError),

    #[error("Answer evaluation failed: {0}")]
    EvaluationFailed(#[source] LlmError),
}

/// Stateless client: prompts and sampling settings are supplied on every call.
#[derive(Clone)]
pub struct CompletionClient {
    backend: Arc<dyn CompletionBackend>,
    retry: RetryPolicy,
}

impl CompletionClient {
    pub fn new(backend: Arc<dyn CompletionBackend>) -> Self {
        Self::with_retry(backend, RetryPolicy::default())
    }

    pub fn with_retry(backend: Arc<dyn CompletionBackend>, retry: RetryPolicy) -> Self {
        Self { backend, retry }
    }

    pub async fn generate_question(
        &self,
        system_prompt: &str,
        sampling: SamplingParams,
    ) -> Result<String, CompletionError> {
        let request = CompletionRequest {
            system: system_prompt.to_string(),
            user: GENERATE_QUESTION_MESSAGE.to_string(),
            sampling,
        };

        self.complete(&request).await.map_err(|e| {
            warn!("Question generation exhausted retries: {e}");
            CompletionError::GenerationFailed(e)
        })
    }

    /// Sanitizes and safety-checks `answer` before anything leaves the process.
    /// Unsafe answers fail with `InputValidation` and no remote call is made.
    pub async fn evaluate_answer(
        &self,
        question: &str,
        answer: &str,
        system_prompt: &str,
        sampling: SamplingParams,
    ) -> Result<String, CompletionError> {
        let answer = sanitize(answer);
        if !is_safe(&answer) {
            return Err(CompletionError::InputValidation(
                "Suspicious input detected. Please remove any HTML or script content from your answer."
                    .to_string(),
            ));
        }

        let request = CompletionRequest {
            system: system_prompt.to_string(),
            user: format!("Question: {question}\nAnswer: {answer}"),
            sampling,
        };

        self.complete(&request).await.map_err(|e| {
            warn!("Answer evaluation exhausted retries: {e}");
            CompletionError::EvaluationFailed(e)
        })
    }

    async fn complete(&self, request: &CompletionRequest) -> Result<String, LlmError> {
        let backend = self.backend.as_ref();
        let text = call_with_retry(self.retry, move || backend.complete(request)).await?;
        debug!("Completion returned {} chars", text.len());
        Ok(text.trim().to_string())
    }
}
