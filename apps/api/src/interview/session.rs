//! Interview session — the single owner of the session config and ledger.
//! Every user action (configure, generate, answer, reset) is a method here.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::errors::AppError;
use crate::interview::completion::{CompletionClient, CompletionError};
use crate::interview::ledger::{Ledger, Progress, RecordId, ScoreSummary};
use crate::interview::prompts::{evaluation_prompt, question_prompt, Strategy};
use crate::interview::sanitizer::sanitize;
use crate::interview::summary::{performance_summary, PerformanceSummary};
use crate::models::record::{InterviewRecord, RecordState};
use crate::models::session::{ConfigUpdate, SessionConfig};

/// Stored as the question when generation exhausts its retries.
pub const GENERATION_FAILED_QUESTION: &str = "Error: Unable to generate question.";
/// Stored as the feedback when evaluation exhausts its retries.
pub const EVALUATION_FAILED_FEEDBACK: &str = "Error: Unable to evaluate answer.";

pub const GENERATION_FAILED_MESSAGE: &str = "Error generating question. Please try again later.";
pub const EVALUATION_FAILED_MESSAGE: &str = "Error evaluating answer. Please try again later.";
pub const EMPTY_ANSWER_MESSAGE: &str = "Please provide an answer before submitting.";
pub const QUESTION_LIMIT_MESSAGE: &str =
    "You've reached the requested number of questions! Reset session if you want to practise more.";

#[derive(Debug, Clone, Serialize)]
pub struct RecordView {
    pub index: RecordId,
    pub state: RecordState,
    #[serde(flatten)]
    pub record: InterviewRecord,
}

/// Result of a generate/answer action. `warning` carries the user-visible message
/// when a sentinel was stored in place of model output.
#[derive(Debug, Clone, Serialize)]
pub struct ActionOutcome {
    pub record: RecordView,
    pub warning: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SessionSnapshot {
    pub session_id: Uuid,
    pub started_at: DateTime<Utc>,
    pub config: SessionConfig,
    pub records: Vec<RecordView>,
    pub progress: Progress,
    pub can_generate: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct SystemPrompts {
    pub question_strategy: Strategy,
    pub question_prompt: String,
    pub evaluation_strategy: Strategy,
    pub evaluation_prompt: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct SessionSummary {
    pub progress: Progress,
    pub progress_ratio: f64,
    pub scores: ScoreSummary,
    pub performance: Option<PerformanceSummary>,
}

#[derive(Debug, Clone)]
pub struct InterviewSession {
    id: Uuid,
    started_at: DateTime<Utc>,
    config: SessionConfig,
    ledger: Ledger,
}

impl Default for InterviewSession {
    fn default() -> Self {
        Self::new()
    }
}

impl InterviewSession {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            started_at: Utc::now(),
            config: SessionConfig::default(),
            ledger: Ledger::new(),
        }
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Generation stays open while fewer questions exist than were requested.
    pub fn can_generate(&self) -> bool {
        self.ledger.len() < usize::from(self.config.question_count)
    }

    /// Replaces the config. Existing records are kept.
    pub fn update_config(&mut self, update: ConfigUpdate) -> Result<&SessionConfig, AppError> {
        let config = update.into_config().map_err(AppError::Validation)?;
        info!(
            session = %self.id,
            "Config updated: role={}, company={}, questions={}, q_strategy={}, e_strategy={}",
            config.role,
            config.company,
            config.question_count,
            config.question_strategy,
            config.evaluation_strategy
        );
        self.config = config;
        Ok(&self.config)
    }

    pub fn system_prompts(&self) -> SystemPrompts {
        let ctx = self.config.prompt_context();
        SystemPrompts {
            question_strategy: self.config.question_strategy.clone(),
            question_prompt: question_prompt(&self.config.question_strategy, &ctx),
            evaluation_strategy: self.config.evaluation_strategy.clone(),
            evaluation_prompt: evaluation_prompt(&self.config.evaluation_strategy, &ctx),
        }
    }

    /// Generates the next question and appends it. A failed generation still appends
    /// a record (holding the sentinel text) so the session can continue.
    pub async fn generate_question(
        &mut self,
        client: &CompletionClient,
    ) -> Result<ActionOutcome, AppError> {
        if !self.can_generate() {
            return Err(AppError::Conflict(QUESTION_LIMIT_MESSAGE.to_string()));
        }

        let prompt = question_prompt(
            &self.config.question_strategy,
            &self.config.prompt_context(),
        );

        let (question, warning) = match client.generate_question(&prompt, self.config.sampling).await {
            Ok(question) => (question, None),
            Err(e) => {
                warn!(session = %self.id, "Storing generation sentinel: {e}");
                (
                    GENERATION_FAILED_QUESTION.to_string(),
                    Some(GENERATION_FAILED_MESSAGE.to_string()),
                )
            }
        };

        let index = self.ledger.append(question);
        info!(
            session = %self.id,
            "Question {} of {} generated",
            index + 1,
            self.config.question_count
        );

        Ok(ActionOutcome {
            record: self.view(index)?,
            warning,
        })
    }

    /// Evaluates an answer for record `index` and stores answer + feedback.
    /// Empty or unsafe answers are rejected without touching the ledger.
    pub async fn submit_answer(
        &mut self,
        client: &CompletionClient,
        index: RecordId,
        answer: &str,
    ) -> Result<ActionOutcome, AppError> {
        let question = self
            .ledger
            .get(index)
            .map(|r| r.question().to_string())
            .ok_or_else(|| AppError::NotFound(format!("Question {} not found", index + 1)))?;

        let answer = sanitize(answer);
        if answer.is_empty() {
            return Err(AppError::Validation(EMPTY_ANSWER_MESSAGE.to_string()));
        }

        let prompt = evaluation_prompt(
            &self.config.evaluation_strategy,
            &self.config.prompt_context(),
        );

        let (feedback, warning) = match client
            .evaluate_answer(&question, &answer, &prompt, self.config.sampling)
            .await
        {
            Ok(feedback) => (feedback, None),
            Err(CompletionError::InputValidation(msg)) => return Err(AppError::Validation(msg)),
            Err(CompletionError::EvaluationFailed(e) | CompletionError::GenerationFailed(e)) => {
                warn!(session = %self.id, "Storing evaluation sentinel: {e}");
                (
                    EVALUATION_FAILED_FEEDBACK.to_string(),
                    Some(EVALUATION_FAILED_MESSAGE.to_string()),
                )
            }
        };

        self.ledger.record_answer(index, answer, feedback);
        info!(session = %self.id, "Answer {} evaluated", index + 1);

        Ok(ActionOutcome {
            record: self.view(index)?,
            warning,
        })
    }

    /// Clears every record and restores the default config under a fresh session id.
    pub fn reset(&mut self) {
        if !self.ledger.is_empty() {
            info!(session = %self.id, "Session reset ({} records dropped)", self.ledger.len());
        }
        self.ledger.reset();
        self.config = SessionConfig::default();
        self.id = Uuid::new_v4();
        self.started_at = Utc::now();
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            session_id: self.id,
            started_at: self.started_at,
            config: self.config.clone(),
            records: self
                .ledger
                .records()
                .iter()
                .enumerate()
                .map(|(index, record)| record_view(index, record))
                .collect(),
            progress: self.ledger.progress(),
            can_generate: self.can_generate(),
        }
    }

    pub fn summary(&self) -> SessionSummary {
        let progress = self.ledger.progress();
        let scores = self.ledger.score_summary();
        SessionSummary {
            progress,
            progress_ratio: progress.ratio(),
            scores,
            performance: performance_summary(&scores),
        }
    }

    fn view(&self, index: RecordId) -> Result<RecordView, AppError> {
        self.ledger
            .get(index)
            .map(|record| record_view(index, record))
            .ok_or_else(|| AppError::Internal(anyhow::anyhow!("record {index} vanished from ledger")))
    }
}

fn record_view(index: RecordId, record: &InterviewRecord) -> RecordView {
    RecordView {
        index,
        state: record.state(),
        record: record.clone(),
    }
}
