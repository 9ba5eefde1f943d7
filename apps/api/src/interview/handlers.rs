//! Axum route handlers for the interview session API.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::interview::prompts::Strategy;
use crate::interview::session::{
    ActionOutcome, SessionSnapshot, SessionSummary, SystemPrompts,
};
use crate::models::session::{
    ConfigUpdate, SessionConfig, MAX_QUESTIONS, MIN_QUESTIONS, OTHER_CHOICE, PREDEFINED_COMPANIES,
    PREDEFINED_ROLES,
};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct StrategyInfo {
    pub name: String,
    pub explanation: &'static str,
}

#[derive(Debug, Serialize)]
pub struct CatalogResponse {
    pub roles: Vec<&'static str>,
    pub companies: Vec<&'static str>,
    pub other_choice: &'static str,
    pub strategies: Vec<StrategyInfo>,
    pub min_questions: u8,
    pub max_questions: u8,
    pub defaults: SessionConfig,
}

#[derive(Debug, Serialize)]
pub struct PromptsResponse {
    pub show_prompts: bool,
    /// Present only when the session has `show_prompts` enabled.
    pub prompts: Option<SystemPrompts>,
}

#[derive(Debug, Deserialize)]
pub struct SubmitAnswerRequest {
    pub answer: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/catalog
///
/// Choices the configuration form offers.
pub async fn handle_catalog() -> Json<CatalogResponse> {
    let strategies = Strategy::ALL
        .into_iter()
        .map(|s| StrategyInfo {
            explanation: s.explanation().unwrap_or_default(),
            name: s.name().to_string(),
        })
        .collect();

    Json(CatalogResponse {
        roles: PREDEFINED_ROLES.to_vec(),
        companies: PREDEFINED_COMPANIES.to_vec(),
        other_choice: OTHER_CHOICE,
        strategies,
        min_questions: MIN_QUESTIONS,
        max_questions: MAX_QUESTIONS,
        defaults: SessionConfig::default(),
    })
}

/// GET /api/v1/session
pub async fn handle_get_session(State(state): State<AppState>) -> Json<SessionSnapshot> {
    Json(state.session.lock().await.snapshot())
}

/// PUT /api/v1/session/config
pub async fn handle_update_config(
    State(state): State<AppState>,
    Json(update): Json<ConfigUpdate>,
) -> Result<Json<SessionConfig>, AppError> {
    let mut session = state.session.lock().await;
    let config = session.update_config(update)?.clone();
    Ok(Json(config))
}

/// GET /api/v1/session/prompts
pub async fn handle_get_prompts(State(state): State<AppState>) -> Json<PromptsResponse> {
    let session = state.session.lock().await;
    let show_prompts = session.config().show_prompts;
    Json(PromptsResponse {
        show_prompts,
        prompts: show_prompts.then(|| session.system_prompts()),
    })
}

/// POST /api/v1/session/questions
///
/// Generates the next question. Refused with 409 once the requested count is reached.
pub async fn handle_generate_question(
    State(state): State<AppState>,
) -> Result<Json<ActionOutcome>, AppError> {
    let mut session = state.session.lock().await;
    let outcome = session.generate_question(&state.completion).await?;
    Ok(Json(outcome))
}

/// POST /api/v1/session/questions/:index/answer
///
/// `index` is the zero-based position returned when the question was generated.
pub async fn handle_submit_answer(
    State(state): State<AppState>,
    Path(index): Path<usize>,
    Json(request): Json<SubmitAnswerRequest>,
) -> Result<Json<ActionOutcome>, AppError> {
    let mut session = state.session.lock().await;
    let outcome = session
        .submit_answer(&state.completion, index, &request.answer)
        .await?;
    Ok(Json(outcome))
}

/// GET /api/v1/session/summary
pub async fn handle_summary(State(state): State<AppState>) -> Json<SessionSummary> {
    Json(state.session.lock().await.summary())
}

/// POST /api/v1/session/reset
pub async fn handle_reset(State(state): State<AppState>) -> Json<SessionSnapshot> {
    let mut session = state.session.lock().await;
    session.reset();
    Json(session.snapshot())
}
