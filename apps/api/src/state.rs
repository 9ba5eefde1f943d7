use std::sync::Arc;

use tokio::sync::Mutex;

use crate::interview::completion::CompletionClient;
use crate::interview::session::InterviewSession;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub completion: CompletionClient,
    /// The one active session. Handlers hold the lock for the whole action,
    /// so actions run one at a time, each to completion.
    pub session: Arc<Mutex<InterviewSession>>,
}

impl AppState {
    pub fn new(completion: CompletionClient) -> Self {
        Self {
            completion,
            session: Arc::new(Mutex::new(InterviewSession::new())),
        }
    }
}
