use chrono::{DateTime, Utc};
use serde::Serialize;

/// Where a record sits in its question → answer → feedback lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordState {
    Pending,
    Answered,
    Evaluated,
}

/// One generated question with its optional answer and feedback.
///
/// Fields are private: the question never changes after creation, and feedback
/// can only be set together with an answer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InterviewRecord {
    question: String,
    answer: Option<String>,
    feedback: Option<String>,
    created_at: DateTime<Utc>,
    answered_at: Option<DateTime<Utc>>,
}

impl InterviewRecord {
    pub fn new(question: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: None,
            feedback: None,
            created_at: Utc::now(),
            answered_at: None,
        }
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    pub fn answer(&self) -> Option<&str> {
        self.answer.as_deref()
    }

    pub fn feedback(&self) -> Option<&str> {
        self.feedback.as_deref()
    }

    /// Overwrites answer and feedback. Re-submission replaces both.
    pub fn record(&mut self, answer: String, feedback: Option<String>) {
        self.answer = Some(answer);
        self.feedback = feedback;
        self.answered_at = Some(Utc::now());
    }

    /// True when the answer holds something other than whitespace.
    pub fn is_answered(&self) -> bool {
        self.answer.as_deref().is_some_and(|a| !a.trim().is_empty())
    }

    pub fn state(&self) -> RecordState {
        match (&self.answer, &self.feedback) {
            (None, _) => RecordState::Pending,
            (Some(_), None) => RecordState::Answered,
            (Some(_), Some(_)) => RecordState::Evaluated,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_record_is_pending() {
        let r = InterviewRecord::new("Why Vinted?");
        assert_eq!(r.question(), "Why Vinted?");
        assert_eq!(r.state(), RecordState::Pending);
        assert!(r.answer().is_none());
        assert!(r.feedback().is_none());
        assert!(r.answered_at.is_none());
        assert!(!r.is_answered());
    }

    #[test]
    fn test_answer_without_feedback_is_answered() {
        let mut r = InterviewRecord::new("Q");
        r.record("A".to_string(), None);
        assert_eq!(r.state(), RecordState::Answered);
        assert!(r.answered_at.is_some());
    }

    #[test]
    fn test_answer_with_feedback_is_evaluated() {
        let mut r = InterviewRecord::new("Q");
        r.record("A".to_string(), Some("Score: 7".to_string()));
        assert_eq!(r.state(), RecordState::Evaluated);
        assert!(r.created_at <= r.answered_at.unwrap());
    }

    #[test]
    fn test_resubmission_overwrites() {
        let mut r = InterviewRecord::new("Q");
        r.record("first".to_string(), Some("Score: 3".to_string()));
        r.record("second".to_string(), Some("Score: 9".to_string()));
        assert_eq!(r.answer(), Some("second"));
        assert_eq!(r.feedback(), Some("Score: 9"));
        assert_eq!(r.question(), "Q");
    }

    #[test]
    fn test_whitespace_answer_does_not_count() {
        let mut r = InterviewRecord::new("Q");
        r.record("   ".to_string(), None);
        assert!(!r.is_answered());
    }
}
