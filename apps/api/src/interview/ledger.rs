//! Session ledger — the ordered list of interview records plus derived progress
//! and score aggregates.

use serde::Serialize;

use crate::models::record::InterviewRecord;

/// Marker the evaluation prompts ask the model to emit before its numeric score.
pub const SCORE_MARKER: &str = "Score:";

/// Position of a record in the ledger, as returned by `Ledger::append`.
pub type RecordId = usize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Progress {
    pub answered: usize,
    pub total: usize,
}

impl Progress {
    /// Fraction answered, 0.0 when nothing has been generated yet.
    pub fn ratio(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.answered as f64 / self.total as f64
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreSummary {
    pub average_score: Option<f64>,
    pub answered_with_score: usize,
}

#[derive(Debug, Clone, Default)]
pub struct Ledger {
    records: Vec<InterviewRecord>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, question: impl Into<String>) -> RecordId {
        self.records.push(InterviewRecord::new(question));
        self.records.len() - 1
    }

    /// Overwrites the answer and feedback of record `id`.
    /// Returns `false` (and changes nothing) if `id` is out of range.
    pub fn record_answer(&mut self, id: RecordId, answer: String, feedback: String) -> bool {
        match self.records.get_mut(id) {
            Some(record) => {
                record.record(answer, Some(feedback));
                true
            }
            None => false,
        }
    }

    pub fn get(&self, id: RecordId) -> Option<&InterviewRecord> {
        self.records.get(id)
    }

    pub fn records(&self) -> &[InterviewRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn progress(&self) -> Progress {
        Progress {
            answered: self.records.iter().filter(|r| r.is_answered()).count(),
            total: self.records.len(),
        }
    }

    /// Averages the scores that can be parsed out of evaluated records' feedback.
    /// Feedback without a readable score is left out, not counted as zero.
    pub fn score_summary(&self) -> ScoreSummary {
        let scores: Vec<i64> = self
            .records
            .iter()
            .filter_map(|r| r.feedback())
            .filter_map(parse_score)
            .collect();

        let average_score = if scores.is_empty() {
            None
        } else {
            Some(scores.iter().map(|&s| s as f64).sum::<f64>() / scores.len() as f64)
        };

        ScoreSummary {
            average_score,
            answered_with_score: scores.len(),
        }
    }

    pub fn reset(&mut self) {
        self.records.clear();
    }
}

/// Reads the integer that follows the LAST `Score:` marker in `feedback`.
///
/// Only the first whitespace-delimited token after the marker is considered, with
/// trailing sentence punctuation removed ("9." and "9," read as 9). Anything else
/// in the token ("8/10", "oops") makes the score unreadable.
pub fn parse_score(feedback: &str) -> Option<i64> {
    let idx = feedback.rfind(SCORE_MARKER)?;
    let token = feedback[idx + SCORE_MARKER.len()..].split_whitespace().next()?;
    token
        .trim_end_matches(['.', ',', ';', ':', '!'])
        .parse::<i64>()
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_score_basic() {
        assert_eq!(parse_score("Score: 8 Solid answer."), Some(8));
        assert_eq!(parse_score("Score: 9. Great job"), Some(9));
        assert_eq!(parse_score("Overall.\nScore:7\nFeedback: ..."), Some(7));
    }

    #[test]
    fn test_parse_score_uses_last_marker() {
        let fb = "Example Score: 2 for a weak answer. Your Score: 6, decent.";
        assert_eq!(parse_score(fb), Some(6));
    }

    #[test]
    fn test_parse_score_rejects_non_integer_tokens() {
        assert_eq!(parse_score("Score: oops"), None);
        assert_eq!(parse_score("Score: 8/10"), None);
        assert_eq!(parse_score("Score: 7.5 overall"), None);
        assert_eq!(parse_score("Score:"), None);
    }

    #[test]
    fn test_parse_score_requires_marker() {
        assert_eq!(parse_score("no marker here"), None);
        assert_eq!(parse_score("8 out of 10"), None);
        assert_eq!(parse_score("score: 8"), None);
    }

    #[test]
    fn test_append_returns_positions() {
        let mut ledger = Ledger::new();
        assert_eq!(ledger.append("Q1"), 0);
        assert_eq!(ledger.append("Q2"), 1);
        assert_eq!(ledger.len(), 2);
        assert_eq!(ledger.get(1).unwrap().question(), "Q2");
    }

    #[test]
    fn test_record_answer_out_of_range_is_noop() {
        let mut ledger = Ledger::new();
        ledger.append("Q1");
        assert!(!ledger.record_answer(5, "A".to_string(), "Score: 1".to_string()));
        assert_eq!(ledger.progress(), Progress { answered: 0, total: 1 });
    }

    #[test]
    fn test_score_summary_skips_unreadable_feedback() {
        let mut ledger = Ledger::new();
        let feedback = ["Nice work. Score: 8 overall", "Score: oops", "no marker here"];
        for (i, fb) in feedback.iter().enumerate() {
            let id = ledger.append(format!("Q{i}"));
            ledger.record_answer(id, format!("A{i}"), fb.to_string());
        }
        let summary = ledger.score_summary();
        assert_eq!(summary.answered_with_score, 1);
        assert_eq!(summary.average_score, Some(8.0));
        assert_eq!(ledger.progress(), Progress { answered: 3, total: 3 });
    }

    #[test]
    fn test_score_summary_averages() {
        let mut ledger = Ledger::new();
        for (i, s) in [6, 9, 7].iter().enumerate() {
            let id = ledger.append(format!("Q{i}"));
            ledger.record_answer(id, "A".to_string(), format!("Score: {s}"));
        }
        ledger.append("unanswered");
        let summary = ledger.score_summary();
        assert_eq!(summary.answered_with_score, 3);
        assert!((summary.average_score.unwrap() - 22.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_score_summary_handles_extreme_scores() {
        let mut ledger = Ledger::new();
        for i in 0..2 {
            let id = ledger.append(format!("Q{i}"));
            ledger.record_answer(id, "A".to_string(), "Score: 9223372036854775807".to_string());
        }
        let summary = ledger.score_summary();
        assert_eq!(summary.answered_with_score, 2);
        let average = summary.average_score.unwrap();
        assert!((average - i64::MAX as f64).abs() < 1e6, "average was {average}");
    }

    #[test]
    fn test_empty_ledger_has_no_average() {
        let ledger = Ledger::new();
        assert_eq!(
            ledger.score_summary(),
            ScoreSummary {
                average_score: None,
                answered_with_score: 0
            }
        );
        assert_eq!(ledger.progress().ratio(), 0.0);
    }

    #[test]
    fn test_single_record_end_to_end() {
        let mut ledger = Ledger::new();
        let id = ledger.append("Q1");
        assert!(ledger.record_answer(id, "A1".to_string(), "Score: 9. Great job".to_string()));
        assert_eq!(ledger.progress(), Progress { answered: 1, total: 1 });
        assert_eq!(
            ledger.score_summary(),
            ScoreSummary {
                average_score: Some(9.0),
                answered_with_score: 1
            }
        );
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut ledger = Ledger::new();
        let id = ledger.append("Q1");
        ledger.record_answer(id, "A1".to_string(), "Score: 5".to_string());
        ledger.append("Q2");
        ledger.reset();
        assert!(ledger.is_empty());
        assert_eq!(ledger.progress(), Progress { answered: 0, total: 0 });
    }
}
