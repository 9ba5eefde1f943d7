//! Overall performance summary shown once at least one answer has a readable score.

use serde::Serialize;

use crate::interview::ledger::ScoreSummary;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PerformanceTier {
    Excellent,
    Good,
    NeedsWork,
}

impl PerformanceTier {
    pub fn from_average(average: f64) -> Self {
        if average >= 8.0 {
            PerformanceTier::Excellent
        } else if average >= 5.0 {
            PerformanceTier::Good
        } else {
            PerformanceTier::NeedsWork
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            PerformanceTier::Excellent => "🏆",
            PerformanceTier::Good => "👍",
            PerformanceTier::NeedsWork => "😞",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct LearningResource {
    pub title: &'static str,
    pub url: &'static str,
}

pub const IMPROVEMENT_AREAS: &[&str] = &[
    "Review your feedback for each question carefully.",
    "Focus on clarity, depth, and relevance.",
    "Practice delivering concise yet thorough answers.",
];

pub const LEARNING_RESOURCES: &[LearningResource] = &[
    LearningResource {
        title: "How to answer behavioral interview questions",
        url: "https://www.themuse.com/advice/star-interview-method",
    },
    LearningResource {
        title: "Improving technical interview skills",
        url: "https://www.interviewcake.com/",
    },
    LearningResource {
        title: "Common PM interview questions",
        url: "https://www.productmanagementexercises.com/",
    },
];

#[derive(Debug, Clone, Serialize)]
pub struct PerformanceSummary {
    pub average_score: f64,
    /// e.g. "7.5 / 10 👍"
    pub headline: String,
    pub tier: PerformanceTier,
    pub improvement_areas: &'static [&'static str],
    pub resources: &'static [LearningResource],
}

/// `None` until some feedback carries a readable score.
pub fn performance_summary(scores: &ScoreSummary) -> Option<PerformanceSummary> {
    let average = scores.average_score?;
    let tier = PerformanceTier::from_average(average);
    Some(PerformanceSummary {
        average_score: average,
        headline: format!("{average:.1} / 10 {}", tier.emoji()),
        tier,
        improvement_areas: IMPROVEMENT_AREAS,
        resources: LEARNING_RESOURCES,
    })
}
