//! Prompt catalog — maps a strategy selector to the system instruction sent with each
//! question-generation or answer-evaluation call.
//!
//! Both mappings are total: an unrecognized selector renders an empty instruction.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A named prompt-construction technique, selectable independently for question
/// generation and answer evaluation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Strategy {
    #[default]
    ZeroShot,
    FewShot,
    ChainOfThought,
    RoleSpecific,
    Comparative,
    /// Any selector outside the catalog. Renders as an empty instruction.
    Unrecognized(String),
}

impl Strategy {
    pub const ALL: [Strategy; 5] = [
        Strategy::ZeroShot,
        Strategy::FewShot,
        Strategy::ChainOfThought,
        Strategy::RoleSpecific,
        Strategy::Comparative,
    ];

    pub fn name(&self) -> &str {
        match self {
            Strategy::ZeroShot => "Zero-shot",
            Strategy::FewShot => "Few-shot",
            Strategy::ChainOfThought => "Chain-of-Thought",
            Strategy::RoleSpecific => "Role-Specific",
            Strategy::Comparative => "Comparative",
            Strategy::Unrecognized(name) => name,
        }
    }

    pub fn explanation(&self) -> Option<&'static str> {
        match self {
            Strategy::ZeroShot => Some("Direct and simple. No examples needed."),
            Strategy::FewShot => {
                Some("A couple of examples to steer the output in the right direction.")
            }
            Strategy::ChainOfThought => Some("Break it down: get the model to think step-by-step."),
            Strategy::RoleSpecific => Some("Customized details to match your role and company vibe."),
            Strategy::Comparative => Some("Compares your answer to an ideal response for feedback."),
            Strategy::Unrecognized(_) => None,
        }
    }
}

impl From<&str> for Strategy {
    fn from(name: &str) -> Self {
        Strategy::ALL
            .into_iter()
            .find(|s| s.name() == name)
            .unwrap_or_else(|| Strategy::Unrecognized(name.to_string()))
    }
}

impl From<String> for Strategy {
    fn from(name: String) -> Self {
        Strategy::from(name.as_str())
    }
}

impl From<Strategy> for String {
    fn from(strategy: Strategy) -> Self {
        strategy.name().to_string()
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Role, company and optional job description interpolated into the templates.
#[derive(Debug, Clone, Copy)]
pub struct PromptContext<'a> {
    pub role: &'a str,
    pub company: &'a str,
    pub job_description: Option<&'a str>,
}

impl PromptContext<'_> {
    /// ` The job description is: {jd}.` when a non-blank job description is set, else empty.
    fn job_description_clause(&self) -> String {
        match self.job_description {
            Some(jd) if !jd.trim().is_empty() => format!(" The job description is: {jd}."),
            _ => String::new(),
        }
    }
}

/// System instruction for question generation under `strategy`.
pub fn question_prompt(strategy: &Strategy, ctx: &PromptContext<'_>) -> String {
    let PromptContext { role, company, .. } = *ctx;
    let jd = ctx.job_description_clause();

    match strategy {
        Strategy::ZeroShot => format!(
            "You are an expert interviewer at {company} for a {role} position.{jd} \
            Generate a challenging yet realistic interview question for the user."
        ),
        Strategy::FewShot => format!(
            "Below are sample interview questions and ideal answers for a {role} at {company}.{jd}\n\
            Q: Tell me about yourself?\nA: I have a strong background in ...\n\
            Q: What are your strengths?\nA: I excel at problem-solving and teamwork.\n\n\
            Now, generate a similar challenging interview question."
        ),
        Strategy::ChainOfThought => format!(
            "Imagine you are a seasoned interviewer at {company} for a {role} role.{jd} \
            Think step-by-step and generate a detailed, challenging interview question, \
            explaining your reasoning internally."
        ),
        Strategy::RoleSpecific => format!(
            "As a hiring manager at {company} interviewing for a {role}.{jd} \
            Create a highly specific question that tests the key skills required for this role."
        ),
        Strategy::Comparative => format!(
            "Generate an interview question for a {role} at {company}.{jd} \
            Challenge the candidate and implicitly compare their answer to industry standards."
        ),
        Strategy::Unrecognized(_) => String::new(),
    }
}

/// System instruction for answer evaluation under `strategy`.
/// Only `RoleSpecific` reads the role and company.
pub fn evaluation_prompt(strategy: &Strategy, ctx: &PromptContext<'_>) -> String {
    match strategy {
        Strategy::ZeroShot => "You are a professional interview evaluator. \
            Evaluate the user's answer based on clarity, depth, relevance, and conciseness. \
            Provide a numeric score out of 10 in the format 'Score: <number>', \
            followed by constructive feedback."
            .to_string(),
        Strategy::FewShot => "Here is an example evaluation:\n\
            Question: How do you handle tight deadlines?\n\
            Answer: I prioritize tasks and communicate effectively with my team.\n\
            Score: 8. Feedback: Good clarity but consider adding more detail on your process.\n\n\
            Now, evaluate the following answer with a similar approach."
            .to_string(),
        Strategy::ChainOfThought => "Think step-by-step like a seasoned interviewer evaluating a candidate. \
            Explain your reasoning and provide a numeric score along with detailed feedback \
            on clarity, depth, and relevance."
            .to_string(),
        Strategy::RoleSpecific => format!(
            "As an interviewer for a {} at {}, evaluate the answer for its technical/behavioral depth, \
            accuracy, and relevance. Provide a numeric score and detailed feedback.",
            ctx.role, ctx.company
        ),
        Strategy::Comparative => "Compare the candidate's answer with the ideal response. \
            Provide a numeric score (out of 10) and constructive feedback highlighting strengths \
            and areas for improvement."
            .to_string(),
        Strategy::Unrecognized(_) => String::new(),
    }
}
