use serde::{Deserialize, Serialize};

use crate::interview::prompts::{PromptContext, Strategy};
use crate::interview::sanitizer::is_safe;

pub const PREDEFINED_ROLES: &[&str] = &[
    "Product Manager",
    "Software Engineer",
    "Data Scientist",
    "Marketing Manager",
    "UX Designer",
];

pub const PREDEFINED_COMPANIES: &[&str] = &["Google", "Amazon", "Vinted", "Meta", "Startups"];

/// Selector value that switches a role/company field to free text.
pub const OTHER_CHOICE: &str = "Other";

pub const MIN_QUESTIONS: u8 = 1;
pub const MAX_QUESTIONS: u8 = 10;

/// Sampling settings forwarded with every completion request.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SamplingParams {
    /// 0.0–1.0
    pub temperature: f32,
    /// Nucleus probability, 0.0–1.0
    pub top_p: f32,
    /// 0.0–2.0
    pub frequency_penalty: f32,
}

impl Default for SamplingParams {
    fn default() -> Self {
        Self {
            temperature: 0.7,
            top_p: 1.0,
            frequency_penalty: 0.0,
        }
    }
}

impl SamplingParams {
    pub fn validate(&self) -> Result<(), String> {
        check_range("temperature", self.temperature, 0.0, 1.0)?;
        check_range("top_p", self.top_p, 0.0, 1.0)?;
        check_range("frequency_penalty", self.frequency_penalty, 0.0, 2.0)
    }
}

fn check_range(name: &str, value: f32, min: f32, max: f32) -> Result<(), String> {
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(format!("{name} must be between {min} and {max}, got {value}"))
    }
}

/// Everything the sidebar form controls. Replaced wholesale on reset.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionConfig {
    pub role: String,
    pub company: String,
    pub job_description: Option<String>,
    pub question_count: u8,
    pub sampling: SamplingParams,
    pub question_strategy: Strategy,
    pub evaluation_strategy: Strategy,
    pub show_prompts: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            role: PREDEFINED_ROLES[0].to_string(),
            company: PREDEFINED_COMPANIES[0].to_string(),
            job_description: None,
            question_count: MIN_QUESTIONS,
            sampling: SamplingParams::default(),
            question_strategy: Strategy::default(),
            evaluation_strategy: Strategy::default(),
            show_prompts: false,
        }
    }
}

impl SessionConfig {
    pub fn prompt_context(&self) -> PromptContext<'_> {
        PromptContext {
            role: &self.role,
            company: &self.company,
            job_description: self.job_description.as_deref(),
        }
    }
}

/// Raw form submission. `role`/`company` hold a predefined choice or `"Other"`,
/// in which case the matching `custom_*` field supplies the text.
#[derive(Debug, Clone, Deserialize)]
pub struct ConfigUpdate {
    pub role: String,
    #[serde(default)]
    pub custom_role: Option<String>,
    pub company: String,
    #[serde(default)]
    pub custom_company: Option<String>,
    #[serde(default)]
    pub job_description: Option<String>,
    /// Wider than `SessionConfig::question_count` so any out-of-range integer
    /// reaches the range check below.
    pub question_count: i64,
    #[serde(default)]
    pub sampling: SamplingParams,
    #[serde(default)]
    pub question_strategy: Strategy,
    #[serde(default)]
    pub evaluation_strategy: Strategy,
    #[serde(default)]
    pub show_prompts: bool,
}

#[derive(Debug, Clone, Copy)]
enum ChoiceField {
    Role,
    Company,
}

impl ChoiceField {
    fn predefined(self) -> &'static [&'static str] {
        match self {
            ChoiceField::Role => PREDEFINED_ROLES,
            ChoiceField::Company => PREDEFINED_COMPANIES,
        }
    }

    fn fallback(self) -> &'static str {
        match self {
            ChoiceField::Role => "Custom Role",
            ChoiceField::Company => "Custom Company",
        }
    }

    fn label(self) -> &'static str {
        match self {
            ChoiceField::Role => "role",
            ChoiceField::Company => "company",
        }
    }
}

/// Resolves a selector + optional free text into the value used in prompts.
/// Free text is safety-checked but not truncated.
fn resolve_choice(field: ChoiceField, choice: &str, custom: Option<&str>) -> Result<String, String> {
    if choice == OTHER_CHOICE {
        let custom = custom.unwrap_or_default();
        if custom.is_empty() {
            return Ok(field.fallback().to_string());
        }
        if !is_safe(custom) {
            return Err(format!(
                "Invalid {} input detected. Please remove any HTML or script content.",
                field.label()
            ));
        }
        return Ok(custom.to_string());
    }

    if field.predefined().contains(&choice) {
        Ok(choice.to_string())
    } else {
        Err(format!(
            "Unknown {} '{choice}'. Choose one of: {}, {OTHER_CHOICE}",
            field.label(),
            field.predefined().join(", ")
        ))
    }
}

impl ConfigUpdate {
    /// Validates the submission and produces the config the session will use.
    pub fn into_config(self) -> Result<SessionConfig, String> {
        let role = resolve_choice(ChoiceField::Role, &self.role, self.custom_role.as_deref())?;
        let company = resolve_choice(
            ChoiceField::Company,
            &self.company,
            self.custom_company.as_deref(),
        )?;

        let job_description = match self.job_description {
            Some(jd) if !jd.trim().is_empty() => {
                if !is_safe(&jd) {
                    return Err(
                        "Invalid job description detected. Please remove any HTML or script content."
                            .to_string(),
                    );
                }
                Some(jd)
            }
            _ => None,
        };

        let question_count = u8::try_from(self.question_count)
            .ok()
            .filter(|n| (MIN_QUESTIONS..=MAX_QUESTIONS).contains(n))
            .ok_or_else(|| {
                format!("question_count must be between {MIN_QUESTIONS} and {MAX_QUESTIONS}")
            })?;

        self.sampling.validate()?;

        Ok(SessionConfig {
            role,
            company,
            job_description,
            question_count,
            sampling: self.sampling,
            question_strategy: self.question_strategy,
            evaluation_strategy: self.evaluation_strategy,
            show_prompts: self.show_prompts,
        })
    }
}
