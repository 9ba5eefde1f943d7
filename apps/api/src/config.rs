use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Startup fails if the OpenAI credential is missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub openai_api_key: String,
    pub openai_base_url: String,
    /// Per-request timeout for the completion transport, in seconds.
    pub llm_timeout_secs: u64,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            openai_api_key: require_env("OPENAI_API_KEY")?,
            openai_base_url: std::env::var("OPENAI_BASE_URL")
                .unwrap_or_else(|_| "https://api.openai.com/v1".to_string()),
            llm_timeout_secs: std::env::var("COACH_LLM_TIMEOUT_SECS")
                .unwrap_or_else(|_| "60".to_string())
                .parse::<u64>()
                .context("COACH_LLM_TIMEOUT_SECS must be a whole number of seconds")?,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    let value =
        std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))?;
    if value.trim().is_empty() {
        anyhow::bail!("Required environment variable '{key}' is empty");
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_env_missing() {
        let err = require_env("COACH_TEST_SURELY_UNSET_VARIABLE").unwrap_err();
        assert!(err.to_string().contains("COACH_TEST_SURELY_UNSET_VARIABLE"));
    }

    #[test]
    fn test_require_env_present() {
        std::env::set_var("COACH_TEST_PRESENT_VARIABLE", "sk-test");
        assert_eq!(require_env("COACH_TEST_PRESENT_VARIABLE").unwrap(), "sk-test");
    }

    #[test]
    fn test_require_env_blank_is_rejected() {
        std::env::set_var("COACH_TEST_BLANK_VARIABLE", "   ");
        assert!(require_env("COACH_TEST_BLANK_VARIABLE").is_err());
    }
}
