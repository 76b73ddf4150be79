use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};

/// Service configuration loaded from environment variables.
/// Every variable is optional; unset values fall back to local-development defaults.
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub ollama_url: String,
    pub ollama_model: String,
    /// `None` leaves the model call without a deadline.
    pub llm_timeout: Option<Duration>,
    pub save_dir: PathBuf,
    pub extraction_ttl: Duration,
    pub max_upload_bytes: usize,
    pub rust_log: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            ollama_url: "http://localhost:11434".to_string(),
            ollama_model: "qwen2.5:0.5b".to_string(),
            llm_timeout: None,
            save_dir: PathBuf::from("saved_resumes"),
            extraction_ttl: Duration::from_secs(3600),
            max_upload_bytes: 10 * 1024 * 1024,
            rust_log: "info".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let defaults = Config::default();

        let extraction_ttl = parse_env::<u64>("EXTRACTION_TTL_SECS")?
            .map(Duration::from_secs)
            .unwrap_or(defaults.extraction_ttl);
        anyhow::ensure!(
            !extraction_ttl.is_zero(),
            "EXTRACTION_TTL_SECS must be greater than zero"
        );

        Ok(Config {
            host: optional_env("HOST").unwrap_or(defaults.host),
            port: parse_env("PORT")?.unwrap_or(defaults.port),
            ollama_url: optional_env("OLLAMA_URL").unwrap_or(defaults.ollama_url),
            ollama_model: optional_env("OLLAMA_MODEL").unwrap_or(defaults.ollama_model),
            llm_timeout: parse_env::<u64>("LLM_TIMEOUT_SECS")?.map(Duration::from_secs),
            save_dir: optional_env("SAVE_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.save_dir),
            extraction_ttl,
            max_upload_bytes: parse_env("MAX_UPLOAD_BYTES")?.unwrap_or(defaults.max_upload_bytes),
            rust_log: optional_env("RUST_LOG").unwrap_or(defaults.rust_log),
        })
    }
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn parse_env<T>(key: &str) -> Result<Option<T>>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    optional_env(key)
        .map(|raw| {
            raw.trim()
                .parse::<T>()
                .with_context(|| format!("Environment variable '{key}' has an invalid value '{raw}'"))
        })
        .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_local_setup() {
        let config = Config::default();
        assert_eq!(config.port, 8000);
        assert_eq!(config.save_dir, PathBuf::from("saved_resumes"));
        assert!(config.llm_timeout.is_none());
    }

    #[test]
    fn test_parse_env_unset_is_none() {
        let value: Option<u16> = parse_env("RESUME_API_TEST_UNSET_VAR").unwrap();
        assert!(value.is_none());
    }

    #[test]
    fn test_parse_env_rejects_garbage() {
        std::env::set_var("RESUME_API_TEST_BAD_PORT", "eighty");
        let result = parse_env::<u16>("RESUME_API_TEST_BAD_PORT");
        std::env::remove_var("RESUME_API_TEST_BAD_PORT");
        let message = format!("{:#}", result.unwrap_err());
        assert!(message.contains("RESUME_API_TEST_BAD_PORT"), "{message}");
    }

    #[test]
    fn test_parse_env_reads_value() {
        std::env::set_var("RESUME_API_TEST_GOOD_TTL", " 120 ");
        let result = parse_env::<u64>("RESUME_API_TEST_GOOD_TTL").unwrap();
        std::env::remove_var("RESUME_API_TEST_GOOD_TTL");
        assert_eq!(result, Some(120));
    }
}
