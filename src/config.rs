use std::env;

use secrecy::{ExposeSecret, SecretString};

use crate::errors::{AppError, AppResult};

#[derive(Clone, Debug)]
pub struct Config {
    pub web_server_host: String,
    pub web_server_port: u16,
    pub openai_api_key: SecretString,
    pub openai_api_base: Option<String>,
    pub completion_model: String,
    pub completion_max_tokens: u32,
    pub completion_temperature: f32,
    /// Report unparseable provider text as an error instead of substituting
    /// the fallback question.
    pub strict_reply_parsing: bool,
    /// Empty means any origin is allowed.
    pub cors_allowed_origins: Vec<String>,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            web_server_host: lookup("WEB_SERVER_HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            web_server_port: lookup("PORT")
                .and_then(|p| p.trim().parse().ok())
                .unwrap_or(3001),
            openai_api_key: SecretString::from(lookup("OPENAI_API_KEY").unwrap_or_default()),
            openai_api_base: lookup("OPENAI_API_BASE").filter(|base| !base.trim().is_empty()),
            completion_model: lookup("OPENAI_MODEL").unwrap_or_else(|| "gpt-4o-mini".to_string()),
            completion_max_tokens: lookup("COMPLETION_MAX_TOKENS")
                .and_then(|t| t.trim().parse().ok())
                .unwrap_or(4000),
            completion_temperature: lookup("COMPLETION_TEMPERATURE")
                .and_then(|t| t.trim().parse().ok())
                .unwrap_or(0.3),
            strict_reply_parsing: lookup("STRICT_REPLY_PARSING")
                .map(|v| parse_flag(&v))
                .unwrap_or(false),
            cors_allowed_origins: lookup("CORS_ALLOWED_ORIGINS")
                .map(|origins| {
                    origins
                        .split(',')
                        .map(str::trim)
                        .filter(|origin| !origin.is_empty())
                        .map(str::to_string)
                        .collect()
                })
                .unwrap_or_default(),
        }
    }

    /// Rejects settings the server cannot run with.
    pub fn validate(&self) -> AppResult<()> {
        if self.openai_api_key.expose_secret().trim().is_empty() {
            return Err(AppError::InternalError(
                "OPENAI_API_KEY is not set".to_string(),
            ));
        }

        if self.completion_max_tokens == 0 {
            return Err(AppError::InternalError(
                "COMPLETION_MAX_TOKENS must be greater than zero".to_string(),
            ));
        }

        if !(0.0..=2.0).contains(&self.completion_temperature) {
            return Err(AppError::InternalError(format!(
                "COMPLETION_TEMPERATURE must be between 0 and 2, got {}",
                self.completion_temperature
            )));
        }

        Ok(())
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 3001,
            openai_api_key: SecretString::from("test_api_key".to_string()),
            openai_api_base: None,
            completion_model: "gpt-4o-mini".to_string(),
            completion_max_tokens: 4000,
            completion_temperature: 0.3,
            strict_reply_parsing: false,
            cors_allowed_origins: Vec::new(),
        }
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_config_defaults() {
        let config = config_from(&[]);

        assert_eq!(config.web_server_host, "0.0.0.0");
        assert_eq!(config.web_server_port, 3001);
        assert_eq!(config.completion_model, "gpt-4o-mini");
        assert_eq!(config.completion_max_tokens, 4000);
        assert!(!config.strict_reply_parsing);
        assert!(config.openai_api_base.is_none());
        assert!(config.cors_allowed_origins.is_empty());
    }

    #[test]
    fn test_config_reads_overrides() {
        let config = config_from(&[
            ("PORT", "8088"),
            ("OPENAI_API_KEY", "sk-live"),
            ("OPENAI_API_BASE", "http://localhost:11434/v1"),
            ("OPENAI_MODEL", "llama3"),
            ("STRICT_REPLY_PARSING", "TRUE"),
            ("CORS_ALLOWED_ORIGINS", "http://a.test, ,http://b.test"),
        ]);

        assert_eq!(config.web_server_port, 8088);
        assert_eq!(config.openai_api_key.expose_secret(), "sk-live");
        assert_eq!(
            config.openai_api_base.as_deref(),
            Some("http://localhost:11434/v1")
        );
        assert_eq!(config.completion_model, "llama3");
        assert!(config.strict_reply_parsing);
        assert_eq!(
            config.cors_allowed_origins,
            vec!["http://a.test".to_string(), "http://b.test".to_string()]
        );
    }

    #[test]
    fn test_unparseable_port_falls_back_to_default() {
        let config = config_from(&[("PORT", "not-a-port")]);
        assert_eq!(config.web_server_port, 3001);
    }

    #[test]
    fn test_validate_requires_api_key() {
        let config = config_from(&[]);
        assert!(config.validate().is_err());
        assert!(Config::test_config().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_out_of_range_temperature() {
        let mut config = Config::test_config();
        config.completion_temperature = 3.5;
        assert!(config.validate().is_err());
    }
}
