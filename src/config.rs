use std::path::PathBuf;

use secrecy::SecretString;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    MissingVar(&'static str),

    #[error("invalid value for {name}: {detail}")]
    Invalid { name: &'static str, detail: String },
}

/// Process configuration, read entirely from the environment.
pub struct Config {
    pub api_key: SecretString,
    pub model: Option<String>,
    pub db_path: PathBuf,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(
            std::env::var("OPENAI_API_KEY").ok(),
            std::env::var("STEPWISE_MODEL").ok(),
            std::env::var("STEPWISE_DB").ok(),
            std::env::var("PORT").ok(),
        )
    }

    fn from_vars(
        api_key: Option<String>,
        model: Option<String>,
        db_path: Option<String>,
        port: Option<String>,
    ) -> Result<Self, ConfigError> {
        let api_key = api_key.ok_or(ConfigError::MissingVar("OPENAI_API_KEY"))?;

        let db_path = db_path
            .map(PathBuf::from)
            .unwrap_or_else(|| home_dir().join(".stepwise").join("stepwise.db"));

        let port = match port {
            Some(raw) => raw.parse().map_err(|e| ConfigError::Invalid {
                name: "PORT",
                detail: format!("{e}"),
            })?,
            None => 8787,
        };

        Ok(Self {
            api_key: SecretString::from(api_key),
            model,
            db_path,
            port,
        })
    }
}

fn home_dir() -> PathBuf {
    std::env::var("HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("/tmp"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_api_key_is_an_error() {
        let result = Config::from_vars(None, None, None, None);
        assert!(matches!(result, Err(ConfigError::MissingVar("OPENAI_API_KEY"))));
    }

    #[test]
    fn defaults_applied() {
        let config = Config::from_vars(Some("sk-test".into()), None, None, None).unwrap();
        assert_eq!(config.port, 8787);
        assert!(config.model.is_none());
        assert!(config.db_path.ends_with(".stepwise/stepwise.db"));
    }

    #[test]
    fn explicit_values_win() {
        let config = Config::from_vars(
            Some("sk-test".into()),
            Some("gpt-4o".into()),
            Some("/tmp/steps.db".into()),
            Some("9000".into()),
        )
        .unwrap();
        assert_eq!(config.model.as_deref(), Some("gpt-4o"));
        assert_eq!(config.db_path, PathBuf::from("/tmp/steps.db"));
        assert_eq!(config.port, 9000);
    }

    #[test]
    fn bad_port_is_an_error() {
        let result = Config::from_vars(Some("sk-test".into()), None, None, Some("not-a-port".into()));
        assert!(matches!(result, Err(ConfigError::Invalid { name: "PORT", .. })));
    }
}
