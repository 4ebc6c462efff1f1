use std::env;

use crate::error::{CargoError, Result};

/// Runtime configuration for the service, built once at startup and passed
/// down explicitly. Values come from the environment; `main` loads a local
/// `.env` file first when one exists.
#[derive(Debug, Clone)]
pub struct Settings {
    /// API key required on /graphql. Unset means dev mode: no check at all.
    pub api_key: Option<String>,
    /// Origins allowed by the CORS layer; empty disables the layer entirely.
    pub allowed_origins: Vec<String>,
    /// Level for the crate's tracing directive (overridable via RUST_LOG).
    pub log_level: String,
}

impl Settings {
    pub fn from_env() -> Result<Self> {
        let api_key = optional_var("API_KEY")?.filter(|key| !key.is_empty());
        let allowed_origins = optional_var("ALLOWED_ORIGINS")?
            .map(|raw| parse_origins(&raw))
            .unwrap_or_default();
        let log_level = optional_var("LOG_LEVEL")?.unwrap_or_else(|| "info".to_string());

        Ok(Self {
            api_key,
            allowed_origins,
            log_level,
        })
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(str::to_string)
        .collect()
}

fn optional_var(name: &str) -> Result<Option<String>> {
    match env::var(name) {
        Ok(value) => Ok(Some(value)),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(err) => Err(CargoError::Env(err)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_comma_separated_origins() {
        let origins = parse_origins("https://a.example, https://b.example ,,");
        assert_eq!(origins, vec!["https://a.example", "https://b.example"]);
    }

    #[test]
    fn empty_origin_list_stays_empty() {
        assert!(parse_origins("").is_empty());
        assert!(parse_origins(" , ").is_empty());
    }
}
