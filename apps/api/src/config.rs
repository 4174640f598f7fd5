use anyhow::{Context, Result};

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_MAX_BODY_BYTES: usize = 1024 * 1024;
const DEFAULT_SERVICE_NAME: &str = "resume-planner";

/// Application configuration loaded from environment variables.
/// Every variable has a default; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Upper bound on analysis request bodies.
    pub max_body_bytes: usize,
    pub service_name: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: DEFAULT_PORT,
            rust_log: "info".to_string(),
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
            service_name: DEFAULT_SERVICE_NAME.to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Config::default();

        Ok(Config {
            port: match lookup("PORT") {
                Some(v) => v.parse::<u16>().context("PORT must be a valid port number")?,
                None => defaults.port,
            },
            rust_log: lookup("RUST_LOG").unwrap_or(defaults.rust_log),
            max_body_bytes: match lookup("MAX_BODY_BYTES") {
                Some(v) => v
                    .parse::<usize>()
                    .with_context(|| format!("MAX_BODY_BYTES must be a byte count, got '{v}'"))?,
                None => defaults.max_body_bytes,
            },
            service_name: lookup("SERVICE_NAME").unwrap_or(defaults.service_name),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn from_pairs(pairs: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = from_pairs(&[]).unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.rust_log, "info");
        assert_eq!(config.max_body_bytes, 1024 * 1024);
        assert_eq!(config.service_name, "resume-planner");
    }

    #[test]
    fn test_overrides_are_read() {
        let config = from_pairs(&[
            ("PORT", "9000"),
            ("RUST_LOG", "debug"),
            ("MAX_BODY_BYTES", "4096"),
            ("SERVICE_NAME", "planner-staging"),
        ])
        .unwrap();
        assert_eq!(config.port, 9000);
        assert_eq!(config.rust_log, "debug");
        assert_eq!(config.max_body_bytes, 4096);
        assert_eq!(config.service_name, "planner-staging");
    }

    #[test]
    fn test_invalid_port_fails() {
        let err = from_pairs(&[("PORT", "not-a-port")]).unwrap_err();
        assert!(err.to_string().contains("PORT"));
    }

    #[test]
    fn test_invalid_body_limit_fails() {
        let err = from_pairs(&[("MAX_BODY_BYTES", "-1")]).unwrap_err();
        assert!(err.to_string().contains("MAX_BODY_BYTES"));
    }
}
