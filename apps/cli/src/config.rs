use std::path::PathBuf;
use std::time::Duration;

use capmap_market_data::provider::yahoo::DEFAULT_USER_AGENT;

/// Runtime settings read from the environment (and `.env`).
#[derive(Debug, Clone)]
pub struct Config {
    pub log_format: String,
    pub request_timeout: Duration,
    pub map_out: Option<PathBuf>,
    pub user_agent: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let log_format = lookup("CM_LOG_FORMAT").unwrap_or_else(|| "text".into());
        let timeout_ms: u64 = lookup("CM_REQUEST_TIMEOUT_MS")
            .and_then(|v| v.trim().parse().ok())
            .unwrap_or(10_000);
        let map_out = lookup("CM_MAP_OUT")
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);
        let user_agent = lookup("CM_USER_AGENT").unwrap_or_else(|| DEFAULT_USER_AGENT.into());
        Self {
            log_format,
            request_timeout: Duration::from_millis(timeout_ms),
            map_out,
            user_agent,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]);
        assert_eq!(config.log_format, "text");
        assert_eq!(config.request_timeout, Duration::from_secs(10));
        assert!(config.map_out.is_none());
        assert_eq!(config.user_agent, DEFAULT_USER_AGENT);
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("CM_LOG_FORMAT", "json"),
            ("CM_REQUEST_TIMEOUT_MS", "2500"),
            ("CM_MAP_OUT", "out/map.json"),
            ("CM_USER_AGENT", "capmap-test"),
        ]);
        assert_eq!(config.log_format, "json");
        assert_eq!(config.request_timeout, Duration::from_millis(2500));
        assert_eq!(config.map_out, Some(PathBuf::from("out/map.json")));
        assert_eq!(config.user_agent, "capmap-test");
    }

    #[test]
    fn test_invalid_timeout_falls_back() {
        let config = config_from(&[("CM_REQUEST_TIMEOUT_MS", "soon"), ("CM_MAP_OUT", "  ")]);
        assert_eq!(config.request_timeout, Duration::from_millis(10_000));
        assert!(config.map_out.is_none());
    }
}
