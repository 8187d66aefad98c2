//! Client configuration.
//!
//! The base URL is resolved once, in order: an explicit value, the
//! `STUDY_PLANNER_API_URL` environment variable, then `DEFAULT_BASE_URL`.
//! Empty values count as unset.

/// Environment variable consulted for the API base URL.
pub const API_URL_ENV: &str = "STUDY_PLANNER_API_URL";

/// Base URL used when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl ClientConfig {
    /// Resolve from the process environment, letting `explicit` win.
    pub fn from_env(explicit: Option<String>) -> Self {
        Self::resolve(explicit, |key| std::env::var(key).ok())
    }

    /// Resolve using `lookup` in place of the process environment.
    pub fn resolve(explicit: Option<String>, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let base_url = explicit
            .filter(|url| !url.trim().is_empty())
            .or_else(|| lookup(API_URL_ENV).filter(|url| !url.trim().is_empty()))
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        Self { base_url }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn falls_back_to_default() {
        let config = ClientConfig::resolve(None, |_| None);
        assert_eq!(config, ClientConfig::default());
        assert_eq!(config.base_url, "http://localhost:8000");
    }

    #[test]
    fn env_overrides_default() {
        let config = ClientConfig::resolve(None, |key| {
            (key == API_URL_ENV).then(|| "http://api.example:9000".to_string())
        });
        assert_eq!(config.base_url, "http://api.example:9000");
    }

    #[test]
    fn explicit_value_wins() {
        let config = ClientConfig::resolve(Some("http://cli:1".into()), |_| Some("http://env:2".into()));
        assert_eq!(config.base_url, "http://cli:1");
    }

    #[test]
    fn empty_values_count_as_unset() {
        let config = ClientConfig::resolve(Some(String::new()), |_| Some("  ".into()));
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }
}
