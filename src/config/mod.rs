/// Application configuration module
use std::env;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub bind_addr: String,
    /// Per-source entry cap applied when a search request omits `limit`.
    pub default_limit: i64,
    /// When false, per-source response-time sleeps are skipped.
    pub simulate_latency: bool,
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let default_limit = env_i64("SEARCH_DEFAULT_LIMIT", 10);
        let simulate_latency = env_bool("SIMULATE_LATENCY", true);

        Ok(Self {
            bind_addr,
            default_limit,
            simulate_latency,
        })
    }
}

fn env_i64(key: &str, default: i64) -> i64 {
    env::var(key)
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}

fn env_bool(key: &str, default: bool) -> bool {
    env::var(key)
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_i64_default() {
        assert_eq!(env_i64("BIODB_TEST_NO_SUCH_VAR", 10), 10);
    }

    #[test]
    fn test_env_bool_parses() {
        env::set_var("BIODB_TEST_BOOL", "false");
        assert!(!env_bool("BIODB_TEST_BOOL", true));
        env::remove_var("BIODB_TEST_BOOL");
        assert!(env_bool("BIODB_TEST_BOOL", true));
    }
}
