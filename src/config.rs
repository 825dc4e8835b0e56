use std::env;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;

use crate::search::google::DEFAULT_SEARCH_URL;

/// Default spacing between outbound requests during a plagiarism check.
pub const DEFAULT_REQUEST_INTERVAL_MS: u64 = 1000;

/// Central configuration loaded from environment variables.
///
/// All secrets come from env vars (never hardcoded). The .env file
/// is loaded automatically at startup via dotenvy.
#[derive(Debug, Clone)]
pub struct Config {
    /// Google Custom Search API key
    pub search_api_key: String,
    /// Google Programmable Search Engine ID
    pub search_cx: String,
    /// Custom Search endpoint (overridable for testing against a stub)
    pub search_url: String,
    /// SQLite keyword cache location
    pub db_path: String,
    /// Minimum spacing between searches and page fetches
    pub request_interval_ms: u64,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Only the search credentials lack defaults, and they're only
    /// required by commands that actually search.
    pub fn load() -> Result<Self> {
        let request_interval_ms = match env::var("WORDSMITH_REQUEST_INTERVAL_MS") {
            Ok(raw) => raw.trim().parse().map_err(|_| {
                anyhow::anyhow!(
                    "WORDSMITH_REQUEST_INTERVAL_MS must be a whole number of milliseconds, got {raw:?}"
                )
            })?,
            Err(_) => DEFAULT_REQUEST_INTERVAL_MS,
        };

        Ok(Self {
            search_api_key: env::var("GOOGLE_SEARCH_API_KEY").unwrap_or_default(),
            search_cx: env::var("GOOGLE_SEARCH_CX").unwrap_or_default(),
            search_url: env::var("WORDSMITH_SEARCH_URL")
                .unwrap_or_else(|_| DEFAULT_SEARCH_URL.to_string()),
            db_path: env::var("WORDSMITH_DB_PATH").unwrap_or_else(|_| default_db_path()),
            request_interval_ms,
        })
    }

    /// Check that the search credentials are configured.
    /// Call this before any operation that queries the search API.
    pub fn require_search(&self) -> Result<()> {
        if self.search_api_key.is_empty() {
            anyhow::bail!(
                "GOOGLE_SEARCH_API_KEY not set. Add it to your .env file.\n\
                 See .env.example for the required variables."
            );
        }
        if self.search_cx.is_empty() {
            anyhow::bail!(
                "GOOGLE_SEARCH_CX not set. Add your Programmable Search Engine ID to .env.\n\
                 See .env.example for the required variables."
            );
        }
        Ok(())
    }

    pub fn request_interval(&self) -> Duration {
        Duration::from_millis(self.request_interval_ms)
    }
}

/// Platform data directory (e.g. ~/.local/share/wordsmith/wordsmith.db),
/// or the working directory when there isn't one.
fn default_db_path() -> String {
    dirs::data_dir()
        .map(|dir| dir.join("wordsmith").join("wordsmith.db"))
        .unwrap_or_else(|| PathBuf::from("./wordsmith.db"))
        .to_string_lossy()
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> Config {
        Config {
            search_api_key: String::new(),
            search_cx: String::new(),
            search_url: DEFAULT_SEARCH_URL.to_string(),
            db_path: "./wordsmith.db".to_string(),
            request_interval_ms: DEFAULT_REQUEST_INTERVAL_MS,
        }
    }

    #[test]
    fn test_require_search_missing_key() {
        let err = config().require_search().unwrap_err();
        assert!(err.to_string().contains("GOOGLE_SEARCH_API_KEY"));
    }

    #[test]
    fn test_require_search_missing_cx() {
        let mut c = config();
        c.search_api_key = "key".to_string();
        let err = c.require_search().unwrap_err();
        assert!(err.to_string().contains("GOOGLE_SEARCH_CX"));
    }

    #[test]
    fn test_require_search_ok() {
        let mut c = config();
        c.search_api_key = "key".to_string();
        c.search_cx = "cx".to_string();
        assert!(c.require_search().is_ok());
    }

    #[test]
    fn test_request_interval() {
        assert_eq!(config().request_interval(), Duration::from_secs(1));
    }

    #[test]
    fn test_default_db_path_file_name() {
        assert!(default_db_path().ends_with("wordsmith.db"));
    }
}
