//! Runtime configuration loaded from environment variables.

/// Viewer configuration.
///
/// All fields have defaults pointing at the public API; override via
/// environment variables (a `.env` file is honored at startup).
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the remote API (default: the public instance).
    pub api_url: String,
    /// Per-request timeout in seconds (default: `30`).
    pub timeout_secs: u64,
}

impl Config {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                            |
    /// |------------------------|------------------------------------|
    /// | `RICKDEX_API_URL`      | `https://rickandmortyapi.com/api`  |
    /// | `RICKDEX_TIMEOUT_SECS` | `30`                               |
    pub fn from_env() -> Self {
        let api_url = std::env::var("RICKDEX_API_URL")
            .unwrap_or_else(|_| "https://rickandmortyapi.com/api".into());

        let timeout_secs: u64 = std::env::var("RICKDEX_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("RICKDEX_TIMEOUT_SECS must be a valid u64");

        Self {
            api_url,
            timeout_secs,
        }
    }
}
