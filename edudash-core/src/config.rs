/// Configuration management for the admin console
///
/// This module loads configuration from environment variables and provides
/// a type-safe configuration struct.
///
/// # Environment Variables
///
/// - `EDUDASH_API_URL`: Base URL of the platform REST API (required)
/// - `EDUDASH_TOKEN`: Bearer token for authenticated requests
/// - `EDUDASH_TIMEOUT_SECS`: Request timeout in seconds (default: 30)
/// - `EDUDASH_UPLOAD_TIMEOUT_SECS`: Timeout for uploads that trigger
///   server-side content generation (default: 120)
/// - `RUST_LOG`: Log level (default: info)
///
/// # Example
///
/// ```no_run
/// use edudash_core::config::Config;
///
/// # fn example() -> anyhow::Result<()> {
/// let config = Config::from_env()?;
/// println!("Talking to {}", config.base_url);
/// # Ok(())
/// # }
/// ```
use serde::{Deserialize, Serialize};
use std::env;

/// Admin console configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the REST API, without a trailing slash
    pub base_url: String,

    /// Bearer token attached to authenticated requests
    ///
    /// Tokens are never persisted by the console; they come from the
    /// environment on every run.
    pub token: Option<String>,

    /// Per-request timeout in seconds
    pub timeout_secs: u64,

    /// Timeout for multipart uploads that trigger server-side processing
    ///
    /// Module file uploads can kick off content generation on the backend,
    /// which takes far longer than a normal request.
    pub upload_timeout_secs: u64,
}

impl Config {
    /// Loads configuration from environment variables
    ///
    /// Reads a `.env` file first if one is present.
    ///
    /// # Errors
    ///
    /// Returns an error if `EDUDASH_API_URL` is missing or a numeric
    /// variable fails to parse.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let base_url = env::var("EDUDASH_API_URL")
            .map_err(|_| anyhow::anyhow!("EDUDASH_API_URL environment variable is required"))?;
        let base_url = base_url.trim_end_matches('/').to_string();
        if base_url.is_empty() {
            anyhow::bail!("EDUDASH_API_URL must not be empty");
        }

        let token = env::var("EDUDASH_TOKEN").ok().filter(|t| !t.is_empty());

        let timeout_secs = env::var("EDUDASH_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".to_string())
            .parse::<u64>()?;

        let upload_timeout_secs = env::var("EDUDASH_UPLOAD_TIMEOUT_SECS")
            .unwrap_or_else(|_| "120".to_string())
            .parse::<u64>()?;

        Ok(Self {
            base_url,
            token,
            timeout_secs,
            upload_timeout_secs,
        })
    }
}
