/// HTTP client for the platform's admin API
///
/// This crate wraps every backend endpoint the admin console touches:
/// user administration, learning content, project oversight, community
/// moderation, and the analytics aggregate. [`ApiClient`] is the entry
/// point; the per-area operations hang off it as methods, and the
/// `*Overview`/`*Snapshot` types bundle the concurrent fetches the
/// dashboard views need.
///
/// # Example
///
/// ```no_run
/// use edudash_client::{ApiClient, DashboardSnapshot};
/// use edudash_core::config::Config;
///
/// # async fn example() -> anyhow::Result<()> {
/// let config = Config::from_env()?;
/// let client = ApiClient::from_config(&config)?;
///
/// let snapshot = DashboardSnapshot::fetch(&client).await;
/// println!("{} users", snapshot.headline().users);
/// # Ok(())
/// # }
/// ```
pub mod analytics;
pub mod community;
pub mod error;
pub mod http;
pub mod learning;
pub mod projects;
pub mod users;

pub use analytics::{DashboardSnapshot, Headline, PlatformAnalytics};
pub use community::{CommunityOverview, ContentStats};
pub use error::{ApiError, ApiResult};
pub use http::ApiClient;
pub use projects::ProjectOverview;
