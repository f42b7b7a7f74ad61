/// Platform analytics endpoint and the dashboard snapshot
///
/// `/admin/analytics/` is the one endpoint that aggregates server-side;
/// everything in [`PlatformAnalytics`] mirrors its payload. Deserialization
/// is lenient throughout so a backend that omits a section (or adds one)
/// never breaks the dashboard.
use crate::error::ApiResult;
use crate::http::{or_empty, ApiClient};
use edudash_core::models::career_path::CareerPath;
use edudash_core::models::community::Post;
use edudash_core::models::module::LearningModule;
use serde::{Deserialize, Serialize};

/// One row of a server-side breakdown table
///
/// The backend labels the grouping key differently per table (`role`,
/// `program`, `year_level`, …); the aliases fold them into one shape.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CountRow {
    /// Grouping key value
    #[serde(
        default,
        alias = "role",
        alias = "program",
        alias = "year_level",
        alias = "module_type",
        alias = "post_type",
        alias = "status",
        alias = "month",
        alias = "date"
    )]
    pub label: Option<String>,

    /// Records in the group
    #[serde(default)]
    pub count: u64,
}

/// Headline totals across the platform
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalyticsSummary {
    /// Registered accounts
    #[serde(default)]
    pub total_users: u64,

    /// Accounts active in the reporting window
    #[serde(default)]
    pub active_users: u64,

    /// Career paths
    #[serde(default)]
    pub total_career_paths: u64,

    /// Learning modules
    #[serde(default)]
    pub total_modules: u64,

    /// Quizzes
    #[serde(default)]
    pub total_quizzes: u64,

    /// Projects
    #[serde(default)]
    pub total_projects: u64,

    /// Community posts
    #[serde(default)]
    pub total_posts: u64,
}

/// User population breakdowns
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserAnalytics {
    /// Accounts by role
    #[serde(default)]
    pub by_role: Vec<CountRow>,

    /// Accounts by academic program
    #[serde(default)]
    pub by_program: Vec<CountRow>,

    /// Accounts by year level
    #[serde(default)]
    pub by_year: Vec<CountRow>,

    /// New registrations per period
    #[serde(default)]
    pub registration_trend: Vec<CountRow>,
}

/// Learning content statistics
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LearningAnalytics {
    /// Enrollments across all paths
    #[serde(default)]
    pub total_enrollments: u64,

    /// Completed-module share as a percentage
    #[serde(default)]
    pub completion_rate: f64,

    /// Modules by content kind
    #[serde(default)]
    pub modules_by_type: Vec<CountRow>,
}

/// Project activity statistics
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectAnalytics {
    /// Projects not yet completed
    #[serde(default)]
    pub active_projects: u64,

    /// Teams on the platform
    #[serde(default)]
    pub total_teams: u64,

    /// Projects by lifecycle status
    #[serde(default)]
    pub by_status: Vec<CountRow>,
}

/// Community activity statistics
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CommunityAnalytics {
    /// Comments across all posts
    #[serde(default)]
    pub total_comments: u64,

    /// Likes across all posts
    #[serde(default)]
    pub total_likes: u64,

    /// Organizations currently active
    #[serde(default)]
    pub active_organizations: u64,

    /// Posts by type
    #[serde(default)]
    pub posts_by_type: Vec<CountRow>,
}

/// Typed mirror of the `/admin/analytics/` payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlatformAnalytics {
    /// Headline totals
    #[serde(default)]
    pub summary: AnalyticsSummary,

    /// User breakdowns
    #[serde(default)]
    pub users: UserAnalytics,

    /// Learning statistics
    #[serde(default)]
    pub learning: LearningAnalytics,

    /// Project statistics
    #[serde(default)]
    pub projects: ProjectAnalytics,

    /// Community statistics
    #[serde(default)]
    pub community: CommunityAnalytics,
}

impl ApiClient {
    /// Fetches the server-side analytics aggregate
    pub async fn get_analytics(&self) -> ApiResult<PlatformAnalytics> {
        self.get_json("/admin/analytics/").await
    }
}

/// Headline counts shown at the top of the dashboard
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Headline {
    /// Registered accounts
    pub users: u64,

    /// Career paths
    pub career_paths: u64,

    /// Learning modules
    pub modules: u64,

    /// Community posts
    pub posts: u64,
}

/// Everything the dashboard landing view needs, fetched in one pass
#[derive(Debug, Clone, Default)]
pub struct DashboardSnapshot {
    /// Server-side analytics; defaults when the endpoint fails
    pub analytics: PlatformAnalytics,

    /// Career paths
    pub career_paths: Vec<CareerPath>,

    /// Learning modules
    pub modules: Vec<LearningModule>,

    /// Recent community posts
    pub posts: Vec<Post>,
}

impl DashboardSnapshot {
    /// Fetches the dashboard's four sources concurrently
    ///
    /// The analytics endpoint falls back to zeroed defaults and the three
    /// listings fall back to empty, so the dashboard always renders.
    pub async fn fetch(client: &ApiClient) -> Self {
        let (analytics, career_paths, modules, posts) = tokio::join!(
            client.get_analytics(),
            client.list_career_paths(),
            client.list_modules(),
            client.list_posts(),
        );

        let analytics = analytics.unwrap_or_else(|err| {
            tracing::warn!("analytics fetch failed, continuing without it: {}", err);
            PlatformAnalytics::default()
        });

        DashboardSnapshot {
            analytics,
            career_paths: or_empty(career_paths, "career paths"),
            modules: or_empty(modules, "modules"),
            posts: or_empty(posts, "posts"),
        }
    }

    /// Headline counts, preferring the server aggregate over list lengths
    ///
    /// When the analytics endpoint failed, the fetched listings still give
    /// usable counts.
    pub fn headline(&self) -> Headline {
        let summary = &self.analytics.summary;
        Headline {
            users: summary.total_users,
            career_paths: if summary.total_career_paths > 0 {
                summary.total_career_paths
            } else {
                self.career_paths.len() as u64
            },
            modules: if summary.total_modules > 0 {
                summary.total_modules
            } else {
                self.modules.len() as u64
            },
            posts: if summary.total_posts > 0 {
                summary.total_posts
            } else {
                self.posts.len() as u64
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lenient_analytics_payload() {
        // A partial payload still deserializes, missing sections default
        let analytics: PlatformAnalytics = serde_json::from_str(
            r#"{"summary": {"total_users": 42}, "users": {"by_role": [{"role": "student", "count": 40}]}}"#,
        )
        .unwrap();
        assert_eq!(analytics.summary.total_users, 42);
        assert_eq!(analytics.users.by_role[0].label.as_deref(), Some("student"));
        assert_eq!(analytics.users.by_role[0].count, 40);
        assert!(analytics.community.posts_by_type.is_empty());
    }

    #[test]
    fn test_headline_falls_back_to_list_lengths() {
        let snapshot = DashboardSnapshot {
            career_paths: vec![CareerPath::default(); 3],
            posts: vec![Post::default(); 2],
            ..Default::default()
        };
        let headline = snapshot.headline();
        assert_eq!(headline.career_paths, 3);
        assert_eq!(headline.posts, 2);
        assert_eq!(headline.users, 0);
    }
}
