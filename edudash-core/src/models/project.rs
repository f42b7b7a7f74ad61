/// Projects, teams, and tasks under admin oversight
///
/// The console only observes these: it fetches the admin-wide listings and
/// derives status/type breakdowns. All mutation happens through the regular
/// project UI, not here.
use super::user::UserRef;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A project record
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Project {
    /// Unique project ID
    #[serde(default)]
    pub id: Option<Uuid>,

    /// Project name
    #[serde(default)]
    pub name: String,

    /// URL slug
    #[serde(default)]
    pub slug: Option<String>,

    /// Lifecycle status ("planning", "in_progress", "completed", "on_hold")
    #[serde(default)]
    pub status: Option<String>,

    /// Kind of project ("web_app", "mobile_app", …)
    #[serde(default)]
    pub project_type: Option<String>,

    /// Owning user
    #[serde(default)]
    pub owner: Option<UserRef>,

    /// Owning team, when the project is team-managed
    #[serde(default)]
    pub team: Option<Uuid>,

    /// Number of members on the project
    #[serde(default)]
    pub member_count: u32,

    /// When the project was created
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// A team record
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Team {
    /// Unique team ID
    #[serde(default)]
    pub id: Option<Uuid>,

    /// Team name
    #[serde(default)]
    pub name: String,

    /// URL slug
    #[serde(default)]
    pub slug: Option<String>,

    /// Team leader
    #[serde(default)]
    pub leader: Option<UserRef>,

    /// Number of accepted members
    #[serde(default)]
    pub member_count: u32,

    /// Whether the team is active
    #[serde(default)]
    pub is_active: bool,

    /// When the team was created
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// A task within a project
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectTask {
    /// Unique task ID
    #[serde(default)]
    pub id: Option<Uuid>,

    /// Owning project
    #[serde(default)]
    pub project: Option<Uuid>,

    /// Task title
    #[serde(default)]
    pub title: String,

    /// Workflow status ("todo", "in_progress", "review", "done")
    #[serde(default)]
    pub status: Option<String>,

    /// Priority ("low", "medium", "high")
    #[serde(default)]
    pub priority: Option<String>,

    /// Assigned user, if any
    #[serde(default)]
    pub assigned_to: Option<UserRef>,

    /// When the task was created
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}
