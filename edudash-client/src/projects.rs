/// Project and team oversight endpoints
///
/// The console only observes project activity. [`ProjectOverview`] does
/// the whole job in one call: fan out across the three listings, shrug
/// off any endpoint that fails, and derive the status/type breakdowns the
/// view charts.
use crate::error::ApiResult;
use crate::http::{or_empty, ApiClient};
use edudash_core::models::project::{Project, ProjectTask, Team};
use edudash_core::stats::{category_counts, CategoryCount};

impl ApiClient {
    /// Lists every project on the platform
    pub async fn list_admin_projects(&self) -> ApiResult<Vec<Project>> {
        self.get_list("/admin/projects/").await
    }

    /// Lists every project task on the platform
    pub async fn list_admin_tasks(&self) -> ApiResult<Vec<ProjectTask>> {
        self.get_list("/admin/tasks/").await
    }

    /// Lists teams
    pub async fn list_teams(&self) -> ApiResult<Vec<Team>> {
        self.get_list("/projects/teams/").await
    }
}

/// Everything the project oversight view needs, fetched in one pass
#[derive(Debug, Clone, Default)]
pub struct ProjectOverview {
    /// All projects
    pub projects: Vec<Project>,

    /// All project tasks
    pub tasks: Vec<ProjectTask>,

    /// All teams
    pub teams: Vec<Team>,

    /// Projects grouped by lifecycle status
    pub by_status: Vec<CategoryCount>,

    /// Projects grouped by kind
    pub by_type: Vec<CategoryCount>,

    /// Tasks grouped by workflow status
    pub tasks_by_status: Vec<CategoryCount>,
}

impl ProjectOverview {
    /// Fetches the three listings concurrently and derives the breakdowns
    ///
    /// Each listing independently falls back to empty on failure, so a
    /// single broken endpoint degrades the view instead of erroring it.
    pub async fn fetch(client: &ApiClient) -> Self {
        let (projects, tasks, teams) = tokio::join!(
            client.list_admin_projects(),
            client.list_admin_tasks(),
            client.list_teams(),
        );

        let projects = or_empty(projects, "projects");
        let tasks = or_empty(tasks, "project tasks");
        let teams = or_empty(teams, "teams");

        let by_status = category_counts(&projects, |p| p.status.as_deref(), "Unknown");
        let by_type = category_counts(&projects, |p| p.project_type.as_deref(), "Unknown");
        let tasks_by_status = category_counts(&tasks, |t| t.status.as_deref(), "Unknown");

        ProjectOverview {
            projects,
            tasks,
            teams,
            by_status,
            by_type,
            tasks_by_status,
        }
    }
}
