/// Command implementations
///
/// Each function drives one admin view: fetch through the client, shape
/// with the core aggregations, print through the render helpers. Errors
/// bubble up as `anyhow` so `main` reports them once with context.
use crate::cli::{
    CommunityArgs, ModuleCommand, PathCommand, PathForm, QuizCommand, UserCommand,
};
use crate::render::{author_list, count_table, trend_table};
use anyhow::{bail, Context};
use chrono::Utc;
use edudash_client::analytics::CountRow;
use edudash_client::{ApiClient, CommunityOverview, DashboardSnapshot, ProjectOverview};
use edudash_core::models::career_path::CareerPathForm;
use edudash_core::models::module::{ModuleForm, ModuleUpload};
use edudash_core::models::user::UserRole;
use edudash_core::quiz_content;
use edudash_core::stats::{format_label, CategoryCount};
use edudash_core::tableview::{SortDirection, TableQuery};
use uuid::Uuid;
use validator::Validate;

/// Validates a form payload locally, surfacing the first field error
///
/// Mirrors how the backend reports validation failures, so a bad flag
/// value reads the same whether it was caught here or by the server.
fn check_form<T: Validate>(form: &T) -> anyhow::Result<()> {
    form.validate().map_err(|errors| {
        let first = errors
            .field_errors()
            .into_iter()
            .next()
            .and_then(|(field, errs)| errs.first().map(|e| (field, e.message.clone())));
        match first {
            Some((field, Some(message))) => anyhow::anyhow!("{}: {}", field, message),
            Some((field, None)) => anyhow::anyhow!("{} is invalid", field),
            None => anyhow::anyhow!("form is invalid"),
        }
    })
}

/// Folds a server-side breakdown into the shape the render helpers take
fn breakdown(rows: &[CountRow]) -> Vec<CategoryCount> {
    rows.iter()
        .map(|row| CategoryCount {
            label: row.label.clone().unwrap_or_default(),
            count: row.count,
        })
        .collect()
}

fn require_yes(yes: bool, what: &str) -> anyhow::Result<()> {
    if yes {
        Ok(())
    } else {
        bail!("refusing to delete {} without --yes", what)
    }
}

pub async fn overview(client: &ApiClient) -> anyhow::Result<()> {
    let snapshot = DashboardSnapshot::fetch(client).await;
    let headline = snapshot.headline();

    println!("Platform overview");
    println!("  Users:        {}", headline.users);
    println!("  Career paths: {}", headline.career_paths);
    println!("  Modules:      {}", headline.modules);
    println!("  Posts:        {}", headline.posts);
    println!();
    print!(
        "{}",
        count_table("Users by role", &breakdown(&snapshot.analytics.users.by_role))
    );
    Ok(())
}

pub async fn analytics(client: &ApiClient) -> anyhow::Result<()> {
    let analytics = client
        .get_analytics()
        .await
        .context("fetching platform analytics")?;

    let summary = &analytics.summary;
    println!("Platform analytics");
    println!(
        "  {} users ({} active), {} career paths, {} modules, {} quizzes",
        summary.total_users,
        summary.active_users,
        summary.total_career_paths,
        summary.total_modules,
        summary.total_quizzes
    );
    println!(
        "  {} projects, {} posts",
        summary.total_projects, summary.total_posts
    );
    println!();
    print!("{}", count_table("Users by role", &breakdown(&analytics.users.by_role)));
    print!(
        "{}",
        count_table("Users by program", &breakdown(&analytics.users.by_program))
    );
    print!(
        "{}",
        count_table("Users by year level", &breakdown(&analytics.users.by_year))
    );
    print!(
        "{}",
        count_table(
            "Registrations per period",
            &breakdown(&analytics.users.registration_trend)
        )
    );
    print!(
        "{}",
        count_table(
            "Modules by type",
            &breakdown(&analytics.learning.modules_by_type)
        )
    );
    print!(
        "{}",
        count_table(
            "Projects by status",
            &breakdown(&analytics.projects.by_status)
        )
    );
    print!(
        "{}",
        count_table(
            "Posts by type",
            &breakdown(&analytics.community.posts_by_type)
        )
    );
    println!(
        "Learning: {} enrollments, {:.1}% completion",
        analytics.learning.total_enrollments, analytics.learning.completion_rate
    );
    Ok(())
}

pub async fn community(client: &ApiClient, args: CommunityArgs) -> anyhow::Result<()> {
    if let Some(id) = args.delete {
        require_yes(args.yes, "post")?;
        client.delete_post(id).await.context("deleting post")?;
        println!("Post {} deleted", id);
        return Ok(());
    }

    let overview = CommunityOverview::fetch(client, Utc::now().date_naive()).await;

    let engagement = &overview.stats.engagement;
    println!("Community moderation");
    println!(
        "  {} posts, {} comments, {} likes, {} views",
        engagement.total_posts,
        engagement.total_comments,
        engagement.total_likes,
        engagement.total_views
    );
    println!(
        "  avg {:.1} likes and {:.1} comments per post",
        engagement.avg_likes_per_post, engagement.avg_comments_per_post
    );
    println!();
    print!("{}", count_table("Posts by type", &overview.stats.posts_by_type));
    print!("{}", trend_table(&overview.stats.trend));
    print!("{}", author_list(&overview.stats.top_authors));

    let mut query = TableQuery::default();
    if let Some(search) = args.search {
        query.search = search;
    }
    if let Some(post_type) = args.post_type.as_deref() {
        query.set_filter("post_type", Some(post_type));
    }
    if let Some(sort) = args.sort.as_deref() {
        query.toggle_sort(sort);
        if args.asc {
            query.direction = SortDirection::Ascending;
        }
    }

    let posts = query.apply(&overview.posts);
    println!();
    println!("{} matching posts", posts.len());
    for post in &posts {
        println!(
            "  {}  [{}] {} by {} ({} likes, {} comments)",
            post.id.map(|id| id.to_string()).unwrap_or_default(),
            format_label(post.post_type.as_deref()),
            post.title,
            post.author_name().unwrap_or("Unknown"),
            post.like_count,
            post.comment_count
        );
    }
    Ok(())
}

pub async fn users(client: &ApiClient, command: UserCommand) -> anyhow::Result<()> {
    match command {
        UserCommand::List { search, role } => {
            let users = client.list_users().await.context("listing users")?;

            let mut query = TableQuery::default();
            if let Some(search) = search {
                query.search = search;
            }
            if let Some(role) = role.as_deref() {
                query.set_filter("role", Some(role));
            }

            let view = query.apply(&users);
            println!("{} accounts", view.len());
            for user in &view {
                println!(
                    "  {}  {:<12} {:<20} {} {}",
                    user.id.map(|id| id.to_string()).unwrap_or_default(),
                    format_label(Some(user.role.as_str())),
                    user.username,
                    user.email,
                    if user.is_active { "" } else { "(deactivated)" }
                );
            }
        }
        UserCommand::Toggle { id } => {
            let response = client
                .toggle_user_status(id)
                .await
                .context("toggling user status")?;
            println!(
                "{}",
                response
                    .message
                    .unwrap_or_else(|| format!("User {} updated", response.user.username))
            );
        }
        UserCommand::SetRole { id, role } => {
            let role = UserRole::parse(&role)
                .with_context(|| format!("unknown role '{}'", role))?;
            let response = client
                .change_user_role(id, role)
                .await
                .context("changing user role")?;
            println!(
                "{}",
                response
                    .message
                    .unwrap_or_else(|| format!("Role changed to {}", role))
            );
        }
        UserCommand::Delete { id, yes } => {
            require_yes(yes, "user")?;
            client.delete_user(id).await.context("deleting user")?;
            println!("User {} deleted", id);
        }
    }
    Ok(())
}

fn career_path_form(form: PathForm) -> CareerPathForm {
    CareerPathForm {
        name: form.name,
        description: form.description,
        program_type: form.program_type,
        difficulty_level: form.difficulty_level,
        estimated_duration: form.weeks,
        points_reward: form.points,
        is_featured: form.featured,
        ..Default::default()
    }
}

pub async fn paths(client: &ApiClient, command: PathCommand) -> anyhow::Result<()> {
    match command {
        PathCommand::List => {
            let paths = client
                .list_career_paths()
                .await
                .context("listing career paths")?;
            println!("{} career paths", paths.len());
            for path in &paths {
                println!(
                    "  {}  {} ({}, {} modules, {})",
                    path.id.map(|id| id.to_string()).unwrap_or_default(),
                    path.name,
                    format_label(path.difficulty_level.as_deref()),
                    path.total_modules,
                    if path.is_active { "active" } else { "inactive" }
                );
            }
        }
        PathCommand::Create(form) => {
            let form = career_path_form(form);
            check_form(&form)?;
            let created = client
                .create_career_path(&form)
                .await
                .context("creating career path")?;
            println!("Created career path {}", created.name);
        }
        PathCommand::Update { id, form } => {
            let form = career_path_form(form);
            check_form(&form)?;
            let updated = client
                .update_career_path(id, &form)
                .await
                .context("updating career path")?;
            println!("Updated career path {}", updated.name);
        }
        PathCommand::Delete { id, yes } => {
            require_yes(yes, "career path")?;
            client
                .delete_career_path(id)
                .await
                .context("deleting career path")?;
            println!("Career path {} deleted", id);
        }
    }
    Ok(())
}

pub async fn modules(client: &ApiClient, command: ModuleCommand) -> anyhow::Result<()> {
    match command {
        ModuleCommand::List => {
            let modules = client.list_modules().await.context("listing modules")?;
            println!("{} modules", modules.len());
            for module in &modules {
                println!(
                    "  {}  #{} {} ({}, {} min)",
                    module.id.map(|id| id.to_string()).unwrap_or_default(),
                    module.order,
                    module.title,
                    format_label(module.module_type.as_deref()),
                    module.duration_minutes
                );
            }
        }
        ModuleCommand::Show { id } => {
            let module = client.get_module(id).await.context("fetching module")?;
            println!("{}", module.title);
            println!("{}", module.description);
            if let Some(content) = &module.content {
                println!();
                println!("{}", content);
            }
        }
        ModuleCommand::Create {
            path,
            title,
            description,
            module_type,
            file,
            auto_generate,
            create_slides,
        } => {
            let mut form = ModuleForm::new(path);
            form.title = title;
            form.description = description;
            form.module_type = module_type;
            check_form(&form)?;

            let created = match file {
                Some(file_path) => {
                    let bytes = std::fs::read(&file_path)
                        .with_context(|| format!("reading {}", file_path.display()))?;
                    let file_name = file_path
                        .file_name()
                        .map(|name| name.to_string_lossy().to_string())
                        .unwrap_or_else(|| "upload".to_string());
                    let upload = ModuleUpload {
                        file_name,
                        bytes,
                        auto_generate_content: auto_generate,
                        create_slides,
                    };
                    client
                        .create_module_with_upload(&form, &upload)
                        .await
                        .context("uploading module")?
                }
                None => client.create_module(&form).await.context("creating module")?,
            };
            println!("Created module {}", created.title);
        }
        ModuleCommand::Delete { id, yes } => {
            require_yes(yes, "module")?;
            client.delete_module(id).await.context("deleting module")?;
            println!("Module {} deleted", id);
        }
    }
    Ok(())
}

pub async fn quizzes(client: &ApiClient, command: QuizCommand) -> anyhow::Result<()> {
    match command {
        QuizCommand::List => {
            let quizzes = client.list_quizzes().await.context("listing quizzes")?;
            println!("{} quizzes", quizzes.len());
            for quiz in &quizzes {
                let questions = quiz_content::parse(&quiz.content);
                println!(
                    "  {}  {} ({} questions, pass at {}%)",
                    quiz.id.map(|id| id.to_string()).unwrap_or_default(),
                    quiz.title,
                    questions.len(),
                    quiz.passing_score
                );
            }
        }
        QuizCommand::Show { id } => {
            let quizzes = client.list_quizzes().await.context("listing quizzes")?;
            let quiz = quizzes
                .into_iter()
                .find(|q| q.id == Some(id))
                .with_context(|| format!("no quiz with id {}", id))?;

            println!("{}", quiz.title);
            for (index, question) in quiz_content::parse(&quiz.content).iter().enumerate() {
                println!(
                    "  {}. [{}] {} ({} pts)",
                    index + 1,
                    question.kind.label(),
                    question.title,
                    question.points
                );
                for choice in &question.choices {
                    println!(
                        "     {}{} {}",
                        choice.id,
                        if choice.correct { "*" } else { "." },
                        choice.text
                    );
                }
            }
        }
        QuizCommand::Delete { id, yes } => {
            require_yes(yes, "quiz")?;
            client.delete_quiz(id).await.context("deleting quiz")?;
            println!("Quiz {} deleted", id);
        }
    }
    Ok(())
}

pub async fn projects(client: &ApiClient) -> anyhow::Result<()> {
    let overview = ProjectOverview::fetch(client).await;

    println!("Project oversight");
    println!(
        "  {} projects, {} tasks, {} teams",
        overview.projects.len(),
        overview.tasks.len(),
        overview.teams.len()
    );
    println!();
    print!("{}", count_table("Projects by status", &overview.by_status));
    print!("{}", count_table("Projects by type", &overview.by_type));
    print!("{}", count_table("Tasks by status", &overview.tasks_by_status));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_form_surfaces_first_field_error() {
        let form = CareerPathForm {
            name: String::new(),
            ..Default::default()
        };
        let err = check_form(&form).unwrap_err();
        assert!(err.to_string().contains("name"));

        let out_of_range = CareerPathForm {
            name: "Web Development".to_string(),
            estimated_duration: 100,
            ..Default::default()
        };
        let err = check_form(&out_of_range).unwrap_err();
        assert!(err.to_string().contains("estimated_duration"));
    }

    #[test]
    fn test_check_form_passes_valid_payload() {
        let form = CareerPathForm {
            name: "Web Development".to_string(),
            ..Default::default()
        };
        assert!(check_form(&form).is_ok());

        let mut module = ModuleForm::new(Uuid::new_v4());
        module.title = "Intro".to_string();
        assert!(check_form(&module).is_ok());
    }
}
