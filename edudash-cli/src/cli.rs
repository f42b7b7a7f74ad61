/// Command-line definitions
///
/// One subcommand per admin view. Destructive operations all take a
/// `--yes` flag and refuse to run without it.
use clap::{Args, Parser, Subcommand};
use uuid::Uuid;

/// Admin console for the learning platform
#[derive(Debug, Parser)]
#[command(name = "edudash", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Headline counts and recent activity
    Overview,

    /// Server-side platform analytics
    Analytics,

    /// Community content with search, filter, and sort
    Community(CommunityArgs),

    /// User administration
    #[command(subcommand)]
    Users(UserCommand),

    /// Career path administration
    #[command(subcommand)]
    Paths(PathCommand),

    /// Learning module administration
    #[command(subcommand)]
    Modules(ModuleCommand),

    /// Quiz administration
    #[command(subcommand)]
    Quizzes(QuizCommand),

    /// Project and team oversight
    Projects,
}

#[derive(Debug, Args)]
pub struct CommunityArgs {
    /// Case-insensitive substring search over title, author, and content
    #[arg(long)]
    pub search: Option<String>,

    /// Only show posts of this type
    #[arg(long)]
    pub post_type: Option<String>,

    /// Sort posts by this column (title, author, like_count, created_at, …)
    #[arg(long)]
    pub sort: Option<String>,

    /// Sort ascending instead of the default descending
    #[arg(long)]
    pub asc: bool,

    /// Delete this post instead of listing
    #[arg(long)]
    pub delete: Option<Uuid>,

    /// Confirm the deletion
    #[arg(long)]
    pub yes: bool,
}

#[derive(Debug, Subcommand)]
pub enum UserCommand {
    /// List accounts
    List {
        /// Case-insensitive substring search over name and email
        #[arg(long)]
        search: Option<String>,

        /// Only show accounts with this role
        #[arg(long)]
        role: Option<String>,
    },

    /// Toggle an account between active and deactivated
    Toggle {
        /// Account ID
        id: Uuid,
    },

    /// Reassign an account's role
    SetRole {
        /// Account ID
        id: Uuid,

        /// New role (admin, instructor, student)
        role: String,
    },

    /// Permanently delete an account
    Delete {
        /// Account ID
        id: Uuid,

        /// Confirm the deletion
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Debug, Subcommand)]
pub enum PathCommand {
    /// List career paths
    List,

    /// Create a career path
    Create(PathForm),

    /// Update a career path
    Update {
        /// Path ID
        id: Uuid,

        #[command(flatten)]
        form: PathForm,
    },

    /// Delete a career path
    Delete {
        /// Path ID
        id: Uuid,

        /// Confirm the deletion
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Debug, Args)]
pub struct PathForm {
    /// Path name
    #[arg(long)]
    pub name: String,

    /// Description
    #[arg(long, default_value = "")]
    pub description: String,

    /// Program code
    #[arg(long, default_value = "bsit")]
    pub program_type: String,

    /// Difficulty tier
    #[arg(long, default_value = "beginner")]
    pub difficulty_level: String,

    /// Estimated duration in weeks
    #[arg(long, default_value_t = 4)]
    pub weeks: u32,

    /// Points awarded on completion
    #[arg(long, default_value_t = 100)]
    pub points: u32,

    /// Promote the path on landing views
    #[arg(long)]
    pub featured: bool,
}

#[derive(Debug, Subcommand)]
pub enum ModuleCommand {
    /// List learning modules
    List,

    /// Show one module with its full content
    Show {
        /// Module ID
        id: Uuid,
    },

    /// Create a module, optionally from an uploaded file
    Create {
        /// Owning career path ID
        #[arg(long)]
        path: Uuid,

        /// Module title
        #[arg(long)]
        title: String,

        /// Description
        #[arg(long, default_value = "")]
        description: String,

        /// Content kind
        #[arg(long, default_value = "text")]
        module_type: String,

        /// File to attach
        #[arg(long)]
        file: Option<std::path::PathBuf>,

        /// Ask the backend to generate content from the file
        #[arg(long)]
        auto_generate: bool,

        /// Ask the backend to split generated content into slides
        #[arg(long)]
        create_slides: bool,
    },

    /// Delete a module
    Delete {
        /// Module ID
        id: Uuid,

        /// Confirm the deletion
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Debug, Subcommand)]
pub enum QuizCommand {
    /// List quizzes
    List,

    /// Show a quiz's questions decoded from its content
    Show {
        /// Quiz ID
        id: Uuid,
    },

    /// Delete a quiz
    Delete {
        /// Quiz ID
        id: Uuid,

        /// Confirm the deletion
        #[arg(long)]
        yes: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_community_flags_parse() {
        let cli = Cli::parse_from([
            "edudash",
            "community",
            "--search",
            "rust",
            "--post-type",
            "question",
            "--sort",
            "like_count",
            "--asc",
        ]);
        match cli.command {
            Command::Community(args) => {
                assert_eq!(args.search.as_deref(), Some("rust"));
                assert_eq!(args.post_type.as_deref(), Some("question"));
                assert!(args.asc);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }
}
