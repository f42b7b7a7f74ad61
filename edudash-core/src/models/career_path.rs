/// Career paths: named curriculum groupings of modules
///
/// Paths are the top-level learning content the console administers. The
/// create/update payloads validate locally before they ever reach the API,
/// so obvious mistakes surface as a field error instead of a 400 round trip.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// A career path record
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CareerPath {
    /// Unique path ID
    #[serde(default)]
    pub id: Option<Uuid>,

    /// Human-readable name
    #[serde(default)]
    pub name: String,

    /// URL slug, derived server-side from the name
    #[serde(default)]
    pub slug: Option<String>,

    /// Long-form description
    #[serde(default)]
    pub description: String,

    /// Academic program the path belongs to (e.g. "bsit")
    #[serde(default)]
    pub program_type: Option<String>,

    /// Difficulty tier ("beginner", "intermediate", "advanced")
    #[serde(default)]
    pub difficulty_level: Option<String>,

    /// Estimated duration in weeks
    #[serde(default)]
    pub estimated_duration: u32,

    /// Number of modules currently attached
    #[serde(default)]
    pub total_modules: u32,

    /// Module cap for the path, 0 meaning unlimited
    #[serde(default)]
    pub max_modules: u32,

    /// Points awarded on completion
    #[serde(default)]
    pub points_reward: u32,

    /// Whether learners can enroll
    #[serde(default)]
    pub is_active: bool,

    /// Whether the path is promoted on the landing views
    #[serde(default)]
    pub is_featured: bool,

    /// When the path was created
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Payload for creating or updating a career path
///
/// The same shape serves both operations; updates send it via PATCH.
#[derive(Debug, Clone, Serialize, Validate)]
pub struct CareerPathForm {
    /// Path name
    #[validate(length(min = 1, max = 255, message = "Name is required"))]
    pub name: String,

    /// Description
    pub description: String,

    /// Program code
    pub program_type: String,

    /// Difficulty tier
    pub difficulty_level: String,

    /// Estimated duration in weeks (1-52)
    #[validate(range(min = 1, max = 52, message = "Duration must be 1-52 weeks"))]
    pub estimated_duration: u32,

    /// Module cap, 0 = unlimited
    pub max_modules: u32,

    /// Points awarded on completion
    pub points_reward: u32,

    /// Whether learners can enroll
    pub is_active: bool,

    /// Whether the path is promoted
    pub is_featured: bool,
}

impl Default for CareerPathForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            program_type: "bsit".to_string(),
            difficulty_level: "beginner".to_string(),
            estimated_duration: 4,
            max_modules: 0,
            points_reward: 100,
            is_active: true,
            is_featured: false,
        }
    }
}
