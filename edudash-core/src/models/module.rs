/// Learning modules: content units within a career path
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// A learning module record
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LearningModule {
    /// Unique module ID
    #[serde(default)]
    pub id: Option<Uuid>,

    /// Owning career path
    #[serde(default)]
    pub career_path: Option<Uuid>,

    /// Module title
    #[serde(default)]
    pub title: String,

    /// Short description
    #[serde(default)]
    pub description: String,

    /// Content kind ("text", "video", "interactive", …)
    #[serde(default)]
    pub module_type: Option<String>,

    /// Difficulty tier
    #[serde(default)]
    pub difficulty_level: Option<String>,

    /// Text content or video URL; omitted from list payloads
    #[serde(default)]
    pub content: Option<String>,

    /// Expected duration in minutes
    #[serde(default)]
    pub duration_minutes: u32,

    /// Points awarded on completion
    #[serde(default)]
    pub points_reward: u32,

    /// Position within the career path
    #[serde(default)]
    pub order: u32,

    /// Whether the module is gated behind prerequisites
    #[serde(default)]
    pub is_locked: bool,

    /// When the module was created
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Payload for creating or updating a learning module
#[derive(Debug, Clone, Serialize, Validate)]
pub struct ModuleForm {
    /// Owning career path
    pub career_path: Uuid,

    /// Module title
    #[validate(length(min = 1, max = 255, message = "Title is required"))]
    pub title: String,

    /// Short description
    pub description: String,

    /// Content kind
    pub module_type: String,

    /// Difficulty tier
    pub difficulty_level: String,

    /// Text content or video URL
    pub content: String,

    /// Expected duration in minutes
    #[validate(range(min = 1, message = "Duration must be at least a minute"))]
    pub duration_minutes: u32,

    /// Points awarded on completion
    pub points_reward: u32,

    /// Position within the career path
    pub order: u32,

    /// Whether the module is gated
    pub is_locked: bool,
}

impl ModuleForm {
    /// A blank form targeting the given career path, with the defaults the
    /// console pre-fills
    pub fn new(career_path: Uuid) -> Self {
        Self {
            career_path,
            title: String::new(),
            description: String::new(),
            module_type: "text".to_string(),
            difficulty_level: "beginner".to_string(),
            content: String::new(),
            duration_minutes: 30,
            points_reward: 10,
            order: 0,
            is_locked: false,
        }
    }
}

/// A file attached to a module create/update
///
/// Uploads can ask the backend to generate slide content from the file,
/// which is why they run under the extended timeout.
#[derive(Debug, Clone)]
pub struct ModuleUpload {
    /// Filename reported in the multipart part
    pub file_name: String,

    /// Raw file bytes
    pub bytes: Vec<u8>,

    /// Ask the backend to generate module content from the file
    pub auto_generate_content: bool,

    /// Ask the backend to split generated content into slides
    pub create_slides: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_module_form_defaults() {
        let form = ModuleForm::new(Uuid::new_v4());
        assert_eq!(form.module_type, "text");
        assert_eq!(form.duration_minutes, 30);
        assert!(form.validate().is_err()); // empty title
    }

    #[test]
    fn test_module_list_payload_without_content() {
        // List endpoints omit `content`; that must not fail deserialization
        let module: LearningModule =
            serde_json::from_str(r#"{"title": "Intro", "order": 1}"#).unwrap();
        assert_eq!(module.title, "Intro");
        assert!(module.content.is_none());
    }
}
