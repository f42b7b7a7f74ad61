/// Quizzes: assessments attached to learning modules
///
/// A quiz's questions are not a structured relation on this endpoint; they
/// travel as rendered HTML slides in the free-text `content` field. See
/// [`crate::quiz_content`] for the encoding.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// A quiz record
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Quiz {
    /// Unique quiz ID
    #[serde(default)]
    pub id: Option<Uuid>,

    /// Module the quiz is attached to
    #[serde(default)]
    pub learning_module: Option<Uuid>,

    /// Quiz title
    #[serde(default)]
    pub title: String,

    /// Short description
    #[serde(default)]
    pub description: String,

    /// HTML-encoded question slides
    #[serde(default)]
    pub content: String,

    /// Time limit in minutes
    #[serde(default)]
    pub time_limit_minutes: u32,

    /// Passing score as a percentage
    #[serde(default)]
    pub passing_score: u32,

    /// Maximum attempts allowed per learner
    #[serde(default)]
    pub max_attempts: u32,

    /// Whether question order is shuffled per attempt
    #[serde(default)]
    pub randomize_questions: bool,

    /// When the quiz was created
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Payload for creating or updating a quiz
#[derive(Debug, Clone, Serialize, Validate)]
pub struct QuizForm {
    /// Module the quiz is attached to
    pub learning_module: Uuid,

    /// Quiz title
    #[validate(length(min = 1, max = 255, message = "Title is required"))]
    pub title: String,

    /// Short description
    pub description: String,

    /// HTML-encoded question slides
    pub content: String,

    /// Time limit in minutes
    #[validate(range(min = 1, message = "Time limit must be at least a minute"))]
    pub time_limit_minutes: u32,

    /// Passing score as a percentage
    #[validate(range(max = 100, message = "Passing score is a percentage"))]
    pub passing_score: u32,

    /// Maximum attempts allowed
    #[validate(range(min = 1, message = "At least one attempt must be allowed"))]
    pub max_attempts: u32,

    /// Whether question order is shuffled
    pub randomize_questions: bool,
}

impl QuizForm {
    /// A blank form for the given module, with the console's defaults
    pub fn new(learning_module: Uuid) -> Self {
        Self {
            learning_module,
            title: String::new(),
            description: String::new(),
            content: String::new(),
            time_limit_minutes: 30,
            passing_score: 70,
            max_attempts: 3,
            randomize_questions: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quiz_form_defaults() {
        let form = QuizForm::new(Uuid::new_v4());
        assert_eq!(form.passing_score, 70);
        assert_eq!(form.max_attempts, 3);
        assert!(form.randomize_questions);
    }
}
