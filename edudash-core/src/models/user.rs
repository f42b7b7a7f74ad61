/// User accounts as served by the platform API
///
/// The admin console lists every account, toggles activation, and reassigns
/// roles. The backend owns all of this state; these types only mirror its
/// payloads.
///
/// # Payload
///
/// ```json
/// {
///   "id": "5f6c…",
///   "username": "jdoe",
///   "email": "jdoe@example.edu",
///   "first_name": "Jane",
///   "last_name": "Doe",
///   "role": "student",
///   "program": "BSIT",
///   "year_level": "2",
///   "is_active": true,
///   "created_at": "2024-01-01T00:00:00Z"
/// }
/// ```
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Platform role of a user account
///
/// The API transports roles as lowercase strings; records keep the raw
/// string so unrecognized roles survive a round trip, and this enum exists
/// for the places that need to name one (role changes, summary grouping).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    /// Full administrative access
    Admin,

    /// Can author learning content
    Instructor,

    /// Regular learner account
    Student,
}

impl UserRole {
    /// Wire representation of the role
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Admin => "admin",
            UserRole::Instructor => "instructor",
            UserRole::Student => "student",
        }
    }

    /// Parses a role from its wire representation
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "admin" => Some(UserRole::Admin),
            "instructor" => Some(UserRole::Instructor),
            "student" => Some(UserRole::Student),
            _ => None,
        }
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A user account record
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct User {
    /// Unique account ID
    #[serde(default)]
    pub id: Option<Uuid>,

    /// Unique handle shown across the platform
    #[serde(default)]
    pub username: String,

    /// Login email
    #[serde(default)]
    pub email: String,

    /// Given name
    #[serde(default)]
    pub first_name: Option<String>,

    /// Family name
    #[serde(default)]
    pub last_name: Option<String>,

    /// Role as transported by the API ("admin", "instructor", "student")
    #[serde(default)]
    pub role: String,

    /// Academic program code (e.g. "BSIT")
    #[serde(default)]
    pub program: Option<String>,

    /// Year level ("1" through "4")
    #[serde(default)]
    pub year_level: Option<String>,

    /// Whether the account may log in
    #[serde(default)]
    pub is_active: bool,

    /// Avatar URL, if one was uploaded
    #[serde(default)]
    pub profile_picture: Option<String>,

    /// When the account was created
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,

    /// When the user last logged in
    #[serde(default)]
    pub last_login: Option<DateTime<Utc>>,
}

impl User {
    /// Role of this account, when it is one the console knows about
    pub fn role_parsed(&self) -> Option<UserRole> {
        UserRole::parse(&self.role)
    }

    /// Display name: "First Last" when present, else the username
    pub fn display_name(&self) -> String {
        match (self.first_name.as_deref(), self.last_name.as_deref()) {
            (Some(f), Some(l)) if !f.is_empty() && !l.is_empty() => format!("{} {}", f, l),
            (Some(f), _) if !f.is_empty() => f.to_string(),
            _ => self.username.clone(),
        }
    }
}

/// Abbreviated user reference nested inside posts, comments, and tasks
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserRef {
    /// Account ID, when the serializer includes it
    #[serde(default)]
    pub id: Option<Uuid>,

    /// Handle of the referenced user
    #[serde(default)]
    pub username: Option<String>,

    /// Avatar URL
    #[serde(default)]
    pub profile_picture: Option<String>,
}

/// Payload for `change_role` on a user
#[derive(Debug, Clone, Serialize)]
pub struct ChangeRole {
    /// New role for the account
    pub role: UserRole,
}

/// Response envelope for the status/role mutation endpoints
///
/// The backend replies with the updated record plus a human-readable
/// message the console surfaces verbatim.
#[derive(Debug, Clone, Deserialize)]
pub struct UserMutationResponse {
    /// Updated user record
    pub user: User,

    /// Server-provided confirmation message
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_round_trip() {
        assert_eq!(UserRole::parse("admin"), Some(UserRole::Admin));
        assert_eq!(UserRole::parse("instructor"), Some(UserRole::Instructor));
        assert_eq!(UserRole::parse("student"), Some(UserRole::Student));
        assert_eq!(UserRole::parse("superuser"), None);
        assert_eq!(UserRole::Instructor.as_str(), "instructor");
    }

    #[test]
    fn test_lenient_deserialization() {
        // A minimal payload must still produce a usable record
        let user: User = serde_json::from_str(r#"{"username": "jdoe"}"#).unwrap();
        assert_eq!(user.username, "jdoe");
        assert_eq!(user.role, "");
        assert!(user.role_parsed().is_none());
        assert!(!user.is_active);
    }

    #[test]
    fn test_display_name_falls_back_to_username() {
        let user = User {
            username: "jdoe".to_string(),
            ..Default::default()
        };
        assert_eq!(user.display_name(), "jdoe");

        let named = User {
            username: "jdoe".to_string(),
            first_name: Some("Jane".to_string()),
            last_name: Some("Doe".to_string()),
            ..Default::default()
        };
        assert_eq!(named.display_name(), "Jane Doe");
    }
}
