/// API payload models for the admin console
///
/// Every record here mirrors a JSON payload served by the platform REST
/// backend. Views fetch fresh copies on every load; nothing is cached or
/// persisted client-side, so these types carry no lifecycle logic of their
/// own.
///
/// Deserialization is deliberately lenient: counts default to zero and
/// optional relations to `None`, because a partially-populated record should
/// degrade a view rather than fail it.
///
/// # Models
///
/// - `user`: platform accounts and the admin role/status mutations
/// - `career_path`: curriculum groupings and their create/update payloads
/// - `module`: learning content units within a career path
/// - `quiz`: assessments with HTML-encoded question content
/// - `project`: projects, teams, and tasks under admin oversight
/// - `community`: posts, comments, organizations, and hashtags
pub mod career_path;
pub mod community;
pub mod module;
pub mod project;
pub mod quiz;
pub mod user;
