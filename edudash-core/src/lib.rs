//! # EduDash Core
//!
//! Shared types and display logic for the EduDash admin console: domain
//! models mirrored from the platform REST API, the aggregation helpers that
//! turn list-shaped payloads into chart-ready summaries, and the filter/sort
//! helper behind every admin table view.
//!
//! ## Module Organization
//!
//! - `models`: API payload records and mutation payloads
//! - `stats`: grouped counts, daily trends, top-author rankings
//! - `tableview`: pure filter/sort over table rows
//! - `quiz_content`: the HTML slide encoding used for quiz questions
//! - `config`: environment-driven configuration

pub mod config;
pub mod models;
pub mod quiz_content;
pub mod stats;
pub mod tableview;

/// Current version of the EduDash core library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_set() {
        assert!(!VERSION.is_empty());
    }
}
