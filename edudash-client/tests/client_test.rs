/// Integration tests for the API client
///
/// These tests run the client against a local mock server and verify:
/// - Bearer token injection
/// - Envelope tolerance on list endpoints
/// - Error mapping (401, 403, DRF validation bodies)
/// - The admin-to-regular route fallback
/// - Overview fan-outs surviving a failing endpoint
use chrono::NaiveDate;
use edudash_client::{ApiClient, ApiError, CommunityOverview, DashboardSnapshot};
use edudash_core::config::Config;
use edudash_core::models::career_path::CareerPathForm;
use edudash_core::models::module::{ModuleForm, ModuleUpload};
use edudash_core::models::user::UserRole;
use httpmock::prelude::*;
use serde_json::json;
use std::time::Duration;
use uuid::Uuid;

fn client_for(server: &MockServer) -> ApiClient {
    ApiClient::new(&server.base_url()).unwrap()
}

#[tokio::test]
async fn test_bearer_token_is_sent() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/auth/admin/users/")
            .header("authorization", "Bearer sekrit");
        then.status(200).json_body(json!([]));
    });

    let client = client_for(&server).with_token("sekrit");
    let users = client.list_users().await.unwrap();

    mock.assert();
    assert!(users.is_empty());
}

#[tokio::test]
async fn test_list_accepts_paginated_envelope() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/auth/admin/users/");
        then.status(200).json_body(json!({
            "count": 2,
            "next": null,
            "results": [
                {"username": "jdoe", "role": "student"},
                {"username": "asmith", "role": "instructor"}
            ]
        }));
    });

    let client = client_for(&server);
    let users = client.list_users().await.unwrap();
    assert_eq!(users.len(), 2);
    assert_eq!(users[1].username, "asmith");
}

#[tokio::test]
async fn test_list_accepts_bare_array() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/admin/projects/");
        then.status(200)
            .json_body(json!([{"name": "Capstone", "status": "in_progress"}]));
    });

    let client = client_for(&server);
    let projects = client.list_admin_projects().await.unwrap();
    assert_eq!(projects.len(), 1);
    assert_eq!(projects[0].name, "Capstone");
}

#[tokio::test]
async fn test_401_maps_to_unauthorized() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/auth/profile/");
        then.status(401)
            .json_body(json!({"detail": "Token expired"}));
    });

    let client = client_for(&server);
    let err = client.get_profile().await.unwrap_err();
    assert!(matches!(err, ApiError::Unauthorized));
}

#[tokio::test]
async fn test_drf_validation_body_surfaces_first_field_error() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/learning/admin/career-paths/");
        then.status(400).json_body(json!({
            "name": ["career path with this name already exists."]
        }));
    });
    // Fallback route fails the same way
    server.mock(|when, then| {
        when.method(POST).path("/learning/career-paths/");
        then.status(400).json_body(json!({
            "name": ["career path with this name already exists."]
        }));
    });

    let client = client_for(&server);
    let form = CareerPathForm {
        name: "Web Development".to_string(),
        ..Default::default()
    };
    let err = client.create_career_path(&form).await.unwrap_err();
    match err {
        ApiError::Validation { field, message } => {
            assert_eq!(field, "name");
            assert_eq!(message, "career path with this name already exists.");
        }
        other => panic!("expected validation error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_delete_falls_back_to_regular_route() {
    let server = MockServer::start();
    let id = Uuid::new_v4();

    let admin = server.mock(|when, then| {
        when.method(DELETE)
            .path(format!("/learning/admin/career-paths/{}/", id));
        then.status(404).json_body(json!({"detail": "Not found."}));
    });
    let regular = server.mock(|when, then| {
        when.method(DELETE)
            .path(format!("/learning/career-paths/{}/", id));
        then.status(204);
    });

    let client = client_for(&server);
    client.delete_career_path(id).await.unwrap();

    admin.assert();
    regular.assert();
}

#[tokio::test]
async fn test_toggle_status_returns_user_and_message() {
    let server = MockServer::start();
    let id = Uuid::new_v4();
    server.mock(|when, then| {
        when.method(POST)
            .path(format!("/auth/users/{}/toggle_status/", id));
        then.status(200).json_body(json!({
            "user": {"username": "jdoe", "is_active": false},
            "message": "User deactivated successfully"
        }));
    });

    let client = client_for(&server);
    let response = client.toggle_user_status(id).await.unwrap();
    assert!(!response.user.is_active);
    assert_eq!(
        response.message.as_deref(),
        Some("User deactivated successfully")
    );
}

#[tokio::test]
async fn test_change_role_sends_wire_role() {
    let server = MockServer::start();
    let id = Uuid::new_v4();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path(format!("/auth/users/{}/change_role/", id))
            .json_body(json!({"role": "instructor"}));
        then.status(200).json_body(json!({
            "user": {"username": "jdoe", "role": "instructor"}
        }));
    });

    let client = client_for(&server);
    let response = client
        .change_user_role(id, UserRole::Instructor)
        .await
        .unwrap();

    mock.assert();
    assert_eq!(response.user.role, "instructor");
}

#[tokio::test]
async fn test_require_admin_accepts_admin_profile() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/auth/profile/");
        then.status(200)
            .json_body(json!({"username": "root", "role": "admin"}));
    });

    let client = client_for(&server);
    let profile = client.require_admin().await.unwrap();
    assert_eq!(profile.username, "root");
}

#[tokio::test]
async fn test_require_admin_rejects_non_admin_profile() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/auth/profile/");
        then.status(200)
            .json_body(json!({"username": "jdoe", "role": "student"}));
    });

    let client = client_for(&server);
    let err = client.require_admin().await.unwrap_err();
    assert!(matches!(err, ApiError::Forbidden(_)));
}

fn sample_upload() -> (ModuleForm, ModuleUpload) {
    let mut form = ModuleForm::new(Uuid::new_v4());
    form.title = "Intro".to_string();
    let upload = ModuleUpload {
        file_name: "syllabus.pdf".to_string(),
        bytes: b"%PDF-1.4 fake".to_vec(),
        auto_generate_content: true,
        create_slides: true,
    };
    (form, upload)
}

#[tokio::test]
async fn test_module_upload_sends_multipart_fields_and_falls_back() {
    let server = MockServer::start();
    let admin = server.mock(|when, then| {
        when.method(POST).path("/learning/admin/modules/");
        then.status(404).json_body(json!({"detail": "Not found."}));
    });
    let regular = server.mock(|when, then| {
        when.method(POST)
            .path("/learning/modules/")
            .body_contains("auto_generate_content")
            .body_contains("create_slides")
            .body_contains("syllabus.pdf");
        then.status(201)
            .json_body(json!({"title": "Intro", "order": 0}));
    });

    let client = client_for(&server);
    let (form, upload) = sample_upload();
    let created = client
        .create_module_with_upload(&form, &upload)
        .await
        .unwrap();

    admin.assert();
    regular.assert();
    assert_eq!(created.title, "Intro");
}

#[tokio::test]
async fn test_upload_runs_under_extended_timeout() {
    let server = MockServer::start();
    // Slower than the base timeout, faster than the upload timeout
    server.mock(|when, then| {
        when.method(POST).path("/learning/admin/modules/");
        then.status(201)
            .delay(Duration::from_secs(2))
            .json_body(json!({"title": "Generated"}));
    });

    let config = Config {
        base_url: server.base_url(),
        token: None,
        timeout_secs: 1,
        upload_timeout_secs: 10,
    };
    let client = ApiClient::from_config(&config).unwrap();

    let (form, upload) = sample_upload();
    let created = client
        .create_module_with_upload(&form, &upload)
        .await
        .unwrap();
    assert_eq!(created.title, "Generated");
}

#[tokio::test]
async fn test_community_overview_survives_failing_endpoint() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/community/posts/");
        then.status(200).json_body(json!([
            {"title": "Hello", "post_type": "text", "like_count": 2,
             "author": {"username": "jdoe"},
             "created_at": "2024-03-01T10:00:00Z"}
        ]));
    });
    server.mock(|when, then| {
        when.method(GET).path("/community/comments/");
        then.status(500).json_body(json!({"error": "boom"}));
    });
    server.mock(|when, then| {
        when.method(GET).path("/community/organizations/");
        then.status(200).json_body(json!([]));
    });
    server.mock(|when, then| {
        when.method(GET).path("/community/hashtags/");
        then.status(200).json_body(json!([]));
    });

    let client = client_for(&server);
    let today = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
    let overview = CommunityOverview::fetch(&client, today).await;

    assert_eq!(overview.posts.len(), 1);
    assert!(overview.comments.is_empty());
    assert_eq!(overview.stats.engagement.total_posts, 1);
    assert_eq!(overview.stats.top_authors[0].username, "jdoe");
    // The failing comments endpoint falls back to the per-post counters
    assert_eq!(overview.stats.trend.len(), 7);
    assert_eq!(overview.stats.trend[6].posts, 1);
}

#[tokio::test]
async fn test_dashboard_snapshot_headline_fallback() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/admin/analytics/");
        then.status(403)
            .json_body(json!({"detail": "You do not have permission"}));
    });
    server.mock(|when, then| {
        when.method(GET).path("/learning/admin/career-paths/");
        then.status(200)
            .json_body(json!([{"name": "Web Dev"}, {"name": "Data"}]));
    });
    server.mock(|when, then| {
        when.method(GET).path("/learning/admin/modules/");
        then.status(200).json_body(json!([{"title": "Intro"}]));
    });
    server.mock(|when, then| {
        when.method(GET).path("/community/posts/");
        then.status(200).json_body(json!([]));
    });

    let client = client_for(&server);
    let snapshot = DashboardSnapshot::fetch(&client).await;
    let headline = snapshot.headline();

    assert_eq!(headline.users, 0);
    assert_eq!(headline.career_paths, 2);
    assert_eq!(headline.modules, 1);
    assert_eq!(headline.posts, 0);
}
