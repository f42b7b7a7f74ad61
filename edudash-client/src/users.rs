/// User administration endpoints
///
/// Account state lives entirely on the backend; these wrappers only drive
/// the admin actions the console exposes: listing every account, toggling
/// activation, reassigning roles, and deletion.
use crate::error::{ApiError, ApiResult};
use crate::http::ApiClient;
use edudash_core::models::user::{ChangeRole, User, UserMutationResponse, UserRole};
use serde_json::json;
use uuid::Uuid;

impl ApiClient {
    /// Lists every account on the platform
    ///
    /// # Errors
    ///
    /// `Unauthorized` when the session is invalid, `Forbidden` when the
    /// caller is not an admin.
    pub async fn list_users(&self) -> ApiResult<Vec<User>> {
        self.get_list("/auth/admin/users/").await
    }

    /// Fetches the signed-in account's own profile
    ///
    /// The console calls this once at startup as its admin gate: a profile
    /// whose role is not `admin` means the rest of the endpoints will be
    /// forbidden anyway.
    pub async fn get_profile(&self) -> ApiResult<User> {
        self.get_json("/auth/profile/").await
    }

    /// Verifies the signed-in account is an admin
    pub async fn require_admin(&self) -> ApiResult<User> {
        let profile = self.get_profile().await?;
        if profile.role_parsed() == Some(UserRole::Admin) {
            Ok(profile)
        } else {
            Err(ApiError::Forbidden(
                "Admin access required".to_string(),
            ))
        }
    }

    /// Flips an account between active and deactivated
    ///
    /// Returns the updated record plus the server's confirmation message.
    pub async fn toggle_user_status(&self, id: Uuid) -> ApiResult<UserMutationResponse> {
        self.post_json(&format!("/auth/users/{}/toggle_status/", id), &json!({}))
            .await
    }

    /// Reassigns an account's role
    pub async fn change_user_role(
        &self,
        id: Uuid,
        role: UserRole,
    ) -> ApiResult<UserMutationResponse> {
        self.post_json(
            &format!("/auth/users/{}/change_role/", id),
            &ChangeRole { role },
        )
        .await
    }

    /// Permanently deletes an account
    pub async fn delete_user(&self, id: Uuid) -> ApiResult<()> {
        self.delete(&format!("/auth/users/{}/", id)).await
    }
}
