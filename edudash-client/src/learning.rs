/// Learning content administration: career paths, modules, quizzes
///
/// The backend exposes most of these collections twice: an admin route
/// with unrestricted visibility and a regular route scoped to published
/// content. Older deployments lack some admin routes, so every admin call
/// here falls back to the regular route when it fails. Quizzes only ever
/// had the one route.
///
/// Module uploads can ask the backend to generate slide content from the
/// attached file, which takes far longer than a normal request; those run
/// under the client's extended upload timeout.
use crate::error::ApiResult;
use crate::http::ApiClient;
use edudash_core::models::career_path::{CareerPath, CareerPathForm};
use edudash_core::models::module::{LearningModule, ModuleForm, ModuleUpload};
use edudash_core::models::quiz::{Quiz, QuizForm};
use reqwest::multipart::{Form, Part};
use uuid::Uuid;

fn career_path_form_parts(form: &CareerPathForm) -> Form {
    Form::new()
        .text("name", form.name.clone())
        .text("description", form.description.clone())
        .text("program_type", form.program_type.clone())
        .text("difficulty_level", form.difficulty_level.clone())
        .text("estimated_duration", form.estimated_duration.to_string())
        .text("max_modules", form.max_modules.to_string())
        .text("points_reward", form.points_reward.to_string())
        .text("is_active", form.is_active.to_string())
        .text("is_featured", form.is_featured.to_string())
}

fn module_form_parts(form: &ModuleForm, upload: &ModuleUpload) -> Form {
    Form::new()
        .text("career_path", form.career_path.to_string())
        .text("title", form.title.clone())
        .text("description", form.description.clone())
        .text("module_type", form.module_type.clone())
        .text("difficulty_level", form.difficulty_level.clone())
        .text("content", form.content.clone())
        .text("duration_minutes", form.duration_minutes.to_string())
        .text("points_reward", form.points_reward.to_string())
        .text("order", form.order.to_string())
        .text("is_locked", form.is_locked.to_string())
        .text(
            "auto_generate_content",
            upload.auto_generate_content.to_string(),
        )
        .text("create_slides", upload.create_slides.to_string())
        .part(
            "file",
            Part::bytes(upload.bytes.clone()).file_name(upload.file_name.clone()),
        )
}

impl ApiClient {
    /// Lists career paths, preferring the admin route
    pub async fn list_career_paths(&self) -> ApiResult<Vec<CareerPath>> {
        match self.get_list("/learning/admin/career-paths/").await {
            Ok(paths) => Ok(paths),
            Err(err) => {
                tracing::warn!("admin career path listing failed, retrying regular route: {}", err);
                self.get_list("/learning/career-paths/").await
            }
        }
    }

    /// Creates a career path
    pub async fn create_career_path(&self, form: &CareerPathForm) -> ApiResult<CareerPath> {
        match self.post_json("/learning/admin/career-paths/", form).await {
            Ok(path) => Ok(path),
            Err(err) => {
                tracing::warn!("admin career path create failed, retrying regular route: {}", err);
                self.post_json("/learning/career-paths/", form).await
            }
        }
    }

    /// Creates a career path with a certificate template file attached
    pub async fn create_career_path_with_template(
        &self,
        form: &CareerPathForm,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> ApiResult<CareerPath> {
        let parts = career_path_form_parts(form).part(
            "certificate_template",
            Part::bytes(bytes).file_name(file_name.to_string()),
        );
        self.post_multipart("/learning/admin/career-paths/", parts)
            .await
    }

    /// Updates a career path
    pub async fn update_career_path(
        &self,
        id: Uuid,
        form: &CareerPathForm,
    ) -> ApiResult<CareerPath> {
        match self
            .patch_json(&format!("/learning/admin/career-paths/{}/", id), form)
            .await
        {
            Ok(path) => Ok(path),
            Err(err) => {
                tracing::warn!("admin career path update failed, retrying regular route: {}", err);
                self.patch_json(&format!("/learning/career-paths/{}/", id), form)
                    .await
            }
        }
    }

    /// Deletes a career path, falling back to the regular route
    pub async fn delete_career_path(&self, id: Uuid) -> ApiResult<()> {
        match self
            .delete(&format!("/learning/admin/career-paths/{}/", id))
            .await
        {
            Ok(()) => Ok(()),
            Err(err) => {
                tracing::warn!("admin career path delete failed, retrying regular route: {}", err);
                self.delete(&format!("/learning/career-paths/{}/", id)).await
            }
        }
    }

    /// Lists learning modules, preferring the admin route
    pub async fn list_modules(&self) -> ApiResult<Vec<LearningModule>> {
        match self.get_list("/learning/admin/modules/").await {
            Ok(modules) => Ok(modules),
            Err(err) => {
                tracing::warn!("admin module listing failed, retrying regular route: {}", err);
                self.get_list("/learning/modules/").await
            }
        }
    }

    /// Fetches one module with its full content field
    ///
    /// List payloads omit `content`; editors need this call before opening
    /// a module.
    pub async fn get_module(&self, id: Uuid) -> ApiResult<LearningModule> {
        self.get_json(&format!("/learning/modules/{}/", id)).await
    }

    /// Creates a module from a JSON form
    pub async fn create_module(&self, form: &ModuleForm) -> ApiResult<LearningModule> {
        match self.post_json("/learning/admin/modules/", form).await {
            Ok(module) => Ok(module),
            Err(err) => {
                tracing::warn!("admin module create failed, retrying regular route: {}", err);
                self.post_json("/learning/modules/", form).await
            }
        }
    }

    /// Creates a module with a file attached, under the upload timeout
    pub async fn create_module_with_upload(
        &self,
        form: &ModuleForm,
        upload: &ModuleUpload,
    ) -> ApiResult<LearningModule> {
        match self
            .post_multipart("/learning/admin/modules/", module_form_parts(form, upload))
            .await
        {
            Ok(module) => Ok(module),
            Err(err) => {
                tracing::warn!("admin module upload failed, retrying regular route: {}", err);
                self.post_multipart("/learning/modules/", module_form_parts(form, upload))
                    .await
            }
        }
    }

    /// Updates a module from a JSON form
    pub async fn update_module(&self, id: Uuid, form: &ModuleForm) -> ApiResult<LearningModule> {
        match self
            .patch_json(&format!("/learning/admin/modules/{}/", id), form)
            .await
        {
            Ok(module) => Ok(module),
            Err(err) => {
                tracing::warn!("admin module update failed, retrying regular route: {}", err);
                self.patch_json(&format!("/learning/modules/{}/", id), form)
                    .await
            }
        }
    }

    /// Updates a module with a file attached
    pub async fn update_module_with_upload(
        &self,
        id: Uuid,
        form: &ModuleForm,
        upload: &ModuleUpload,
    ) -> ApiResult<LearningModule> {
        match self
            .patch_multipart(
                &format!("/learning/admin/modules/{}/", id),
                module_form_parts(form, upload),
            )
            .await
        {
            Ok(module) => Ok(module),
            Err(err) => {
                tracing::warn!("admin module upload failed, retrying regular route: {}", err);
                self.patch_multipart(
                    &format!("/learning/modules/{}/", id),
                    module_form_parts(form, upload),
                )
                .await
            }
        }
    }

    /// Deletes a module, falling back to the regular route
    pub async fn delete_module(&self, id: Uuid) -> ApiResult<()> {
        match self.delete(&format!("/learning/admin/modules/{}/", id)).await {
            Ok(()) => Ok(()),
            Err(err) => {
                tracing::warn!("admin module delete failed, retrying regular route: {}", err);
                self.delete(&format!("/learning/modules/{}/", id)).await
            }
        }
    }

    /// Lists quizzes
    pub async fn list_quizzes(&self) -> ApiResult<Vec<Quiz>> {
        self.get_list("/learning/quizzes/").await
    }

    /// Creates a quiz
    pub async fn create_quiz(&self, form: &QuizForm) -> ApiResult<Quiz> {
        self.post_json("/learning/quizzes/", form).await
    }

    /// Updates a quiz
    pub async fn update_quiz(&self, id: Uuid, form: &QuizForm) -> ApiResult<Quiz> {
        self.patch_json(&format!("/learning/quizzes/{}/", id), form)
            .await
    }

    /// Deletes a quiz
    pub async fn delete_quiz(&self, id: Uuid) -> ApiResult<()> {
        self.delete(&format!("/learning/quizzes/{}/", id)).await
    }
}
