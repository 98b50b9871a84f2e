//! Teacher directory operations.
//!
//! Inputs are validated before the store is consulted. When the service
//! started without a reachable database every data operation answers
//! `AppError::ServiceUnavailable`.

use anyhow::anyhow;
use service_core::error::AppError;
use std::sync::Arc;
use validator::Validate;

use super::store::TeacherStore;
use crate::dtos::{CreateTeacherRequest, UpdateTeacherRequest};
use crate::models::{Teacher, TeacherDocument, TeacherId, TeacherPatch};

#[derive(Clone)]
pub struct TeacherDirectory {
    store: Option<Arc<dyn TeacherStore>>,
}

fn not_found(id: &TeacherId) -> AppError {
    AppError::NotFound(anyhow!("Teacher with ID '{}' not found.", id))
}

impl TeacherDirectory {
    pub fn new(store: Arc<dyn TeacherStore>) -> Self {
        Self { store: Some(store) }
    }

    /// A directory with no storage behind it.
    pub fn unavailable() -> Self {
        Self { store: None }
    }

    pub fn is_available(&self) -> bool {
        self.store.is_some()
    }

    fn store(&self) -> Result<&Arc<dyn TeacherStore>, AppError> {
        self.store.as_ref().ok_or_else(|| {
            tracing::warn!("Rejecting request: database is not available");
            AppError::ServiceUnavailable(anyhow!("The database is not available."))
        })
    }

    pub async fn check_health(&self) -> Result<(), AppError> {
        self.store()?.ping().await
    }

    pub async fn create(&self, request: CreateTeacherRequest) -> Result<Teacher, AppError> {
        request.validate()?;
        let store = self.store()?;

        let id = store.insert(TeacherDocument::from(request)).await?;
        tracing::info!(teacher_id = %id, "Teacher created");

        let created = store.find_by_id(&id).await?.ok_or_else(|| {
            tracing::error!(teacher_id = %id, "Created teacher could not be read back");
            AppError::InternalError(anyhow!("The teacher could not be created."))
        })?;

        Teacher::try_from(created)
    }

    pub async fn list(&self) -> Result<Vec<Teacher>, AppError> {
        let teachers = self.store()?.find_all().await?;
        tracing::debug!(count = teachers.len(), "Listing teachers");

        teachers.into_iter().map(Teacher::try_from).collect()
    }

    pub async fn get_by_id(&self, id: &TeacherId) -> Result<Teacher, AppError> {
        let teacher = self
            .store()?
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))?;

        Teacher::try_from(teacher)
    }

    /// Replaces the supplied fields and returns the reloaded record.
    ///
    /// Only the supplied fields are validated; stored fields are not re-checked.
    pub async fn update(
        &self,
        id: &TeacherId,
        request: UpdateTeacherRequest,
    ) -> Result<Teacher, AppError> {
        request.validate()?;
        let store = self.store()?;
        let patch = TeacherPatch::from(request);

        if patch.is_empty() {
            tracing::debug!(teacher_id = %id, "Empty update, returning current record");
            return self.get_by_id(id).await;
        }

        if !store.update_fields(id, &patch).await? {
            return Err(not_found(id));
        }
        tracing::info!(teacher_id = %id, "Teacher updated");

        // A concurrent delete may land between the write and the reload.
        let updated = store.find_by_id(id).await?.ok_or_else(|| not_found(id))?;
        Teacher::try_from(updated)
    }

    pub async fn delete(&self, id: &TeacherId) -> Result<(), AppError> {
        if !self.store()?.delete(id).await? {
            return Err(not_found(id));
        }
        tracing::info!(teacher_id = %id, "Teacher deleted");
        Ok(())
    }
}
