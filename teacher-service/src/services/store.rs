use async_trait::async_trait;
use service_core::error::AppError;

use crate::models::{TeacherDocument, TeacherId, TeacherPatch};

/// Persistence seam for teacher records.
///
/// Implementations report storage outages as `AppError::ServiceUnavailable`
/// and never retry.
#[async_trait]
pub trait TeacherStore: Send + Sync {
    async fn ping(&self) -> Result<(), AppError>;

    /// Inserts a new record and returns the identifier the store assigned.
    async fn insert(&self, teacher: TeacherDocument) -> Result<TeacherId, AppError>;

    async fn find_all(&self) -> Result<Vec<TeacherDocument>, AppError>;

    async fn find_by_id(&self, id: &TeacherId) -> Result<Option<TeacherDocument>, AppError>;

    /// Applies `patch` to the matching record. Returns `false` when nothing matched.
    async fn update_fields(&self, id: &TeacherId, patch: &TeacherPatch) -> Result<bool, AppError>;

    /// Returns `false` when nothing was deleted.
    async fn delete(&self, id: &TeacherId) -> Result<bool, AppError>;
}
