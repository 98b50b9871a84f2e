use axum::async_trait;
use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;
use service_core::error::AppError;

use crate::models::TeacherId;

/// The `:id` path segment, parsed into a [`TeacherId`].
///
/// Malformed ids are rejected here with 400, before any handler or storage
/// call runs.
#[derive(Debug, Clone, Copy)]
pub struct TeacherPath(pub TeacherId);

#[async_trait]
impl<S> FromRequestParts<S> for TeacherPath
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::BadRequest(anyhow::anyhow!(e.body_text())))?;

        let id = TeacherId::parse(&raw).map_err(|e| {
            tracing::warn!(teacher_id = %raw, "Rejected malformed teacher id");
            AppError::from(e)
        })?;

        Ok(TeacherPath(id))
    }
}
