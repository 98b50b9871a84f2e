//! CRUD handlers for the `teachers` collection.

use axum::{extract::State, http::StatusCode, Json};
use service_core::error::AppError;

use crate::{
    dtos::{CreateTeacherRequest, UpdateTeacherRequest},
    middleware::{JsonBody, TeacherPath},
    models::Teacher,
    startup::AppState,
};

#[tracing::instrument(skip_all)]
pub async fn create_teacher(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<CreateTeacherRequest>,
) -> Result<(StatusCode, Json<Teacher>), AppError> {
    let teacher = state.directory.create(payload).await?;
    Ok((StatusCode::CREATED, Json(teacher)))
}

#[tracing::instrument(skip_all)]
pub async fn list_teachers(State(state): State<AppState>) -> Result<Json<Vec<Teacher>>, AppError> {
    Ok(Json(state.directory.list().await?))
}

#[tracing::instrument(skip_all, fields(teacher_id = %id))]
pub async fn get_teacher(
    State(state): State<AppState>,
    TeacherPath(id): TeacherPath,
) -> Result<Json<Teacher>, AppError> {
    Ok(Json(state.directory.get_by_id(&id).await?))
}

#[tracing::instrument(skip_all, fields(teacher_id = %id))]
pub async fn update_teacher(
    State(state): State<AppState>,
    TeacherPath(id): TeacherPath,
    JsonBody(payload): JsonBody<UpdateTeacherRequest>,
) -> Result<Json<Teacher>, AppError> {
    Ok(Json(state.directory.update(&id, payload).await?))
}

#[tracing::instrument(skip_all, fields(teacher_id = %id))]
pub async fn delete_teacher(
    State(state): State<AppState>,
    TeacherPath(id): TeacherPath,
) -> Result<StatusCode, AppError> {
    state.directory.delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
