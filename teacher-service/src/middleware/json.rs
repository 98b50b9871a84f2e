use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use service_core::error::AppError;

/// JSON body extractor that reports rejections in the service error format.
///
/// Well-formed JSON with a missing or mistyped field is a validation failure
/// (422); anything else wrong with the body is a bad request (400).
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(JsonRejection::JsonDataError(e)) => {
                tracing::warn!("Rejected request body: {}", e.body_text());
                Err(AppError::InvalidPayload(anyhow::anyhow!(e.body_text())))
            }
            Err(e) => {
                tracing::warn!("Rejected request body: {}", e.body_text());
                Err(AppError::BadRequest(anyhow::anyhow!(e.body_text())))
            }
        }
    }
}
