#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use secrecy::Secret;
use serde_json::{json, Value};
use service_core::config::Config as CoreConfig;
use std::sync::Arc;
use teacher_service::config::{CorsConfig, MongoConfig, TeacherConfig};
use teacher_service::services::{InMemoryTeacherStore, TeacherDirectory};
use teacher_service::{build_router, AppState};
use tower::util::ServiceExt;

pub fn test_config(mongo_uri: &str, database: &str) -> TeacherConfig {
    TeacherConfig {
        common: CoreConfig { port: 0 },
        mongodb: MongoConfig {
            uri: Secret::new(mongo_uri.to_string()),
            database: database.to_string(),
        },
        cors: CorsConfig::default(),
        log_level: "error".to_string(),
    }
}

/// Router backed by an in-memory store the test can inspect.
pub fn app_with_store() -> (Router, Arc<InMemoryTeacherStore>) {
    let store = Arc::new(InMemoryTeacherStore::new());
    let state = AppState {
        config: test_config("", "teachers_test"),
        directory: TeacherDirectory::new(store.clone()),
    };
    (build_router(state), store)
}

/// Router for a service that started without a database.
pub fn app_without_store() -> Router {
    build_router(AppState {
        config: test_config("", "teachers_test"),
        directory: TeacherDirectory::unavailable(),
    })
}

pub fn ana_perez() -> Value {
    json!({
        "nombre_completo": "Ana Pérez",
        "email": "ana.perez@example.com",
        "curso": "3º Medio",
        "asignaturas": ["Matemáticas", "Física"],
        "colegios": ["Colegio Cervantes"]
    })
}

/// Sends one request through the router and decodes the JSON body
/// (`Value::Null` for an empty body).
pub async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("response body is not JSON")
    };

    (status, value)
}
