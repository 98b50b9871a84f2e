mod common;

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
};
use common::{ana_perez, app_with_store, app_without_store, send};
use serde_json::json;
use tower::util::ServiceExt;

#[tokio::test]
async fn create_list_delete_scenario() {
    let (app, store) = app_with_store();

    let (status, created) = send(&app, Method::POST, "/teachers", Some(ana_perez())).await;
    assert_eq!(status, StatusCode::CREATED);
    let id = created["id"].as_str().expect("id is a string").to_string();
    assert!(!id.is_empty());
    for field in ["nombre_completo", "email", "curso", "asignaturas", "colegios"] {
        assert_eq!(created[field], ana_perez()[field]);
    }

    let (status, listed) = send(&app, Method::GET, "/teachers", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed, json!([created.clone()]));

    let (status, fetched) = send(&app, Method::GET, &format!("/teachers/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);

    let (status, body) = send(&app, Method::DELETE, &format!("/teachers/{id}"), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert!(body.is_null());

    let (status, body) = send(&app, Method::GET, &format!("/teachers/{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], format!("Teacher with ID '{id}' not found."));
    assert!(store.is_empty());
}

#[tokio::test]
async fn list_is_empty_initially() {
    let (app, _) = app_with_store();

    let (status, body) = send(&app, Method::GET, "/teachers", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn create_with_no_subjects_is_rejected() {
    let (app, store) = app_with_store();
    let mut payload = ana_perez();
    payload["asignaturas"] = json!([]);

    let (status, body) = send(&app, Method::POST, "/teachers", Some(payload)).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], "Validation error");
    assert!(body["details"].as_str().unwrap().contains("asignaturas"));
    assert!(store.is_empty());
}

#[tokio::test]
async fn create_rejects_constraint_violations() {
    let (app, store) = app_with_store();
    let cases = [
        ("nombre_completo", json!("Al")),
        ("email", json!("ana.perez")),
        ("curso", json!("")),
        ("colegios", json!([])),
        ("asignaturas", json!("Matemáticas")),
    ];

    for (field, bad) in cases {
        let mut payload = ana_perez();
        payload[field] = bad;
        let (status, _) = send(&app, Method::POST, "/teachers", Some(payload)).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY, "field {field}");
    }

    assert!(store.is_empty());
}

#[tokio::test]
async fn create_with_missing_field_is_rejected() {
    let (app, store) = app_with_store();
    let mut payload = ana_perez();
    payload.as_object_mut().unwrap().remove("colegios");

    let (status, body) = send(&app, Method::POST, "/teachers", Some(payload)).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], "Validation error");
    assert!(store.is_empty());
}

#[tokio::test]
async fn malformed_json_is_bad_request() {
    let (app, _) = app_with_store();

    let response = app
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri("/teachers")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from("{\"nombre_completo\": "))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn partial_update_leaves_other_fields() {
    let (app, _) = app_with_store();
    let (_, created) = send(&app, Method::POST, "/teachers", Some(ana_perez())).await;
    let id = created["id"].as_str().unwrap();

    let (status, updated) = send(
        &app,
        Method::PUT,
        &format!("/teachers/{id}"),
        Some(json!({ "curso": "4º Medio", "colegios": ["Liceo Bicentenario"] })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["id"], created["id"]);
    assert_eq!(updated["curso"], "4º Medio");
    assert_eq!(updated["colegios"], json!(["Liceo Bicentenario"]));
    assert_eq!(updated["nombre_completo"], created["nombre_completo"]);
    assert_eq!(updated["email"], created["email"]);
    assert_eq!(updated["asignaturas"], created["asignaturas"]);

    let (_, fetched) = send(&app, Method::GET, &format!("/teachers/{id}"), None).await;
    assert_eq!(fetched, updated);
}

#[tokio::test]
async fn update_validates_supplied_fields() {
    let (app, _) = app_with_store();
    let (_, created) = send(&app, Method::POST, "/teachers", Some(ana_perez())).await;
    let id = created["id"].as_str().unwrap();

    let (status, _) = send(
        &app,
        Method::PUT,
        &format!("/teachers/{id}"),
        Some(json!({ "asignaturas": [] })),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let (_, fetched) = send(&app, Method::GET, &format!("/teachers/{id}"), None).await;
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn update_with_null_fields_is_rejected() {
    let (app, _) = app_with_store();
    let (_, created) = send(&app, Method::POST, "/teachers", Some(ana_perez())).await;
    let id = created["id"].as_str().unwrap();

    let (status, body) = send(
        &app,
        Method::PUT,
        &format!("/teachers/{id}"),
        Some(json!({ "asignaturas": null, "email": null })),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], "Validation error");

    let (_, fetched) = send(&app, Method::GET, &format!("/teachers/{id}"), None).await;
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn update_and_delete_unknown_id_are_not_found() {
    let (app, _) = app_with_store();
    let unknown = "65f1a2b3c4d5e6f708192a3b";

    let (status, _) = send(
        &app,
        Method::PUT,
        &format!("/teachers/{unknown}"),
        Some(json!({ "curso": "1º Básico" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, Method::DELETE, &format!("/teachers/{unknown}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, Method::GET, &format!("/teachers/{unknown}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn malformed_ids_are_rejected_before_storage() {
    // No store at all: reaching storage would answer 503, not 400.
    let app = app_without_store();

    let (status, body) = send(&app, Method::GET, "/teachers/not-a-valid-id", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "The ID 'not-a-valid-id' is not valid.");

    let (status, _) = send(
        &app,
        Method::PUT,
        "/teachers/not-a-valid-id",
        Some(json!({ "curso": "1º Básico" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(&app, Method::DELETE, "/teachers/123", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn data_routes_answer_503_without_database() {
    let app = app_without_store();
    let valid_id = "65f1a2b3c4d5e6f708192a3b";

    let (status, body) = send(&app, Method::GET, "/teachers", None).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["error"], "Service unavailable");

    let (status, _) = send(&app, Method::POST, "/teachers", Some(ana_perez())).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);

    let (status, _) = send(&app, Method::GET, &format!("/teachers/{valid_id}"), None).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);

    let (status, _) = send(
        &app,
        Method::PUT,
        &format!("/teachers/{valid_id}"),
        Some(json!({ "curso": "1º Básico" })),
    )
    .await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);

    let (status, _) = send(&app, Method::DELETE, &format!("/teachers/{valid_id}"), None).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
}
