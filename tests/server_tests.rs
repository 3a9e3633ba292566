use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode};
use serde_json::{Value, json};
use tower::ServiceExt;

use timetable_solver::server::{AppState, create_router};
use timetable_solver::storage::Repository;

fn app() -> (Router, Repository) {
    let repository = Repository::in_memory();
    (create_router(AppState::new(repository.clone())), repository)
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => request
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => request.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, value)
}

#[tokio::test]
async fn health_check() {
    let (app, _) = app();
    let (status, _) = send(&app, "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn slots_endpoint_returns_week_grid() {
    let (app, _) = app();
    let (status, body) = send(&app, "GET", "/v1/slots", None).await;

    assert_eq!(status, StatusCode::OK);
    let slots = body.as_array().unwrap();
    assert_eq!(slots.len(), 50);
    assert_eq!(slots[0], json!({"id": "1", "day": "Monday", "startTime": "08:00", "endTime": "09:00"}));
}

#[tokio::test]
async fn solve_is_stateless() {
    let (app, repository) = app();
    let input = json!({
        "subjects": [{"id": "S1", "name": "Intro", "code": "CS101", "facultyId": "F1", "duration": 60}],
        "faculty": [{"id": "F1", "name": "Dr. A", "department": "CS", "availableTimeSlots": []}],
        "classrooms": [{"id": "R1", "name": "Room 1", "capacity": 20}]
    });

    let (status, body) = send(&app, "POST", "/v1/schedule/solve", Some(input)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["schedule"][0]["id"], "S1-R1-1");
    assert_eq!(body["conflicts"], json!([]));
    assert!(repository.load_schedule().unwrap().is_empty());
}

#[tokio::test]
async fn solve_rejects_malformed_slot_times() {
    let (app, _) = app();
    let input = json!({
        "subjects": [],
        "faculty": [],
        "classrooms": [],
        "timeSlots": [{"id": "1", "day": "Monday", "startTime": "8am", "endTime": "09:00"}]
    });

    let (status, body) = send(&app, "POST", "/v1/schedule/solve", Some(input)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "BAD_REQUEST");
    assert!(body["message"].as_str().unwrap().contains("8am"));
}

#[tokio::test]
async fn generate_from_sample_data_persists_results() {
    let (app, repository) = app();

    let (status, _) = send(&app, "POST", "/v1/sample", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, body) = send(&app, "POST", "/v1/schedule/generate", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["schedule"].as_array().unwrap().len(), 5);

    assert_eq!(repository.load_schedule().unwrap().len(), 5);
    assert_eq!(repository.load_conflicts().unwrap().len(), 12);

    let (_, stats) = send(&app, "GET", "/v1/stats", None).await;
    assert_eq!(stats["utilizationPercent"], 100);
    assert_eq!(stats["classroomsInUse"], 4);

    let (_, schedule) = send(&app, "GET", "/v1/schedule", None).await;
    assert_eq!(schedule, body["schedule"]);

    let (_, resources) = send(&app, "GET", "/v1/resources", None).await;
    assert_eq!(resources["emptyClassrooms"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn collections_can_be_replaced_and_cleared() {
    let (app, _) = app();
    let rooms = json!([{"id": "R1", "name": "Lab", "capacity": 12, "type": "lab"}]);

    let (status, _) = send(&app, "PUT", "/v1/classrooms", Some(rooms.clone())).await;
    assert_eq!(status, StatusCode::OK);

    let (_, stored) = send(&app, "GET", "/v1/classrooms", None).await;
    assert_eq!(stored, rooms);

    let (status, _) = send(&app, "DELETE", "/v1/data", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (_, stored) = send(&app, "GET", "/v1/classrooms", None).await;
    assert_eq!(stored, json!([]));
    let (_, conflicts) = send(&app, "GET", "/v1/conflicts", None).await;
    assert_eq!(conflicts, json!([]));
}
