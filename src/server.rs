use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, post},
};
use log::{error, info};
use serde::Serialize;

use crate::data::{
    Classroom, ConflictInfo, Faculty, ScheduleEntry, SchedulingInput, SchedulingOutput, Subject,
    TimeSlot,
};
use crate::error::{SolveError, StorageError};
use crate::sample::sample_data;
use crate::slots::generate_week_slots;
use crate::solver;
use crate::stats::{DashboardStats, FreeResources, dashboard_stats, free_resources};
use crate::storage::Repository;

/// Shared state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    pub repository: Repository,
}

impl AppState {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }
}

/// Error body returned by every failing handler.
#[derive(Debug, Clone, Serialize)]
pub struct ApiError {
    pub code: String,
    pub message: String,
}

#[derive(Debug)]
pub enum AppError {
    BadRequest(String),
    Storage(StorageError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg),
            AppError::Storage(e) => {
                error!("Storage failure: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "STORAGE_ERROR", e.to_string())
            }
        };
        let body = ApiError {
            code: code.to_string(),
            message,
        };
        (status, Json(body)).into_response()
    }
}

impl From<StorageError> for AppError {
    fn from(err: StorageError) -> Self {
        AppError::Storage(err)
    }
}

impl From<SolveError> for AppError {
    fn from(err: SolveError) -> Self {
        AppError::BadRequest(err.to_string())
    }
}

type ApiResult<T> = Result<Json<T>, AppError>;

async fn health() -> &'static str {
    "ok"
}

async fn list_slots() -> Json<Vec<TimeSlot>> {
    Json(generate_week_slots())
}

async fn solve_handler(Json(input): Json<SchedulingInput>) -> ApiResult<SchedulingOutput> {
    Ok(Json(solver::solve(&input)?))
}

async fn get_faculty(State(state): State<AppState>) -> ApiResult<Vec<Faculty>> {
    Ok(Json(state.repository.load_faculty()?))
}

async fn put_faculty(
    State(state): State<AppState>,
    Json(faculty): Json<Vec<Faculty>>,
) -> ApiResult<Vec<Faculty>> {
    state.repository.save_faculty(&faculty)?;
    Ok(Json(faculty))
}

async fn get_subjects(State(state): State<AppState>) -> ApiResult<Vec<Subject>> {
    Ok(Json(state.repository.load_subjects()?))
}

async fn put_subjects(
    State(state): State<AppState>,
    Json(subjects): Json<Vec<Subject>>,
) -> ApiResult<Vec<Subject>> {
    state.repository.save_subjects(&subjects)?;
    Ok(Json(subjects))
}

async fn get_classrooms(State(state): State<AppState>) -> ApiResult<Vec<Classroom>> {
    Ok(Json(state.repository.load_classrooms()?))
}

async fn put_classrooms(
    State(state): State<AppState>,
    Json(classrooms): Json<Vec<Classroom>>,
) -> ApiResult<Vec<Classroom>> {
    state.repository.save_classrooms(&classrooms)?;
    Ok(Json(classrooms))
}

async fn get_schedule(State(state): State<AppState>) -> ApiResult<Vec<ScheduleEntry>> {
    Ok(Json(state.repository.load_schedule()?))
}

async fn get_conflicts(State(state): State<AppState>) -> ApiResult<Vec<ConflictInfo>> {
    Ok(Json(state.repository.load_conflicts()?))
}

/// Schedules the stored inputs on the standard grid and stores the result.
async fn generate_handler(State(state): State<AppState>) -> ApiResult<SchedulingOutput> {
    let repo = &state.repository;
    let input = SchedulingInput {
        subjects: repo.load_subjects()?,
        faculty: repo.load_faculty()?,
        classrooms: repo.load_classrooms()?,
        time_slots: None,
    };

    let output = solver::solve(&input)?;
    repo.save_schedule(&output.schedule)?;
    repo.save_conflicts(&output.conflicts)?;
    Ok(Json(output))
}

async fn stats_handler(State(state): State<AppState>) -> ApiResult<DashboardStats> {
    let repo = &state.repository;
    Ok(Json(dashboard_stats(
        repo.load_faculty()?.len(),
        repo.load_subjects()?.len(),
        repo.load_classrooms()?.len(),
        &repo.load_schedule()?,
    )))
}

async fn resources_handler(State(state): State<AppState>) -> ApiResult<FreeResources> {
    let repo = &state.repository;
    Ok(Json(free_resources(
        &repo.load_faculty()?,
        &repo.load_classrooms()?,
        &repo.load_schedule()?,
    )))
}

/// Replaces the inputs with the demo set and drops any previous result.
async fn load_sample(State(state): State<AppState>) -> Result<StatusCode, AppError> {
    let repo = &state.repository;
    let sample = sample_data();
    repo.clear_all()?;
    repo.save_faculty(&sample.faculty)?;
    repo.save_subjects(&sample.subjects)?;
    repo.save_classrooms(&sample.classrooms)?;
    info!("Loaded sample data");
    Ok(StatusCode::NO_CONTENT)
}

async fn clear_data(State(state): State<AppState>) -> Result<StatusCode, AppError> {
    state.repository.clear_all()?;
    info!("Cleared all timetable data");
    Ok(StatusCode::NO_CONTENT)
}

pub fn create_router(state: AppState) -> Router {
    let api_v1 = Router::new()
        .route("/slots", get(list_slots))
        .route("/schedule/solve", post(solve_handler))
        .route("/schedule/generate", post(generate_handler))
        .route("/schedule", get(get_schedule))
        .route("/conflicts", get(get_conflicts))
        .route("/faculty", get(get_faculty).put(put_faculty))
        .route("/subjects", get(get_subjects).put(put_subjects))
        .route("/classrooms", get(get_classrooms).put(put_classrooms))
        .route("/stats", get(stats_handler))
        .route("/resources", get(resources_handler))
        .route("/sample", post(load_sample))
        .route("/data", delete(clear_data));

    Router::new()
        .route("/health", get(health))
        .nest("/v1", api_v1)
        .with_state(state)
}

pub async fn run_server(addr: &str, state: AppState) -> std::io::Result<()> {
    let app = create_router(state);
    let listener = tokio::net::TcpListener::bind(addr).await?;

    info!("Server running at http://{}", listener.local_addr()?);

    axum::serve(listener, app).await
}
