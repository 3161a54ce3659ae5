//! JSON HTTP surface for the advisor
//!
//! # Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `POST` | `/ask` | Answer a natural-language question |
//! | `GET`  | `/phones` | List every catalog record |
//! | `GET`  | `/phones/{model_name}` | Fetch one record by (fuzzy) name |
//! | `GET`  | `/health` | Health check with catalog count |
//!
//! Input validation lives here, not in the core: questions shorter than three
//! characters are rejected with 400 before the advisor runs. Error responses
//! carry `{ "error": { "code", "message" } }`. All origins are permitted so
//! browser clients can call the API directly.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;
use uuid::Uuid;

use crate::advisor::{build_chain, PhoneAdvisor};
use crate::catalog::{InMemoryStore, PhoneRecord, PhoneStore};
use crate::config::Config;

/// Questions shorter than this are rejected before reaching the core
const MIN_QUESTION_CHARS: usize = 3;

/// Shared application state handed to every route handler
#[derive(Clone)]
struct AppState {
    advisor: Arc<PhoneAdvisor>,
    store: Arc<dyn PhoneStore>,
}

#[derive(Deserialize)]
struct QuestionRequest {
    #[serde(default)]
    question: String,
}

#[derive(Serialize)]
struct AnswerResponse {
    answer: String,
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    phone_count: usize,
}

#[derive(Serialize)]
struct ErrorDetail {
    code: &'static str,
    message: String,
}

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorDetail,
}

fn error_response(status: StatusCode, code: &'static str, message: impl Into<String>) -> Response {
    let body = ErrorBody {
        error: ErrorDetail {
            code,
            message: message.into(),
        },
    };
    (status, Json(body)).into_response()
}

/// Reject empty or too-short questions; the core never sees them
fn validate_question(question: &str) -> Result<(), String> {
    if question.trim().chars().count() < MIN_QUESTION_CHARS {
        return Err(format!(
            "Question must be at least {MIN_QUESTION_CHARS} characters"
        ));
    }
    Ok(())
}

/// Start the HTTP server from configuration. Binds `[server].bind`, seeds the
/// catalog, and serves until the process terminates.
pub async fn run_server(config: &Config) -> anyhow::Result<()> {
    let store: Arc<dyn PhoneStore> = Arc::new(InMemoryStore::load(&config.catalog.path)?);
    let advisor = Arc::new(PhoneAdvisor::new(store.clone(), build_chain(config)));

    let state = AppState { advisor, store };
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(config.server.bind.as_str()).await?;
    info!(bind = %config.server.bind, "phone advisor API listening");
    axum::serve(listener, app).await?;

    Ok(())
}

fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/ask", post(ask))
        .route("/phones", get(list_phones))
        .route("/phones/:model_name", get(get_phone))
        .route("/health", get(health))
        .layer(cors)
        .with_state(state)
}

async fn ask(State(state): State<AppState>, Json(request): Json<QuestionRequest>) -> Response {
    if let Err(message) = validate_question(&request.question) {
        return error_response(StatusCode::BAD_REQUEST, "bad_request", message);
    }

    let request_id = Uuid::new_v4();
    info!(%request_id, "handling question");

    let answer = state.advisor.answer(&request.question).await;
    Json(AnswerResponse { answer }).into_response()
}

async fn list_phones(State(state): State<AppState>) -> Json<Vec<PhoneRecord>> {
    Json(state.store.list_all())
}

async fn get_phone(
    State(state): State<AppState>,
    Path(model_name): Path<String>,
) -> Response {
    match state.store.find_by_name(&model_name) {
        Some(record) => Json(record).into_response(),
        None => error_response(
            StatusCode::NOT_FOUND,
            "not_found",
            format!("Phone '{model_name}' not found"),
        ),
    }
}

async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        phone_count: state.store.list_all().len(),
    })
}
