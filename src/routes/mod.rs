pub mod auth;
pub mod health;
pub mod professor;
pub mod student;

use std::any::Any;

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Router,
};
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};
use uuid::Uuid;

use crate::error::{Error, Result};
use crate::{views, AppState};

pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(auth::index))
        .route("/health", get(health::health))
        .route("/register", get(auth::register_page).post(auth::register))
        .route("/login", get(auth::login_page).post(auth::login))
        .route("/logout", get(auth::logout))
        .route("/professor/dashboard", get(professor::dashboard))
        .route(
            "/professor/quiz/create",
            get(professor::create_quiz_page).post(professor::create_quiz),
        )
        .route("/professor/quiz/:id/results", get(professor::quiz_results))
        .route("/professor/quiz/:id/delete", post(professor::delete_quiz))
        .route("/student/dashboard", get(student::dashboard))
        .route(
            "/student/quiz/:id/take",
            get(student::take_quiz_page).post(student::submit_quiz),
        )
        .route("/student/quiz/result/:id", get(student::view_result))
        .fallback(not_found)
        .with_state(state)
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TraceLayer::new_for_http())
}

pub async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, Html(views::errors::not_found()))
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic".to_string()
    };
    tracing::error!(panic = %detail, "handler panicked");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Html(views::errors::server_error()),
    )
        .into_response()
}

/// Ids that do not parse are treated like ids that do not exist.
pub(crate) fn parse_id(raw: &str) -> Result<Uuid> {
    Uuid::parse_str(raw).map_err(|_| Error::NotFound(format!("Invalid id: {}", raw)))
}
