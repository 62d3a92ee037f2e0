use std::collections::HashMap;

use axum::{
    extract::{Form, Path, Query, State},
    response::{Html, IntoResponse, Response},
};
use serde::Deserialize;

use crate::dto::quiz_dto::QuizDraft;
use crate::error::Result;
use crate::middleware::auth::CurrentProfessor;
use crate::middleware::flash::{self, Flashes, Level};
use crate::routes::parse_id;
use crate::{views, AppState};

const DEFAULT_BLOCKS: usize = 5;
const MAX_BLOCKS: usize = 50;

#[axum::debug_handler(state = AppState)]
pub async fn dashboard(
    State(state): State<AppState>,
    CurrentProfessor(user): CurrentProfessor,
    flashes: Flashes,
) -> Result<Response> {
    let quizzes = state.quiz_service.list_owned(user.id).await?;
    let page = views::professor::dashboard(&user, &flashes, &quizzes);
    Ok((flashes, Html(page)).into_response())
}

#[derive(Debug, Deserialize)]
pub struct CreateQuizQuery {
    pub questions: Option<usize>,
}

#[axum::debug_handler(state = AppState)]
pub async fn create_quiz_page(
    CurrentProfessor(user): CurrentProfessor,
    flashes: Flashes,
    Query(query): Query<CreateQuizQuery>,
) -> Response {
    let blocks = query
        .questions
        .unwrap_or(DEFAULT_BLOCKS)
        .clamp(1, MAX_BLOCKS);
    let page = views::professor::create_quiz(&user, &flashes, blocks);
    (flashes, Html(page)).into_response()
}

#[axum::debug_handler(state = AppState)]
pub async fn create_quiz(
    State(state): State<AppState>,
    CurrentProfessor(user): CurrentProfessor,
    Form(form): Form<HashMap<String, String>>,
) -> Response {
    let quiz = match QuizDraft::from_form(&form).validate() {
        Ok(quiz) => quiz,
        Err(e) => return flash::redirect("/professor/quiz/create", Level::Danger, e.to_string()),
    };

    match state.quiz_service.create_quiz(user.id, quiz).await {
        Ok(_) => flash::redirect(
            "/professor/dashboard",
            Level::Success,
            "Quiz created successfully!",
        ),
        Err(e) => {
            tracing::error!(error = ?e, professor = %user.username, "quiz creation failed");
            flash::redirect(
                "/professor/quiz/create",
                Level::Danger,
                "An error occurred while creating the quiz.",
            )
        }
    }
}

#[axum::debug_handler(state = AppState)]
pub async fn quiz_results(
    State(state): State<AppState>,
    CurrentProfessor(user): CurrentProfessor,
    Path(id): Path<String>,
    flashes: Flashes,
) -> Result<Response> {
    let quiz = state.quiz_service.get_quiz(parse_id(&id)?).await?;
    if quiz.professor_id != user.id {
        tracing::warn!(quiz_id = %quiz.id, professor = %user.username, "results access denied");
        return Ok(flash::redirect(
            "/professor/dashboard",
            Level::Danger,
            "You do not have permission to view results for this quiz.",
        ));
    }

    let rows = state.result_service.results_for_quiz(quiz.id).await?;
    let page = views::professor::quiz_results(&user, &flashes, &quiz, &rows);
    Ok((flashes, Html(page)).into_response())
}

#[axum::debug_handler(state = AppState)]
pub async fn delete_quiz(
    State(state): State<AppState>,
    CurrentProfessor(user): CurrentProfessor,
    Path(id): Path<String>,
) -> Result<Response> {
    let quiz = state.quiz_service.get_quiz(parse_id(&id)?).await?;
    if quiz.professor_id != user.id {
        tracing::warn!(quiz_id = %quiz.id, professor = %user.username, "quiz delete denied");
        return Ok(flash::redirect(
            "/professor/dashboard",
            Level::Danger,
            "You do not have permission to delete this quiz.",
        ));
    }

    state.quiz_service.delete_quiz(quiz.id).await?;
    tracing::info!(quiz_id = %quiz.id, professor = %user.username, "quiz deleted");
    Ok(flash::redirect(
        "/professor/dashboard",
        Level::Success,
        "Quiz deleted.",
    ))
}
