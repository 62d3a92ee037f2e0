use std::collections::{HashMap, HashSet};

use axum::{
    extract::{Form, Path, State},
    response::{Html, IntoResponse, Response},
};
use uuid::Uuid;

use crate::error::Result;
use crate::middleware::auth::CurrentStudent;
use crate::middleware::flash::{self, Flashes, Level};
use crate::routes::parse_id;
use crate::services::attempt_service::SubmitOutcome;
use crate::{views, AppState};

const ALREADY_TAKEN: &str = "You have already taken this quiz.";

fn result_path(result_id: Uuid) -> String {
    format!("/student/quiz/result/{}", result_id)
}

#[axum::debug_handler(state = AppState)]
pub async fn dashboard(
    State(state): State<AppState>,
    CurrentStudent(user): CurrentStudent,
    flashes: Flashes,
) -> Result<Response> {
    let quizzes = state.quiz_service.list_all().await?;
    let results = state.result_service.results_for_student(user.id).await?;
    let taken: HashSet<Uuid> = results.iter().map(|r| r.quiz_id).collect();

    let page = views::student::dashboard(&user, &flashes, &quizzes, &results, &taken);
    Ok((flashes, Html(page)).into_response())
}

#[axum::debug_handler(state = AppState)]
pub async fn take_quiz_page(
    State(state): State<AppState>,
    CurrentStudent(user): CurrentStudent,
    Path(id): Path<String>,
    flashes: Flashes,
) -> Result<Response> {
    let quiz = state.quiz_service.get_quiz(parse_id(&id)?).await?;
    if let Some(existing) = state.attempt_service.existing_result(user.id, quiz.id).await? {
        return Ok(flash::redirect(&result_path(existing), Level::Warning, ALREADY_TAKEN));
    }

    let questions = state.quiz_service.questions(quiz.id).await?;
    let page = views::student::take_quiz(&user, &flashes, &quiz, &questions);
    Ok((flashes, Html(page)).into_response())
}

#[axum::debug_handler(state = AppState)]
pub async fn submit_quiz(
    State(state): State<AppState>,
    CurrentStudent(user): CurrentStudent,
    Path(id): Path<String>,
    Form(answers): Form<HashMap<String, String>>,
) -> Result<Response> {
    let quiz = state.quiz_service.get_quiz(parse_id(&id)?).await?;

    match state.attempt_service.submit(user.id, quiz.id, &answers).await {
        Ok(SubmitOutcome::Recorded(result)) => Ok(flash::redirect(
            &result_path(result.id),
            Level::Success,
            "Quiz submitted successfully!",
        )),
        Ok(SubmitOutcome::AlreadyTaken(existing)) => Ok(flash::redirect(
            &result_path(existing),
            Level::Warning,
            ALREADY_TAKEN,
        )),
        Err(e) => {
            tracing::error!(error = ?e, quiz_id = %quiz.id, student = %user.username, "quiz submission failed");
            Ok(flash::redirect(
                &format!("/student/quiz/{}/take", quiz.id),
                Level::Danger,
                "An error occurred while submitting the quiz.",
            ))
        }
    }
}

#[axum::debug_handler(state = AppState)]
pub async fn view_result(
    State(state): State<AppState>,
    CurrentStudent(user): CurrentStudent,
    Path(id): Path<String>,
    flashes: Flashes,
) -> Result<Response> {
    let result = state.result_service.get_result(parse_id(&id)?).await?;
    if result.student_id != user.id {
        tracing::warn!(result_id = %result.id, student = %user.username, "result access denied");
        return Ok(flash::redirect(
            "/student/dashboard",
            Level::Danger,
            "You do not have permission to view this result.",
        ));
    }

    let page = views::student::result(&user, &flashes, &result);
    Ok((flashes, Html(page)).into_response())
}
