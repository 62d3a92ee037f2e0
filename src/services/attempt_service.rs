use std::collections::HashMap;

use sqlx::{PgPool, Postgres, Transaction};
use uuid::Uuid;

use crate::error::Result;
use crate::models::question::Question;
use crate::models::quiz_result::QuizResult;
use crate::services::grading_service::GradingService;

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    Recorded(QuizResult),
    /// The student already has a result for this quiz; holds its id.
    AlreadyTaken(Uuid),
}

#[derive(Clone)]
pub struct AttemptService {
    pool: PgPool,
}

impl AttemptService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn existing_result(&self, student_id: Uuid, quiz_id: Uuid) -> Result<Option<Uuid>> {
        let id = sqlx::query_scalar(
            r#"SELECT id FROM results WHERE student_id = $1 AND quiz_id = $2"#,
        )
        .bind(student_id)
        .bind(quiz_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(id)
    }

    /// Grades the submitted form against the quiz's current questions and
    /// records the result. A student gets at most one result per quiz; the
    /// unique key on (student_id, quiz_id) settles concurrent submissions.
    pub async fn submit(
        &self,
        student_id: Uuid,
        quiz_id: Uuid,
        answers: &HashMap<String, String>,
    ) -> Result<SubmitOutcome> {
        if let Some(existing) = self.existing_result(student_id, quiz_id).await? {
            return Ok(SubmitOutcome::AlreadyTaken(existing));
        }

        let mut tx = self.pool.begin().await?;
        let recorded = match record_result(&mut tx, student_id, quiz_id, answers).await {
            Ok(recorded) => recorded,
            Err(e) => {
                if let Err(rollback_err) = tx.rollback().await {
                    tracing::error!(error = ?rollback_err, "submission rollback failed");
                }
                return Err(e);
            }
        };

        match recorded {
            Some(result) => {
                tx.commit().await?;
                tracing::info!(
                    result_id = %result.id,
                    quiz_id = %quiz_id,
                    score = result.score,
                    total = result.total_questions,
                    "quiz submitted"
                );
                Ok(SubmitOutcome::Recorded(result))
            }
            None => {
                tx.rollback().await?;
                let existing: Uuid = sqlx::query_scalar(
                    r#"SELECT id FROM results WHERE student_id = $1 AND quiz_id = $2"#,
                )
                .bind(student_id)
                .bind(quiz_id)
                .fetch_one(&self.pool)
                .await?;
                tracing::warn!(result_id = %existing, "concurrent submission lost the race");
                Ok(SubmitOutcome::AlreadyTaken(existing))
            }
        }
    }
}

async fn record_result(
    tx: &mut Transaction<'_, Postgres>,
    student_id: Uuid,
    quiz_id: Uuid,
    answers: &HashMap<String, String>,
) -> Result<Option<QuizResult>> {
    let questions = sqlx::query_as::<_, Question>(
        r#"
        SELECT id, quiz_id, position, text, option_a, option_b, option_c, option_d, correct_option
        FROM questions
        WHERE quiz_id = $1
        ORDER BY position
        "#,
    )
    .bind(quiz_id)
    .fetch_all(&mut **tx)
    .await?;

    let grade = GradingService::grade(&questions, answers);

    let result = sqlx::query_as::<_, QuizResult>(
        r#"
        INSERT INTO results (student_id, quiz_id, score, total_questions)
        VALUES ($1, $2, $3, $4)
        ON CONFLICT ON CONSTRAINT results_student_quiz_key DO NOTHING
        RETURNING id, student_id, quiz_id, score, total_questions, submitted_at
        "#,
    )
    .bind(student_id)
    .bind(quiz_id)
    .bind(grade.score)
    .bind(grade.total)
    .fetch_optional(&mut **tx)
    .await?;

    Ok(result)
}
