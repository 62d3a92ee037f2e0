use sqlx::PgPool;
use uuid::Uuid;

use crate::error::Result;
use crate::models::quiz_result::{StudentResult, SubmissionRow};

#[derive(Clone)]
pub struct ResultService {
    pool: PgPool,
}

impl ResultService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// All submissions for a quiz, most recent first.
    pub async fn results_for_quiz(&self, quiz_id: Uuid) -> Result<Vec<SubmissionRow>> {
        let rows = sqlx::query_as::<_, SubmissionRow>(
            r#"
            SELECT r.id, u.username AS student_username, r.score, r.total_questions, r.submitted_at
            FROM results r
            JOIN users u ON u.id = r.student_id
            WHERE r.quiz_id = $1
            ORDER BY r.submitted_at DESC, r.id
            "#,
        )
        .bind(quiz_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    pub async fn results_for_student(&self, student_id: Uuid) -> Result<Vec<StudentResult>> {
        let rows = sqlx::query_as::<_, StudentResult>(
            r#"
            SELECT r.id, r.student_id, r.quiz_id, q.title AS quiz_title,
                   r.score, r.total_questions, r.submitted_at
            FROM results r
            JOIN quizzes q ON q.id = r.quiz_id
            WHERE r.student_id = $1
            ORDER BY r.submitted_at DESC, r.id
            "#,
        )
        .bind(student_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    pub async fn get_result(&self, result_id: Uuid) -> Result<StudentResult> {
        let row = sqlx::query_as::<_, StudentResult>(
            r#"
            SELECT r.id, r.student_id, r.quiz_id, q.title AS quiz_title,
                   r.score, r.total_questions, r.submitted_at
            FROM results r
            JOIN quizzes q ON q.id = r.quiz_id
            WHERE r.id = $1
            "#,
        )
        .bind(result_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }
}
