use sqlx::{PgPool, Postgres, Transaction};
use uuid::Uuid;

use crate::dto::quiz_dto::NewQuiz;
use crate::error::Result;
use crate::models::question::Question;
use crate::models::quiz::{OwnedQuizSummary, Quiz, QuizListing};

#[derive(Clone)]
pub struct QuizService {
    pool: PgPool,
}

impl QuizService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Persists the quiz and all of its questions in one transaction.
    pub async fn create_quiz(&self, professor_id: Uuid, quiz: NewQuiz) -> Result<Quiz> {
        let mut tx = self.pool.begin().await?;
        match insert_quiz(&mut tx, professor_id, &quiz).await {
            Ok(created) => {
                tx.commit().await?;
                tracing::info!(
                    quiz_id = %created.id,
                    questions = quiz.questions.len(),
                    "quiz created"
                );
                Ok(created)
            }
            Err(e) => {
                if let Err(rollback_err) = tx.rollback().await {
                    tracing::error!(error = ?rollback_err, "quiz rollback failed");
                }
                Err(e)
            }
        }
    }

    pub async fn get_quiz(&self, quiz_id: Uuid) -> Result<Quiz> {
        let quiz = sqlx::query_as::<_, Quiz>(
            r#"SELECT id, title, professor_id, created_at FROM quizzes WHERE id = $1"#,
        )
        .bind(quiz_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(quiz)
    }

    pub async fn questions(&self, quiz_id: Uuid) -> Result<Vec<Question>> {
        let questions = sqlx::query_as::<_, Question>(
            r#"
            SELECT id, quiz_id, position, text, option_a, option_b, option_c, option_d, correct_option
            FROM questions
            WHERE quiz_id = $1
            ORDER BY position
            "#,
        )
        .bind(quiz_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(questions)
    }

    pub async fn list_owned(&self, professor_id: Uuid) -> Result<Vec<OwnedQuizSummary>> {
        let quizzes = sqlx::query_as::<_, OwnedQuizSummary>(
            r#"
            SELECT
                q.id,
                q.title,
                q.created_at,
                (SELECT COUNT(*) FROM questions qs WHERE qs.quiz_id = q.id) AS question_count,
                (SELECT COUNT(*) FROM results r WHERE r.quiz_id = q.id) AS result_count
            FROM quizzes q
            WHERE q.professor_id = $1
            ORDER BY q.created_at DESC, q.id
            "#,
        )
        .bind(professor_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(quizzes)
    }

    pub async fn list_all(&self) -> Result<Vec<QuizListing>> {
        let quizzes = sqlx::query_as::<_, QuizListing>(
            r#"
            SELECT
                q.id,
                q.title,
                q.created_at,
                u.username AS professor_username,
                (SELECT COUNT(*) FROM questions qs WHERE qs.quiz_id = q.id) AS question_count
            FROM quizzes q
            JOIN users u ON u.id = q.professor_id
            ORDER BY q.created_at DESC, q.id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(quizzes)
    }

    /// Questions and results go with the quiz through the cascading keys.
    pub async fn delete_quiz(&self, quiz_id: Uuid) -> Result<bool> {
        let result = sqlx::query(r#"DELETE FROM quizzes WHERE id = $1"#)
            .bind(quiz_id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

async fn insert_quiz(
    tx: &mut Transaction<'_, Postgres>,
    professor_id: Uuid,
    quiz: &NewQuiz,
) -> Result<Quiz> {
    let created = sqlx::query_as::<_, Quiz>(
        r#"
        INSERT INTO quizzes (title, professor_id)
        VALUES ($1, $2)
        RETURNING id, title, professor_id, created_at
        "#,
    )
    .bind(&quiz.title)
    .bind(professor_id)
    .fetch_one(&mut **tx)
    .await?;

    for (idx, question) in quiz.questions.iter().enumerate() {
        sqlx::query(
            r#"
            INSERT INTO questions (
                quiz_id, position, text, option_a, option_b, option_c, option_d, correct_option
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(created.id)
        .bind((idx as i32) + 1)
        .bind(&question.text)
        .bind(&question.option_a)
        .bind(&question.option_b)
        .bind(&question.option_c)
        .bind(&question.option_d)
        .bind(question.correct_option)
        .execute(&mut **tx)
        .await?;
    }

    Ok(created)
}
