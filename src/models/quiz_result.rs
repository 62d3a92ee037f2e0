use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct QuizResult {
    pub id: Uuid,
    pub student_id: Uuid,
    pub quiz_id: Uuid,
    pub score: i32,
    pub total_questions: i32,
    pub submitted_at: DateTime<Utc>,
}

/// A result joined with the title of its quiz.
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct StudentResult {
    pub id: Uuid,
    pub student_id: Uuid,
    pub quiz_id: Uuid,
    pub quiz_title: String,
    pub score: i32,
    pub total_questions: i32,
    pub submitted_at: DateTime<Utc>,
}

/// A result joined with the submitting student's username.
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct SubmissionRow {
    pub id: Uuid,
    pub student_username: String,
    pub score: i32,
    pub total_questions: i32,
    pub submitted_at: DateTime<Utc>,
}

pub fn percentage(score: i32, total_questions: i32) -> f64 {
    if total_questions > 0 {
        (score as f64 / total_questions as f64) * 100.0
    } else {
        0.0
    }
}
