use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Quiz {
    pub id: Uuid,
    pub title: String,
    pub professor_id: Uuid,
    pub created_at: DateTime<Utc>,
}

/// Row of the professor dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct OwnedQuizSummary {
    pub id: Uuid,
    pub title: String,
    pub created_at: DateTime<Utc>,
    pub question_count: i64,
    pub result_count: i64,
}

/// Row of the student dashboard's quiz list.
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct QuizListing {
    pub id: Uuid,
    pub title: String,
    pub created_at: DateTime<Utc>,
    pub professor_username: String,
    pub question_count: i64,
}
