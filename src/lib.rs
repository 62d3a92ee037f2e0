pub mod config;
pub mod database;
pub mod dto;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod utils;
pub mod views;

use crate::middleware::session::SessionSettings;
use crate::services::{
    attempt_service::AttemptService, quiz_service::QuizService, result_service::ResultService,
    user_service::UserService,
};
use sqlx::PgPool;

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub sessions: SessionSettings,
    pub user_service: UserService,
    pub quiz_service: QuizService,
    pub attempt_service: AttemptService,
    pub result_service: ResultService,
}

impl AppState {
    pub fn new(pool: PgPool, sessions: SessionSettings) -> Self {
        let user_service = UserService::new(pool.clone());
        let quiz_service = QuizService::new(pool.clone());
        let attempt_service = AttemptService::new(pool.clone());
        let result_service = ResultService::new(pool.clone());

        Self {
            pool,
            sessions,
            user_service,
            quiz_service,
            attempt_service,
            result_service,
        }
    }
}
