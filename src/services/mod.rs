pub mod attempt_service;
pub mod grading_service;
pub mod quiz_service;
pub mod result_service;
pub mod user_service;
