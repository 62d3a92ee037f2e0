use std::collections::HashMap;

use crate::models::question::{AnswerOption, Question};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grade {
    pub score: i32,
    pub total: i32,
}

pub struct GradingService;

impl GradingService {
    /// One point per question whose submitted letter matches the stored
    /// correct option. Missing or unparseable answers score nothing.
    pub fn grade(questions: &[Question], answers: &HashMap<String, String>) -> Grade {
        let score = questions
            .iter()
            .filter(|q| {
                answers
                    .get(&q.answer_field())
                    .and_then(|raw| AnswerOption::parse(raw))
                    == Some(q.correct_option)
            })
            .count();

        Grade {
            score: score as i32,
            total: questions.len() as i32,
        }
    }
}
