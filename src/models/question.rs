use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "answer_option", rename_all = "lowercase")]
pub enum AnswerOption {
    A,
    B,
    C,
    D,
}

impl AnswerOption {
    pub const ALL: [AnswerOption; 4] = [
        AnswerOption::A,
        AnswerOption::B,
        AnswerOption::C,
        AnswerOption::D,
    ];

    pub fn letter(&self) -> &'static str {
        match self {
            AnswerOption::A => "a",
            AnswerOption::B => "b",
            AnswerOption::C => "c",
            AnswerOption::D => "d",
        }
    }

    /// Case-insensitive, whitespace-tolerant parse of a submitted letter.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "a" => Some(AnswerOption::A),
            "b" => Some(AnswerOption::B),
            "c" => Some(AnswerOption::C),
            "d" => Some(AnswerOption::D),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, FromRow)]
pub struct Question {
    pub id: Uuid,
    pub quiz_id: Uuid,
    pub position: i32,
    pub text: String,
    pub option_a: String,
    pub option_b: String,
    pub option_c: String,
    pub option_d: String,
    pub correct_option: AnswerOption,
}

impl Question {
    pub fn option_text(&self, option: AnswerOption) -> &str {
        match option {
            AnswerOption::A => &self.option_a,
            AnswerOption::B => &self.option_b,
            AnswerOption::C => &self.option_c,
            AnswerOption::D => &self.option_d,
        }
    }

    /// Name of the form field carrying the answer to this question.
    pub fn answer_field(&self) -> String {
        format!("question_{}", self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!(AnswerOption::parse("A"), Some(AnswerOption::A));
        assert_eq!(AnswerOption::parse(" d "), Some(AnswerOption::D));
        assert_eq!(AnswerOption::parse("e"), None);
        assert_eq!(AnswerOption::parse("ab"), None);
        assert_eq!(AnswerOption::parse(""), None);
    }
}
