use std::collections::{BTreeMap, HashMap};

use crate::models::question::AnswerOption;

pub const MAX_TITLE_LEN: usize = 150;
pub const MAX_OPTION_LEN: usize = 200;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DraftError {
    #[error("Quiz title is required.")]
    MissingTitle,
    #[error("Quiz title must be at most 150 characters.")]
    TitleTooLong,
    #[error("All fields are required for Question {0}. Quiz not saved.")]
    IncompleteQuestion(usize),
    #[error("Invalid correct option selected for Question {0}. Quiz not saved.")]
    InvalidCorrectOption(usize),
    #[error("Options for Question {0} must be at most 200 characters. Quiz not saved.")]
    OptionTooLong(usize),
    #[error("A quiz must have at least one question. Quiz not saved.")]
    NoQuestions,
}

/// One question block exactly as typed into the authoring form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuestionDraft {
    pub index: usize,
    pub text: String,
    pub option_a: String,
    pub option_b: String,
    pub option_c: String,
    pub option_d: String,
    pub correct: String,
}

impl QuestionDraft {
    fn is_blank(&self) -> bool {
        [
            &self.text,
            &self.option_a,
            &self.option_b,
            &self.option_c,
            &self.option_d,
            &self.correct,
        ]
        .iter()
        .all(|v| v.is_empty())
    }

    fn validate(self) -> Result<NewQuestion, DraftError> {
        let options = [
            &self.option_a,
            &self.option_b,
            &self.option_c,
            &self.option_d,
        ];
        if self.text.is_empty() || self.correct.is_empty() || options.iter().any(|o| o.is_empty())
        {
            return Err(DraftError::IncompleteQuestion(self.index));
        }
        let correct_option = AnswerOption::parse(&self.correct)
            .ok_or(DraftError::InvalidCorrectOption(self.index))?;
        if options.iter().any(|o| o.chars().count() > MAX_OPTION_LEN) {
            return Err(DraftError::OptionTooLong(self.index));
        }

        Ok(NewQuestion {
            text: self.text,
            option_a: self.option_a,
            option_b: self.option_b,
            option_c: self.option_c,
            option_d: self.option_d,
            correct_option,
        })
    }
}

/// Authoring form collected into an ordered list of question blocks.
///
/// Fields are named `quiz_title` and `q{n}_text`, `q{n}_opt_a` .. `q{n}_opt_d`,
/// `q{n}_correct` with `n` starting at 1. Blocks are ordered by `n`; gaps in the
/// numbering are allowed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuizDraft {
    pub title: String,
    pub questions: Vec<QuestionDraft>,
}

impl QuizDraft {
    pub fn from_form(form: &HashMap<String, String>) -> Self {
        let title = form
            .get("quiz_title")
            .map(|t| t.trim().to_string())
            .unwrap_or_default();

        let mut blocks: BTreeMap<usize, QuestionDraft> = BTreeMap::new();
        for (key, value) in form {
            let Some((index, field)) = parse_question_key(key) else {
                continue;
            };
            let block = blocks.entry(index).or_insert_with(|| QuestionDraft {
                index,
                ..Default::default()
            });
            let value = value.trim().to_string();
            match field {
                "text" => block.text = value,
                "opt_a" => block.option_a = value,
                "opt_b" => block.option_b = value,
                "opt_c" => block.option_c = value,
                "opt_d" => block.option_d = value,
                "correct" => block.correct = value,
                _ => {}
            }
        }

        Self {
            title,
            questions: blocks.into_values().collect(),
        }
    }

    /// Validates the whole draft. Nothing is returned unless every question
    /// passes, so a failure never leaves a partial quiz behind.
    pub fn validate(self) -> Result<NewQuiz, DraftError> {
        if self.title.is_empty() {
            return Err(DraftError::MissingTitle);
        }
        if self.title.chars().count() > MAX_TITLE_LEN {
            return Err(DraftError::TitleTooLong);
        }

        let questions = self
            .questions
            .into_iter()
            .filter(|q| !q.is_blank())
            .map(QuestionDraft::validate)
            .collect::<Result<Vec<_>, _>>()?;
        if questions.is_empty() {
            return Err(DraftError::NoQuestions);
        }

        Ok(NewQuiz {
            title: self.title,
            questions,
        })
    }
}

fn parse_question_key(key: &str) -> Option<(usize, &str)> {
    let (number, field) = key.strip_prefix('q')?.split_once('_')?;
    let index: usize = number.parse().ok()?;
    (index > 0).then_some((index, field))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewQuestion {
    pub text: String,
    pub option_a: String,
    pub option_b: String,
    pub option_c: String,
    pub option_d: String,
    pub correct_option: AnswerOption,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewQuiz {
    pub title: String,
    pub questions: Vec<NewQuestion>,
}
