use std::collections::HashSet;

use uuid::Uuid;

use super::{escape_html, layout};
use crate::middleware::flash::Flashes;
use crate::middleware::session::SessionUser;
use crate::models::question::{AnswerOption, Question};
use crate::models::quiz::{Quiz, QuizListing};
use crate::models::quiz_result::{percentage, StudentResult};
use crate::utils::time;

pub fn dashboard(
    user: &SessionUser,
    flashes: &Flashes,
    quizzes: &[QuizListing],
    results: &[StudentResult],
    taken: &HashSet<Uuid>,
) -> String {
    let mut body = String::from("<h2>Available quizzes</h2>");
    if quizzes.is_empty() {
        body.push_str("<p>No quizzes have been published yet.</p>");
    } else {
        body.push_str("<ul>");
        for quiz in quizzes {
            let action = if taken.contains(&quiz.id) {
                "<span>Completed</span>".to_string()
            } else {
                format!(r#"<a href="/student/quiz/{}/take">Take quiz</a>"#, quiz.id)
            };
            body.push_str(&format!(
                "<li>{title} by {author} ({count} questions) {action}</li>",
                title = escape_html(&quiz.title),
                author = escape_html(&quiz.professor_username),
                count = quiz.question_count,
            ));
        }
        body.push_str("</ul>");
    }

    body.push_str("<h2>Your results</h2>");
    if results.is_empty() {
        body.push_str("<p>You have not taken any quizzes yet.</p>");
    } else {
        body.push_str(
            "<table><thead><tr><th>Quiz</th><th>Score</th><th>Submitted</th><th></th></tr></thead><tbody>",
        );
        for result in results {
            body.push_str(&format!(
                r#"<tr><td>{title}</td><td>{score} / {total}</td><td>{at}</td><td><a href="/student/quiz/result/{id}">View</a></td></tr>"#,
                title = escape_html(&result.quiz_title),
                score = result.score,
                total = result.total_questions,
                at = time::display(result.submitted_at),
                id = result.id,
            ));
        }
        body.push_str("</tbody></table>");
    }
    layout("Student Dashboard", Some(user), flashes, &body)
}

fn question_fieldset(number: usize, question: &Question) -> String {
    let field = question.answer_field();
    let options: String = AnswerOption::ALL
        .iter()
        .map(|opt| {
            format!(
                r#"<label><input type="radio" name="{field}" value="{letter}"> {letter_upper}. {text}</label>"#,
                letter = opt.letter(),
                letter_upper = opt.letter().to_uppercase(),
                text = escape_html(question.option_text(*opt)),
            )
        })
        .collect();
    format!(
        "<fieldset><legend>{number}. {text}</legend>{options}</fieldset>",
        text = escape_html(&question.text),
    )
}

pub fn take_quiz(
    user: &SessionUser,
    flashes: &Flashes,
    quiz: &Quiz,
    questions: &[Question],
) -> String {
    let fieldsets: String = questions
        .iter()
        .enumerate()
        .map(|(idx, q)| question_fieldset(idx + 1, q))
        .collect();
    let body = format!(
        r#"<form method="post" action="/student/quiz/{id}/take">
{fieldsets}
<button type="submit">Submit answers</button>
</form>"#,
        id = quiz.id,
    );
    layout(&format!("Take Quiz: {}", quiz.title), Some(user), flashes, &body)
}

pub fn result(user: &SessionUser, flashes: &Flashes, result: &StudentResult) -> String {
    let body = format!(
        r#"<p>Quiz: {title}</p>
<p>Score: <strong>{score} / {total}</strong> ({pct:.0}%)</p>
<p>Submitted: {at}</p>
<p><a href="/student/dashboard">Back to dashboard</a></p>"#,
        title = escape_html(&result.quiz_title),
        score = result.score,
        total = result.total_questions,
        pct = percentage(result.score, result.total_questions),
        at = time::display(result.submitted_at),
    );
    layout("Quiz Result", Some(user), flashes, &body)
}
