use super::{escape_html, layout};
use crate::middleware::flash::Flashes;
use crate::middleware::session::SessionUser;
use crate::models::quiz::{OwnedQuizSummary, Quiz};
use crate::models::quiz_result::{percentage, SubmissionRow};
use crate::utils::time;

pub fn dashboard(user: &SessionUser, flashes: &Flashes, quizzes: &[OwnedQuizSummary]) -> String {
    let mut body = String::from(r#"<p><a href="/professor/quiz/create">Create a new quiz</a></p>"#);
    if quizzes.is_empty() {
        body.push_str("<p>You have not created any quizzes yet.</p>");
    } else {
        body.push_str(
            "<table><thead><tr><th>Title</th><th>Questions</th><th>Submissions</th><th>Created</th><th></th></tr></thead><tbody>",
        );
        for quiz in quizzes {
            body.push_str(&format!(
                r#"<tr><td>{title}</td><td>{questions}</td><td>{results}</td><td>{created}</td><td><a href="/professor/quiz/{id}/results">Results</a> <form method="post" action="/professor/quiz/{id}/delete"><button type="submit">Delete</button></form></td></tr>"#,
                title = escape_html(&quiz.title),
                questions = quiz.question_count,
                results = quiz.result_count,
                created = time::display(quiz.created_at),
                id = quiz.id,
            ));
        }
        body.push_str("</tbody></table>");
    }
    layout("Professor Dashboard", Some(user), flashes, &body)
}

fn question_block(n: usize) -> String {
    let options: String = ["a", "b", "c", "d"]
        .iter()
        .map(|opt| {
            format!(
                r#"<label>Option {upper} <input name="q{n}_opt_{opt}" maxlength="200"></label>"#,
                upper = opt.to_uppercase(),
            )
        })
        .collect();
    format!(
        r#"<fieldset><legend>Question {n}</legend>
<label>Text <textarea name="q{n}_text"></textarea></label>
{options}
<label>Correct option
<select name="q{n}_correct"><option value=""></option><option value="a">A</option><option value="b">B</option><option value="c">C</option><option value="d">D</option></select>
</label>
</fieldset>"#
    )
}

/// Blocks left completely empty are ignored on submit.
pub fn create_quiz(user: &SessionUser, flashes: &Flashes, blocks: usize) -> String {
    let questions: String = (1..=blocks).map(question_block).collect();
    let body = format!(
        r#"<form method="post" action="/professor/quiz/create">
<label>Quiz title <input name="quiz_title" maxlength="150" required></label>
{questions}
<button type="submit">Save quiz</button>
</form>
<p><a href="/professor/quiz/create?questions={more}">Need more question slots?</a></p>"#,
        more = blocks + 5,
    );
    layout("Create Quiz", Some(user), flashes, &body)
}

pub fn quiz_results(
    user: &SessionUser,
    flashes: &Flashes,
    quiz: &Quiz,
    rows: &[SubmissionRow],
) -> String {
    let mut body = String::new();
    if rows.is_empty() {
        body.push_str("<p>No student has taken this quiz yet.</p>");
    } else {
        body.push_str(
            "<table><thead><tr><th>Student</th><th>Score</th><th>Percentage</th><th>Submitted</th></tr></thead><tbody>",
        );
        for row in rows {
            body.push_str(&format!(
                "<tr><td>{student}</td><td>{score} / {total}</td><td>{pct:.0}%</td><td>{at}</td></tr>",
                student = escape_html(&row.student_username),
                score = row.score,
                total = row.total_questions,
                pct = percentage(row.score, row.total_questions),
                at = time::display(row.submitted_at),
            ));
        }
        body.push_str("</tbody></table>");
    }
    body.push_str(r#"<p><a href="/professor/dashboard">Back to dashboard</a></p>"#);
    layout(
        &format!("Results for {}", quiz.title),
        Some(user),
        flashes,
        &body,
    )
}
