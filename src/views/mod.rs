//! Server-rendered pages. Every value that came from a user goes through
//! [`escape_html`] before it is written into markup.

pub mod auth;
pub mod errors;
pub mod professor;
pub mod student;

use crate::middleware::flash::Flashes;
use crate::middleware::session::SessionUser;

pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(ch),
        }
    }
    out
}

fn nav(user: Option<&SessionUser>) -> String {
    match user {
        Some(user) => format!(
            r#"<nav><a href="{home}">Dashboard</a> <span>Signed in as {name} ({role})</span> <a href="/logout">Log out</a></nav>"#,
            home = user.role.home_path(),
            name = escape_html(&user.username),
            role = user.role,
        ),
        None => r#"<nav><a href="/login">Log in</a> <a href="/register">Register</a></nav>"#
            .to_string(),
    }
}

fn flash_list(flashes: &Flashes) -> String {
    flashes
        .iter()
        .map(|f| {
            format!(
                r#"<div class="flash flash-{}">{}</div>"#,
                f.level.as_str(),
                escape_html(&f.text)
            )
        })
        .collect()
}

pub fn layout(title: &str, user: Option<&SessionUser>, flashes: &Flashes, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{title} - Quiz Portal</title>
</head>
<body>
{nav}
<main>
{flashes}
<h1>{title}</h1>
{body}
</main>
</body>
</html>
"#,
        title = escape_html(title),
        nav = nav(user),
        flashes = flash_list(flashes),
        body = body,
    )
}
