use super::{escape_html, layout};
use crate::middleware::flash::Flashes;

pub fn not_found() -> String {
    layout(
        "Page not found",
        None,
        &Flashes::default(),
        r#"<p>The page you requested does not exist.</p><p><a href="/">Go home</a></p>"#,
    )
}

pub fn request_rejected(message: &str) -> String {
    layout(
        "Request rejected",
        None,
        &Flashes::default(),
        &format!(
            r#"<p>{}</p><p><a href="/">Go home</a></p>"#,
            escape_html(message)
        ),
    )
}

pub fn server_error() -> String {
    layout(
        "Something went wrong",
        None,
        &Flashes::default(),
        r#"<p>An unexpected error occurred. Please try again later.</p><p><a href="/">Go home</a></p>"#,
    )
}
