#![allow(dead_code)]

use axum::{
    body::{to_bytes, Body},
    http::{header, Request, Response},
    Router,
};
use tower::ServiceExt;

pub async fn send(app: &Router, req: Request<Body>) -> Response<Body> {
    app.clone().oneshot(req).await.expect("router is infallible")
}

pub fn get(uri: &str, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    builder.body(Body::empty()).unwrap()
}

pub fn post_form(uri: &str, cookie: Option<&str>, fields: &[(&str, &str)]) -> Request<Body> {
    let body = url::form_urlencoded::Serializer::new(String::new())
        .extend_pairs(fields.iter())
        .finish();
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    builder.body(Body::from(body)).unwrap()
}

pub fn location(resp: &Response<Body>) -> String {
    resp.headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string()
}

fn set_cookie_value(resp: &Response<Body>, name: &str) -> Option<String> {
    let prefix = format!("{}=", name);
    resp.headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .find_map(|v| v.strip_prefix(&prefix).map(str::to_string))
        .map(|rest| rest.split(';').next().unwrap_or_default().to_string())
}

/// Decoded text of the notice set by a redirect.
pub fn flash_text(resp: &Response<Body>) -> Option<String> {
    let raw = set_cookie_value(resp, "quiz_flash")?;
    url::form_urlencoded::parse(raw.as_bytes())
        .next()
        .map(|(_, text)| text.into_owned())
}

/// `Cookie` header value carrying the session set by a login response.
pub fn session_cookie(resp: &Response<Body>) -> Option<String> {
    set_cookie_value(resp, "quiz_session")
        .filter(|v| !v.is_empty())
        .map(|token| format!("quiz_session={}", token))
}

pub fn clears_cookie(resp: &Response<Body>, name: &str) -> bool {
    set_cookie_value(resp, name).map_or(false, |v| v.is_empty())
}

pub async fn body_text(resp: Response<Body>) -> String {
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}
