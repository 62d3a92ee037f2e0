use std::convert::Infallible;

use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header, request::Parts, HeaderValue},
    response::{IntoResponse, IntoResponseParts, Redirect, Response, ResponseParts},
};

use crate::middleware::session::read_cookie;

pub const FLASH_COOKIE: &str = "quiz_flash";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Success,
    Info,
    Warning,
    Danger,
}

impl Level {
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Success => "success",
            Level::Info => "info",
            Level::Warning => "warning",
            Level::Danger => "danger",
        }
    }

    fn parse(raw: &str) -> Option<Self> {
        match raw {
            "success" => Some(Level::Success),
            "info" => Some(Level::Info),
            "warning" => Some(Level::Warning),
            "danger" => Some(Level::Danger),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlashMessage {
    pub level: Level,
    pub text: String,
}

/// Notices left by the previous response. Returning this value as part of a
/// response clears the cookie once the notices have been shown.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Flashes(pub Vec<FlashMessage>);

impl Flashes {
    pub fn iter(&self) -> impl Iterator<Item = &FlashMessage> {
        self.0.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn decode(raw: &str) -> Self {
        let messages = url::form_urlencoded::parse(raw.as_bytes())
            .filter_map(|(level, text)| {
                Level::parse(&level).map(|level| FlashMessage {
                    level,
                    text: text.into_owned(),
                })
            })
            .collect();
        Flashes(messages)
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for Flashes
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(read_cookie(&parts.headers, FLASH_COOKIE)
            .map(Flashes::decode)
            .unwrap_or_default())
    }
}

impl IntoResponseParts for Flashes {
    type Error = Infallible;

    fn into_response_parts(self, mut res: ResponseParts) -> Result<ResponseParts, Self::Error> {
        if !self.is_empty() {
            res.headers_mut().append(
                header::SET_COOKIE,
                HeaderValue::from_static("quiz_flash=; Path=/; SameSite=Lax; Max-Age=0"),
            );
        }
        Ok(res)
    }
}

fn flash_cookie(level: Level, text: &str) -> Option<HeaderValue> {
    let encoded = url::form_urlencoded::Serializer::new(String::new())
        .append_pair(level.as_str(), text)
        .finish();
    HeaderValue::from_str(&format!("{}={}; Path=/; SameSite=Lax", FLASH_COOKIE, encoded)).ok()
}

/// See-other redirect that leaves a notice for the next page.
pub fn redirect(to: &str, level: Level, text: impl AsRef<str>) -> Response {
    let mut response = Redirect::to(to).into_response();
    if let Some(cookie) = flash_cookie(level, text.as_ref()) {
        response.headers_mut().append(header::SET_COOKIE, cookie);
    }
    response
}
