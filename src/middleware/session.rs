use axum::http::{header, HeaderMap, HeaderValue};
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{Error, Result};
use crate::models::user::{Role, User};

pub const SESSION_COOKIE: &str = "quiz_session";

/// Identity of the signed-in user, rebuilt from the session cookie on every
/// request and handed to handlers as an extractor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionUser {
    pub id: Uuid,
    pub role: Role,
    pub username: String,
}

impl From<&User> for SessionUser {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            role: user.role,
            username: user.username.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionClaims {
    pub sub: Uuid,
    pub role: Role,
    pub username: String,
    pub exp: usize,
}

#[derive(Clone)]
pub struct SessionSettings {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl: Duration,
    secure: bool,
}

impl SessionSettings {
    pub fn new(secret: &str, ttl_hours: i64, secure: bool) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            ttl: Duration::hours(ttl_hours.max(1)),
            secure,
        }
    }

    pub fn issue(&self, user: &SessionUser) -> Result<String> {
        let exp = (Utc::now() + self.ttl).timestamp().max(0) as usize;
        let claims = SessionClaims {
            sub: user.id,
            role: user.role,
            username: user.username.clone(),
            exp,
        };
        Ok(encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)?)
    }

    pub fn verify(&self, token: &str) -> Option<SessionUser> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        match decode::<SessionClaims>(token, &self.decoding, &validation) {
            Ok(data) => Some(SessionUser {
                id: data.claims.sub,
                role: data.claims.role,
                username: data.claims.username,
            }),
            Err(e) => {
                tracing::debug!(error = ?e, "rejected session token");
                None
            }
        }
    }

    pub fn current_user(&self, headers: &HeaderMap) -> Option<SessionUser> {
        read_cookie(headers, SESSION_COOKIE).and_then(|token| self.verify(token))
    }

    pub fn session_cookie(&self, token: &str) -> Result<HeaderValue> {
        let secure = if self.secure { "; Secure" } else { "" };
        HeaderValue::from_str(&format!(
            "{}={}; Path=/; HttpOnly; SameSite=Lax; Max-Age={}{}",
            SESSION_COOKIE,
            token,
            self.ttl.num_seconds(),
            secure
        ))
        .map_err(|e| Error::Internal(format!("Invalid session cookie: {}", e)))
    }

    pub fn clear_cookie(&self) -> HeaderValue {
        HeaderValue::from_static("quiz_session=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0")
    }
}

pub fn read_cookie<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|raw| raw.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value)
        .filter(|value| !value.is_empty())
}
