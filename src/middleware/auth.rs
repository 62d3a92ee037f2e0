use std::convert::Infallible;

use axum::{
    async_trait,
    extract::FromRequestParts,
    http::request::Parts,
    response::Response,
};

use crate::middleware::flash::{self, Level};
use crate::middleware::session::SessionUser;
use crate::models::user::Role;
use crate::AppState;

pub const LOGIN_REQUIRED: &str = "Please log in to access this page.";
pub const PERMISSION_DENIED: &str = "You do not have permission to access this page.";

#[async_trait]
impl FromRequestParts<AppState> for SessionUser {
    type Rejection = Response;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        state
            .sessions
            .current_user(&parts.headers)
            .ok_or_else(|| flash::redirect("/login", Level::Warning, LOGIN_REQUIRED))
    }
}

/// Session that may or may not be present; for pages anonymous visitors use.
#[derive(Debug, Clone)]
pub struct MaybeUser(pub Option<SessionUser>);

#[async_trait]
impl FromRequestParts<AppState> for MaybeUser {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        Ok(MaybeUser(state.sessions.current_user(&parts.headers)))
    }
}

#[derive(Debug, Clone)]
pub struct CurrentProfessor(pub SessionUser);

#[derive(Debug, Clone)]
pub struct CurrentStudent(pub SessionUser);

async fn require_role(
    parts: &mut Parts,
    state: &AppState,
    role: Role,
) -> Result<SessionUser, Response> {
    let user = SessionUser::from_request_parts(parts, state).await?;
    if user.role != role {
        tracing::warn!(
            user = %user.username,
            role = %user.role,
            path = %parts.uri.path(),
            "permission denied"
        );
        return Err(flash::redirect(
            user.role.home_path(),
            Level::Danger,
            PERMISSION_DENIED,
        ));
    }
    Ok(user)
}

#[async_trait]
impl FromRequestParts<AppState> for CurrentProfessor {
    type Rejection = Response;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        require_role(parts, state, Role::Professor)
            .await
            .map(CurrentProfessor)
    }
}

#[async_trait]
impl FromRequestParts<AppState> for CurrentStudent {
    type Rejection = Response;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        require_role(parts, state, Role::Student)
            .await
            .map(CurrentStudent)
    }
}
