use axum::{
    extract::{Form, State},
    http::header,
    response::{Html, IntoResponse, Redirect, Response},
};

use crate::dto::auth_dto::{LoginForm, RegisterForm};
use crate::error::{Error, Result};
use crate::middleware::auth::MaybeUser;
use crate::middleware::flash::{self, Flashes, Level};
use crate::middleware::session::SessionUser;
use crate::{views, AppState};

#[axum::debug_handler(state = AppState)]
pub async fn index(MaybeUser(user): MaybeUser) -> Redirect {
    match user {
        Some(user) => Redirect::to(user.role.home_path()),
        None => Redirect::to("/login"),
    }
}

#[axum::debug_handler(state = AppState)]
pub async fn register_page(MaybeUser(user): MaybeUser, flashes: Flashes) -> Response {
    if user.is_some() {
        return Redirect::to("/").into_response();
    }
    let page = views::auth::register(&flashes);
    (flashes, Html(page)).into_response()
}

#[axum::debug_handler(state = AppState)]
pub async fn register(
    State(state): State<AppState>,
    MaybeUser(user): MaybeUser,
    Form(form): Form<RegisterForm>,
) -> Response {
    if user.is_some() {
        return Redirect::to("/").into_response();
    }
    let new_user = match form.into_new_user() {
        Ok(new_user) => new_user,
        Err(message) => return flash::redirect("/register", Level::Danger, message),
    };

    match state.user_service.register(new_user).await {
        Ok(_) => flash::redirect(
            "/login",
            Level::Success,
            "Registration successful! Please log in.",
        ),
        Err(Error::Conflict(message)) => flash::redirect("/register", Level::Warning, message),
        Err(e) => {
            tracing::error!(error = ?e, "registration failed");
            flash::redirect(
                "/register",
                Level::Danger,
                "An error occurred during registration.",
            )
        }
    }
}

#[axum::debug_handler(state = AppState)]
pub async fn login_page(MaybeUser(user): MaybeUser, flashes: Flashes) -> Response {
    if user.is_some() {
        return Redirect::to("/").into_response();
    }
    let page = views::auth::login(&flashes);
    (flashes, Html(page)).into_response()
}

#[axum::debug_handler(state = AppState)]
pub async fn login(
    State(state): State<AppState>,
    MaybeUser(user): MaybeUser,
    Form(form): Form<LoginForm>,
) -> Result<Response> {
    if user.is_some() {
        return Ok(Redirect::to("/").into_response());
    }
    let username = form.username.trim();
    if username.is_empty() || form.password.is_empty() {
        return Ok(flash::redirect(
            "/login",
            Level::Danger,
            "Username and password are required.",
        ));
    }

    let Some(user) = state.user_service.authenticate(username, &form.password).await? else {
        tracing::warn!(username = %username, "failed login");
        return Ok(flash::redirect(
            "/login",
            Level::Danger,
            "Invalid username or password.",
        ));
    };

    let session_user = SessionUser::from(&user);
    let token = state.sessions.issue(&session_user)?;
    let cookie = state.sessions.session_cookie(&token)?;
    tracing::info!(user = %user.username, role = %user.role, "user logged in");

    let mut response = flash::redirect(
        user.role.home_path(),
        Level::Success,
        format!("Welcome back, {}!", user.username),
    );
    response.headers_mut().append(header::SET_COOKIE, cookie);
    Ok(response)
}

#[axum::debug_handler(state = AppState)]
pub async fn logout(State(state): State<AppState>, user: SessionUser) -> Response {
    tracing::info!(user = %user.username, "user logged out");
    let mut response = flash::redirect("/login", Level::Info, "You have been logged out.");
    response
        .headers_mut()
        .append(header::SET_COOKIE, state.sessions.clear_cookie());
    response
}
