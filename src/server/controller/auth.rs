use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        auth::{LoginDto, UserDto},
    },
    server::{
        error::{auth::AuthError, Error},
        model::{app::AppState, session::user::SessionUser},
        service::auth::verify_blocking,
    },
};

pub static AUTH_TAG: &str = "auth";

/// Log in with a configured dashboard username and password
///
/// The session ID is cycled on success to prevent session fixation.
///
/// # Responses
/// - 200 (OK): Logged in, returns the user
/// - 401 (Unauthorized): Unknown username or wrong password
/// - 500 (Internal Server Error): Session store or password verification failure
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Logged in", body = UserDto),
        (status = 401, description = "Incorrect username or password", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Json(login): Json<LoginDto>,
) -> Result<impl IntoResponse, Error> {
    verify_blocking(state.users.clone(), login.username.clone(), login.password).await?;

    session.cycle_id().await?;
    SessionUser::insert(&session, &login.username).await?;

    tracing::info!(username = %login.username, "User logged in");

    Ok((
        StatusCode::OK,
        Json(UserDto {
            username: login.username,
        }),
    ))
}

/// Log out by clearing the session
///
/// # Responses
/// - 204 (No Content): Logged out
/// - 500 (Internal Server Error): There was an issue clearing the session
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 204, description = "Logged out"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn logout(session: Session) -> Result<impl IntoResponse, Error> {
    // Sessions without a user were never stored, nothing to flush
    if let Some(username) = SessionUser::get(&session).await? {
        session.flush().await?;

        tracing::info!(username = %username, "User logged out");
    }

    Ok(StatusCode::NO_CONTENT)
}

/// Get the logged in user
///
/// # Responses
/// - 200 (OK): The user in session
/// - 401 (Unauthorized): No user in session
#[utoipa::path(
    get,
    path = "/api/auth/user",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Logged in user", body = UserDto),
        (status = 401, description = "Login required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user(session: Session) -> Result<impl IntoResponse, Error> {
    let Some(username) = SessionUser::get(&session).await? else {
        return Err(AuthError::NotLoggedIn.into());
    };

    Ok((StatusCode::OK, Json(UserDto { username })))
}
