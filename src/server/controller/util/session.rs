use axum::{extract::Request, middleware::Next, response::Response};
use tower_sessions::Session;

use crate::server::{
    error::{auth::AuthError, Error},
    model::session::user::SessionUser,
};

/// Middleware rejecting requests without a logged in user with 401
pub async fn require_user(session: Session, request: Request, next: Next) -> Result<Response, Error> {
    if SessionUser::get(&session).await?.is_none() {
        return Err(AuthError::NotLoggedIn.into());
    }

    Ok(next.run(request).await)
}
