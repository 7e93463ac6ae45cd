use serde::{Deserialize, Serialize};
use tower_sessions::Session;

use crate::server::error::Error;

pub const SESSION_USER_KEY: &str = "fleet:user:name";

#[derive(Default, Deserialize, Serialize, Debug)]
pub struct SessionUser(pub String);

impl SessionUser {
    /// Insert logged in username into session
    pub async fn insert(session: &Session, username: &str) -> Result<(), Error> {
        session
            .insert(SESSION_USER_KEY, SessionUser(username.to_string()))
            .await?;

        Ok(())
    }

    /// Get logged in username from session
    pub async fn get(session: &Session) -> Result<Option<String>, Error> {
        Ok(session
            .get::<SessionUser>(SESSION_USER_KEY)
            .await?
            .map(|SessionUser(username)| username))
    }
}
