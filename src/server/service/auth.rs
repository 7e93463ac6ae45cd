use std::{collections::HashMap, sync::Arc};

use crate::server::error::{auth::AuthError, Error};

/// Bcrypt cost used for dashboard password hashes
pub const PASSWORD_HASH_COST: u32 = 12;

/// Hash a dashboard password for the `FLEET_USERS` variable
pub fn hash_password(password: &str) -> Result<String, Error> {
    Ok(bcrypt::hash(password, PASSWORD_HASH_COST)?)
}

/// Runs [`AuthService::verify`] on the blocking thread pool
pub async fn verify_blocking(
    users: Arc<HashMap<String, String>>,
    username: String,
    password: String,
) -> Result<(), Error> {
    tokio::task::spawn_blocking(move || AuthService::new(&users).verify(&username, &password))
        .await
        .map_err(|e| Error::InternalError(format!("Password verification task failed: {}", e)))?
}

pub struct AuthService<'a> {
    users: &'a HashMap<String, String>,
}

impl<'a> AuthService<'a> {
    pub fn new(users: &'a HashMap<String, String>) -> Self {
        Self { users }
    }

    /// Check a username and password against the configured bcrypt hashes
    ///
    /// Unknown users and wrong passwords both yield [`AuthError::InvalidCredentials`].
    pub fn verify(&self, username: &str, password: &str) -> Result<(), Error> {
        let Some(hash) = self.users.get(username) else {
            return Err(AuthError::InvalidCredentials(username.to_string()).into());
        };

        if !bcrypt::verify(password, hash)? {
            return Err(AuthError::InvalidCredentials(username.to_string()).into());
        }

        Ok(())
    }
}
