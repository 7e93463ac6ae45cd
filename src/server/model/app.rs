use std::{collections::HashMap, sync::Arc};

use sea_orm::DatabaseConnection;

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    /// Dashboard username to bcrypt password hash
    pub users: Arc<HashMap<String, String>>,
}

impl AppState {
    pub fn new(db: DatabaseConnection, users: HashMap<String, String>) -> Self {
        Self {
            db,
            users: Arc::new(users),
        }
    }
}

impl From<(DatabaseConnection, HashMap<String, String>)> for AppState {
    fn from((db, users): (DatabaseConnection, HashMap<String, String>)) -> Self {
        Self::new(db, users)
    }
}
