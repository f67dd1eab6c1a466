//! User registration and login service

use crate::{
    error::{AppError, AppResult},
    models::user::{Credentials, User},
    repository::Repository,
};

#[derive(Clone)]
pub struct UsersService {
    repository: Repository,
}

impl UsersService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Register a user. Always succeeds, duplicates included.
    pub async fn register(&self, credentials: Credentials) -> User {
        let user = self.repository.users_create(credentials.into()).await;
        tracing::info!(username = ?user.username, "User registered");
        user
    }

    /// Authenticate by exact username and password match
    pub async fn login(&self, credentials: &Credentials) -> AppResult<User> {
        match self.repository.users_find_by_credentials(credentials).await {
            Some(user) => Ok(user),
            None => {
                tracing::warn!(username = ?credentials.username, "Login failed");
                Err(AppError::Authentication("Invalid credentials".to_string()))
            }
        }
    }
}
