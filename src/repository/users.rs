//! User domain methods on Repository

use super::Repository;
use crate::models::user::{Credentials, User};

impl Repository {
    /// Append a user. Duplicates are accepted.
    pub async fn users_create(&self, user: User) -> User {
        self.users.write().await.push(user.clone());
        user
    }

    /// First user whose username and password both match
    pub async fn users_find_by_credentials(&self, credentials: &Credentials) -> Option<User> {
        self.users
            .read()
            .await
            .iter()
            .find(|u| u.matches(credentials))
            .cloned()
    }

    pub async fn users_count(&self) -> usize {
        self.users.read().await.len()
    }
}
