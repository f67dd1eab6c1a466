//! Repository layer holding the in-memory collections

pub mod books;
pub mod seed;
pub mod users;

use std::sync::Arc;
use tokio::sync::RwLock;

use crate::models::{Book, User};

/// Main repository struct owning the book catalog and the user directory.
/// Cloning shares the same collections.
#[derive(Clone, Default)]
pub struct Repository {
    books: Arc<RwLock<Vec<Book>>>,
    users: Arc<RwLock<Vec<User>>>,
}

impl Repository {
    /// Create a repository over the given catalog with no registered users
    pub fn new(books: Vec<Book>) -> Self {
        Self {
            books: Arc::new(RwLock::new(books)),
            users: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Create a repository holding the startup catalog
    pub fn seeded() -> Self {
        Self::new(seed::books())
    }
}
