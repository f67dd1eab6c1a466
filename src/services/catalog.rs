//! Catalog and review service

use std::{future::Future, time::Duration};

use serde_json::Value;
use tokio::sync::oneshot;

use crate::{
    error::{AppError, AppResult, ReviewError},
    models::Book,
    repository::Repository,
};

#[derive(Clone)]
pub struct CatalogService {
    repository: Repository,
    listing_delay: Duration,
}

impl CatalogService {
    pub fn new(repository: Repository, listing_delay: Duration) -> Self {
        Self {
            repository,
            listing_delay,
        }
    }

    pub async fn list_books(&self) -> Vec<Book> {
        self.repository.books_list().await
    }

    pub async fn get_book(&self, isbn: &str) -> AppResult<Book> {
        self.repository.books_get_by_isbn(isbn).await
    }

    pub async fn books_by_author(&self, author: &str) -> Vec<Book> {
        self.repository.books_by_author(author).await
    }

    pub async fn books_by_title(&self, title: &str) -> Vec<Book> {
        self.repository.books_by_title(title).await
    }

    /// Review text of a book, `None` when the book has no review
    pub async fn get_review(&self, isbn: &str) -> AppResult<Option<Value>> {
        Ok(self.repository.books_get_by_isbn(isbn).await?.reviews)
    }

    pub async fn set_review(&self, isbn: &str, review: Option<Value>) -> Result<(), ReviewError> {
        self.repository.books_set_review(isbn, review).await?;
        tracing::info!(isbn, "Review added/modified");
        Ok(())
    }

    pub async fn delete_review(&self, isbn: &str) -> Result<(), ReviewError> {
        self.repository.books_delete_review(isbn).await?;
        tracing::info!(isbn, "Review deleted");
        Ok(())
    }

    /// List all books from a background task after the configured delay.
    /// The catalog is read once the delay has elapsed.
    pub async fn list_books_deferred(&self) -> AppResult<Vec<Book>> {
        let repository = self.repository.clone();
        let delay = self.listing_delay;

        run_deferred(async move {
            tokio::time::sleep(delay).await;
            repository.books_list().await
        })
        .await
    }

    /// Look up a book from a background task that resolves a completion channel
    pub async fn search_by_isbn(&self, isbn: &str) -> AppResult<Book> {
        let (tx, rx) = oneshot::channel();
        let repository = self.repository.clone();
        let isbn = isbn.to_string();

        tokio::spawn(async move {
            let outcome = repository.books_get_by_isbn(&isbn).await;
            // The receiver is gone only if the request was dropped
            let _ = tx.send(outcome);
        });

        await_resolution(rx).await
    }
}

/// Run `task` on its own tokio task. A panicked or cancelled task is an internal fault.
async fn run_deferred<T, F>(task: F) -> AppResult<T>
where
    F: Future<Output = T> + Send + 'static,
    T: Send + 'static,
{
    tokio::spawn(task)
        .await
        .map_err(|e| AppError::Internal(format!("Deferred task failed: {}", e)))
}

/// Wait for a background lookup to resolve. A sender dropped without an answer is an internal fault.
async fn await_resolution<T>(rx: oneshot::Receiver<AppResult<T>>) -> AppResult<T> {
    rx.await.map_err(|_| {
        AppError::Internal("Background lookup ended without resolving".to_string())
    })?
}
