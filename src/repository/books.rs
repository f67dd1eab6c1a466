//! Book domain methods on Repository

use serde_json::Value;

use super::Repository;
use crate::{
    error::{AppError, AppResult, ReviewError},
    models::Book,
};

impl Repository {
    /// List all books in insertion order
    pub async fn books_list(&self) -> Vec<Book> {
        self.books.read().await.clone()
    }

    /// Get the first book with the given ISBN
    pub async fn books_get_by_isbn(&self, isbn: &str) -> AppResult<Book> {
        self.books
            .read()
            .await
            .iter()
            .find(|b| b.isbn == isbn)
            .cloned()
            .ok_or_else(AppError::book_not_found)
    }

    /// All books whose author equals `author`
    pub async fn books_by_author(&self, author: &str) -> Vec<Book> {
        self.books_filter(|b| b.author == author).await
    }

    /// All books whose title equals `title`
    pub async fn books_by_title(&self, title: &str) -> Vec<Book> {
        self.books_filter(|b| b.title == title).await
    }

    async fn books_filter<F>(&self, predicate: F) -> Vec<Book>
    where
        F: Fn(&Book) -> bool,
    {
        self.books
            .read()
            .await
            .iter()
            .filter(|&b| predicate(b))
            .cloned()
            .collect()
    }

    /// Replace the review of a book. `None` clears it.
    pub async fn books_set_review(
        &self,
        isbn: &str,
        review: Option<Value>,
    ) -> Result<(), ReviewError> {
        let mut books = self.books.write().await;
        let book = books
            .iter_mut()
            .find(|b| b.isbn == isbn)
            .ok_or(ReviewError::BookNotFound)?;
        book.reviews = review;
        Ok(())
    }

    /// Remove the review of a book
    pub async fn books_delete_review(&self, isbn: &str) -> Result<(), ReviewError> {
        let mut books = self.books.write().await;
        let book = books
            .iter_mut()
            .find(|b| b.isbn == isbn)
            .ok_or(ReviewError::BookNotFound)?;
        if !book.has_review() {
            return Err(ReviewError::NoReview);
        }
        book.reviews = None;
        Ok(())
    }

    pub async fn books_count(&self) -> usize {
        self.books.read().await.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book(isbn: &str, title: &str, author: &str) -> Book {
        Book {
            isbn: isbn.into(),
            title: title.into(),
            author: author.into(),
            reviews: None,
            price: None,
        }
    }

    #[tokio::test]
    async fn test_first_match_wins_on_duplicate_isbn() {
        let repository = Repository::new(vec![
            book("1", "First", "A"),
            book("1", "Second", "B"),
        ]);
        let found = repository.books_get_by_isbn("1").await.unwrap();
        assert_eq!(found.title, "First");
    }

    #[tokio::test]
    async fn test_lookup_is_case_sensitive() {
        let repository = Repository::new(vec![book("X1", "Dune", "Herbert")]);
        assert!(repository.books_get_by_isbn("x1").await.is_err());
        assert!(repository.books_by_author("herbert").await.is_empty());
        assert!(repository.books_by_title("Dune ").await.is_empty());
        assert_eq!(repository.books_by_title("Dune").await.len(), 1);
    }

    #[tokio::test]
    async fn test_filters_keep_insertion_order() {
        let repository = Repository::new(vec![
            book("1", "One", "Ann"),
            book("2", "Two", "Bob"),
            book("3", "Three", "Ann"),
        ]);
        let isbns: Vec<_> = repository
            .books_by_author("Ann")
            .await
            .into_iter()
            .map(|b| b.isbn)
            .collect();
        assert_eq!(isbns, ["1", "3"]);
    }

    #[tokio::test]
    async fn test_review_lifecycle() {
        let repository = Repository::new(vec![book("1", "One", "Ann")]);

        assert_eq!(
            repository.books_delete_review("1").await,
            Err(ReviewError::NoReview)
        );

        repository
            .books_set_review("1", Some("Great".into()))
            .await
            .unwrap();
        let stored = repository.books_get_by_isbn("1").await.unwrap();
        assert_eq!(stored.reviews, Some(Value::from("Great")));

        repository.books_delete_review("1").await.unwrap();
        let stored = repository.books_get_by_isbn("1").await.unwrap();
        assert_eq!(stored.reviews, None);
    }

    #[tokio::test]
    async fn test_empty_review_cannot_be_deleted() {
        let repository = Repository::new(vec![book("1", "One", "Ann")]);
        repository
            .books_set_review("1", Some(Value::from("")))
            .await
            .unwrap();
        assert_eq!(
            repository.books_delete_review("1").await,
            Err(ReviewError::NoReview)
        );
    }

    #[tokio::test]
    async fn test_review_on_unknown_book() {
        let repository = Repository::new(vec![]);
        assert_eq!(
            repository.books_set_review("000", Some("x".into())).await,
            Err(ReviewError::BookNotFound)
        );
        assert_eq!(
            repository.books_delete_review("000").await,
            Err(ReviewError::BookNotFound)
        );
    }
}
