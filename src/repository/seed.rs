//! Catalog loaded at process start

use crate::models::Book;

fn book(isbn: &str, title: &str, author: &str, reviews: &str, price: Option<f64>) -> Book {
    Book {
        isbn: isbn.to_string(),
        title: title.to_string(),
        author: author.to_string(),
        reviews: Some(reviews.into()),
        price,
    }
}

pub fn books() -> Vec<Book> {
    vec![
        book("123456789875", "Sample Book 1", "John", "Nice book", None),
        book("1234567892345", "The Sun", "kamla", "Amazing", Some(19.0)),
        book("123453766789", "Heaven", "Mira", "Marvellous", Some(95.0)),
        book("134523456789", "Durga", "Jaya", "Thrilling", Some(15.0)),
    ]
}
