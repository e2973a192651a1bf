//! In-memory book registry.
//!
//! The registry is an insertion-ordered list guarded by a single
//! read-write lock, so checkout/return quantity updates are atomic
//! with respect to concurrent requests. Lookups hand out clones;
//! no reference into the backing store escapes the lock.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::{
    error::{AppError, AppResult},
    models::Book,
};

/// Repository holding the in-memory book registry
#[derive(Clone)]
pub struct BooksRepository {
    books: Arc<RwLock<Vec<Book>>>,
}

impl BooksRepository {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            books: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Create a registry pre-populated with the startup catalog
    pub fn seeded() -> Self {
        Self {
            books: Arc::new(RwLock::new(vec![
                Book::new("1", "In Search of Lost Time", "Marcel Proust", 5),
                Book::new("2", "The Great Gatsby", "F. Scott Fitzgerald", 5),
                Book::new("3", "War and Peace", "Leo Tolstoy", 5),
            ])),
        }
    }

    /// List all books in insertion order
    pub async fn list(&self) -> Vec<Book> {
        self.books.read().await.clone()
    }

    /// Append a book to the registry.
    ///
    /// No uniqueness check on the id: duplicates are accepted and
    /// lookups resolve to the first inserted match.
    pub async fn create(&self, book: Book) -> Book {
        let mut books = self.books.write().await;
        books.push(book.clone());
        book
    }

    /// Find the first book whose id matches exactly
    pub async fn get_by_id(&self, id: &str) -> Option<Book> {
        let books = self.books.read().await;
        books.iter().find(|b| b.id == id).cloned()
    }

    /// Decrement the available quantity of a book by one.
    ///
    /// Refuses the decrement when no copy is available, so the
    /// quantity never goes below zero.
    pub async fn checkout(&self, id: &str) -> AppResult<Book> {
        let mut books = self.books.write().await;
        let book = books
            .iter_mut()
            .find(|b| b.id == id)
            .ok_or_else(|| AppError::NotFound("Book not found.".to_string()))?;

        if book.quantity == 0 {
            return Err(AppError::Unavailable("Book not available".to_string()));
        }

        book.quantity -= 1;
        Ok(book.clone())
    }

    /// Increment the available quantity of a book by one.
    ///
    /// No upper bound on the quantity.
    pub async fn return_copy(&self, id: &str) -> AppResult<Book> {
        let mut books = self.books.write().await;
        let book = books
            .iter_mut()
            .find(|b| b.id == id)
            .ok_or_else(|| AppError::NotFound("Book not found.".to_string()))?;

        book.quantity += 1;
        Ok(book.clone())
    }
}

impl Default for BooksRepository {
    fn default() -> Self {
        Self::new()
    }
}
