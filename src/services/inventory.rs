//! Book inventory service

use crate::{
    error::{AppError, AppResult},
    models::Book,
    repository::Repository,
};

#[derive(Clone)]
pub struct InventoryService {
    repository: Repository,
}

impl InventoryService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// List all books
    pub async fn list_books(&self) -> Vec<Book> {
        self.repository.books.list().await
    }

    /// Add a new book to the inventory
    pub async fn create_book(&self, book: Book) -> Book {
        self.repository.books.create(book).await
    }

    /// Get a book by its id
    pub async fn get_book(&self, id: &str) -> AppResult<Book> {
        self.repository
            .books
            .get_by_id(id)
            .await
            .ok_or_else(|| AppError::NotFound("Book not found".to_string()))
    }

    /// Check out a copy of a book
    pub async fn checkout_book(&self, id: &str) -> AppResult<Book> {
        self.repository.books.checkout(id).await
    }

    /// Return a borrowed copy of a book
    pub async fn return_book(&self, id: &str) -> AppResult<Book> {
        self.repository.books.return_copy(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_get_book_not_found_message() {
        let service = InventoryService::new(Repository::seeded());
        let err = service.get_book("99").await.unwrap_err();
        match err {
            AppError::NotFound(msg) => assert_eq!(msg, "Book not found"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_create_echoes_record() {
        let service = InventoryService::new(Repository::new());
        let created = service
            .create_book(Book::new("4", "X", "Y", 0))
            .await;
        assert_eq!(created, Book::new("4", "X", "Y", 0));

        let fetched = service.get_book("4").await.unwrap();
        assert_eq!(fetched.quantity, 0);
    }
}
