//! Repository layer for in-memory storage

pub mod books;

/// Main repository struct holding the in-memory stores
#[derive(Clone)]
pub struct Repository {
    pub books: books::BooksRepository,
}

impl Repository {
    /// Create a repository with an empty book registry
    pub fn new() -> Self {
        Self {
            books: books::BooksRepository::new(),
        }
    }

    /// Create a repository with the seeded startup catalog
    pub fn seeded() -> Self {
        Self {
            books: books::BooksRepository::seeded(),
        }
    }
}

impl Default for Repository {
    fn default() -> Self {
        Self::new()
    }
}
