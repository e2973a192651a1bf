//! Data models for Librarium

pub mod book;

// Re-export commonly used types
pub use book::Book;
