//! Book model

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A book record with its available quantity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Book {
    /// External identifier, used as lookup key
    pub id: String,
    /// Book title
    pub title: String,
    /// Book author
    pub author: String,
    /// Number of copies currently available
    pub quantity: u32,
}

impl Book {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        author: impl Into<String>,
        quantity: u32,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            author: author.into(),
            quantity,
        }
    }
}
