//! Business logic services

pub mod inventory;

use crate::repository::Repository;

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub inventory: inventory::InventoryService,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository) -> Self {
        Self {
            inventory: inventory::InventoryService::new(repository),
        }
    }
}
