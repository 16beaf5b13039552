//! API server state

use std::sync::Arc;

use crate::repository::{CustomersRepository, InMemoryCustomersRepository};

/// API server state
#[derive(Clone)]
pub struct AppState {
    /// Customer store shared by all handlers
    pub repository: Arc<dyn CustomersRepository>,
}

impl AppState {
    pub fn new(repository: Arc<dyn CustomersRepository>) -> Self {
        Self { repository }
    }

    /// Create state over a fresh, empty in-memory store
    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemoryCustomersRepository::new()))
    }
}
