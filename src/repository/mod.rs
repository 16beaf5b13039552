//! Customer store abstraction
//!
//! The endpoint layer talks to customers only through [`CustomersRepository`],
//! so the store knows nothing about HTTP, validation or logging.

use async_trait::async_trait;

use crate::types::{Customer, CustomerId, CustomerInput};

pub mod memory;

pub use memory::InMemoryCustomersRepository;

/// Customer store trait
#[async_trait]
pub trait CustomersRepository: Send + Sync {
    /// All customers in insertion order
    async fn get_all(&self) -> Vec<Customer>;

    /// Look up a single customer, `None` if no record has this id
    async fn get_by_id(&self, id: CustomerId) -> Option<Customer>;

    /// Store a new customer under a freshly assigned id
    async fn create(&self, input: CustomerInput) -> Customer;

    /// Overwrite the names of an existing customer, `None` if absent
    async fn update(&self, id: CustomerId, input: CustomerInput) -> Option<Customer>;

    /// Remove a customer, returning whether a record was removed
    async fn delete(&self, id: CustomerId) -> bool;

    /// Number of stored customers
    async fn count(&self) -> usize;
}
