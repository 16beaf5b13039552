//! In-memory customer store

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::CustomersRepository;
use crate::types::{Customer, CustomerId, CustomerInput};

/// Monotonic id generator owned by a single store.
///
/// Ids start at 1 and are never handed out twice, even after the record
/// carrying them is deleted.
#[derive(Debug)]
pub struct IdSequence {
    next: CustomerId,
}

impl IdSequence {
    pub fn new() -> Self {
        Self { next: 1 }
    }

    /// Return the current id and advance the counter
    pub fn next_id(&mut self) -> CustomerId {
        let id = self.next;
        self.next += 1;
        id
    }
}

impl Default for IdSequence {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Default)]
struct Inner {
    customers: Vec<Customer>,
    ids: IdSequence,
}

impl Inner {
    fn position(&self, id: CustomerId) -> Option<usize> {
        self.customers.iter().position(|c| c.id == id)
    }
}

/// Customer store backed by a `Vec`.
///
/// The collection and the id sequence sit behind one lock, so every
/// operation is atomic with respect to the others.
#[derive(Debug, Default)]
pub struct InMemoryCustomersRepository {
    inner: RwLock<Inner>,
}

impl InMemoryCustomersRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CustomersRepository for InMemoryCustomersRepository {
    async fn get_all(&self) -> Vec<Customer> {
        self.inner.read().await.customers.clone()
    }

    async fn get_by_id(&self, id: CustomerId) -> Option<Customer> {
        let inner = self.inner.read().await;
        inner.customers.iter().find(|c| c.id == id).cloned()
    }

    async fn create(&self, input: CustomerInput) -> Customer {
        let mut inner = self.inner.write().await;

        let customer = Customer {
            id: inner.ids.next_id(),
            first_name: input.first_name,
            last_name: input.last_name,
        };
        inner.customers.push(customer.clone());

        customer
    }

    async fn update(&self, id: CustomerId, input: CustomerInput) -> Option<Customer> {
        let mut inner = self.inner.write().await;
        let idx = inner.position(id)?;

        let existing = &mut inner.customers[idx];
        existing.first_name = input.first_name;
        existing.last_name = input.last_name;

        Some(existing.clone())
    }

    async fn delete(&self, id: CustomerId) -> bool {
        let mut inner = self.inner.write().await;
        match inner.position(id) {
            Some(idx) => {
                // Keep insertion order for get_all
                inner.customers.remove(idx);
                true
            }
            None => false,
        }
    }

    async fn count(&self) -> usize {
        self.inner.read().await.customers.len()
    }
}
