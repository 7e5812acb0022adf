use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::{debug, warn};

use crate::error::ApiError;
use crate::models::{Customer, CustomerId};

/// Repository port for customer records.
///
/// The business logic depends on this trait, never on a concrete store,
/// so it can be exercised with a mock in unit tests.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CustomerRepository: Send + Sync {
    /// Find a customer by id
    async fn find_by_id(&self, id: CustomerId) -> Result<Option<Customer>, ApiError>;

    /// Update a customer's zip code. Returns false when no customer with
    /// the given id exists.
    async fn update_zip(&self, id: CustomerId, new_zip_code: &str) -> Result<bool, ApiError>;
}

/// In-memory customer store.
///
/// Stands in for a database-backed repository; the records live in a
/// `RwLock`ed vector for the lifetime of the process.
#[derive(Debug, Default)]
pub struct InMemoryCustomerRepository {
    customers: RwLock<Vec<Customer>>,
}

impl InMemoryCustomerRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_customers(customers: Vec<Customer>) -> Self {
        Self {
            customers: RwLock::new(customers),
        }
    }
}

#[async_trait]
impl CustomerRepository for InMemoryCustomerRepository {
    async fn find_by_id(&self, id: CustomerId) -> Result<Option<Customer>, ApiError> {
        let customers = self.customers.read().await;
        Ok(customers.iter().find(|c| c.id == id).cloned())
    }

    async fn update_zip(&self, id: CustomerId, new_zip_code: &str) -> Result<bool, ApiError> {
        let mut customers = self.customers.write().await;
        match customers.iter_mut().find(|c| c.id == id) {
            Some(customer) => {
                customer.zip_code = new_zip_code.to_string();
                debug!(customer_id = id, zip_code = %new_zip_code, "Customer zip code updated");
                Ok(true)
            }
            None => {
                warn!(customer_id = id, "Zip update requested for unknown customer");
                Ok(false)
            }
        }
    }
}
