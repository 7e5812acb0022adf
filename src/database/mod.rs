//! Customer storage.
//!
//! Real persistence is intentionally out of scope for this service; the
//! repository port below is the seam a database-backed implementation
//! would plug into, and the in-memory store stands in for it.

pub mod repository;

pub use repository::{CustomerRepository, InMemoryCustomerRepository};

use crate::models::Customer;

/// Build the customer store seeded with the known profile records.
pub fn seed_repository() -> InMemoryCustomerRepository {
    InMemoryCustomerRepository::with_customers(vec![Customer {
        id: 1,
        zip_code: "12345".to_string(),
    }])
}
