// Data models and DTOs
// API request/response models and the customer record

pub mod customer;

pub use customer::{Customer, CustomerId, UpdateZipRequest, UpdateZipResponse};
