// Business logic services
// Zip-code directory client and the customer manager

pub mod customer_manager;
pub mod zip_directory;

pub use customer_manager::{CustomerManager, RequestContext};
pub use zip_directory::{HttpZipCodeDirectory, ZipCodeDirectory};
