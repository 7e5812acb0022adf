use std::sync::Arc;

use tracing::{debug, info};

use crate::database::CustomerRepository;
use crate::error::ApiError;
use crate::models::CustomerId;
use crate::services::ZipCodeDirectory;

/// Per-request context accessor.
///
/// The only thing the business logic needs from the surrounding request
/// is the acting customer's id. Handlers supply an implementation backed
/// by the authenticated session; tests supply a stub.
pub trait RequestContext: Send + Sync {
    fn customer_id(&self) -> Option<CustomerId>;
}

/// Customer business logic.
///
/// Depends only on the repository and directory ports, so it can be unit
/// tested without a live HTTP call, request context, or database.
#[derive(Clone)]
pub struct CustomerManager {
    repository: Arc<dyn CustomerRepository>,
    zip_directory: Arc<dyn ZipCodeDirectory>,
}

impl CustomerManager {
    pub fn new(
        repository: Arc<dyn CustomerRepository>,
        zip_directory: Arc<dyn ZipCodeDirectory>,
    ) -> Self {
        Self {
            repository,
            zip_directory,
        }
    }

    /// Update the acting customer's zip code.
    ///
    /// The new zip code must be present in the external directory's list
    /// of valid codes; an absent code yields `Ok(false)` without touching
    /// the repository. A context without a customer id resolves to id 0,
    /// which no repository record carries, so the update reports false.
    pub async fn update_zip(
        &self,
        ctx: &dyn RequestContext,
        new_zip_code: &str,
    ) -> Result<bool, ApiError> {
        let valid_zip_codes = self.zip_directory.get_valid_zip_codes().await?;
        if !valid_zip_codes.iter().any(|z| z == new_zip_code) {
            debug!(zip_code = %new_zip_code, "Zip code not present in directory");
            return Ok(false);
        }

        let customer_id = ctx.customer_id().unwrap_or(0);
        let updated = self.repository.update_zip(customer_id, new_zip_code).await?;
        if updated {
            info!(customer_id, zip_code = %new_zip_code, "Customer zip code updated");
        }
        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::repository::MockCustomerRepository;
    use crate::services::zip_directory::MockZipCodeDirectory;

    struct StubContext(Option<CustomerId>);

    impl RequestContext for StubContext {
        fn customer_id(&self) -> Option<CustomerId> {
            self.0
        }
    }

    fn directory_with(zips: Vec<&str>) -> MockZipCodeDirectory {
        let zips: Vec<String> = zips.into_iter().map(String::from).collect();
        let mut directory = MockZipCodeDirectory::new();
        directory
            .expect_get_valid_zip_codes()
            .returning(move || Ok(zips.clone()));
        directory
    }

    #[tokio::test]
    async fn test_known_zip_code_updates_customer() {
        let directory = directory_with(vec!["12345"]);
        let mut repository = MockCustomerRepository::new();
        repository
            .expect_update_zip()
            .withf(|id, zip| *id == 1 && zip == "12345")
            .once()
            .returning(|_, _| Ok(true));

        let manager = CustomerManager::new(Arc::new(repository), Arc::new(directory));
        let updated = manager
            .update_zip(&StubContext(Some(1)), "12345")
            .await
            .unwrap();
        assert!(updated);
    }

    #[tokio::test]
    async fn test_unknown_zip_code_is_rejected_without_repository_call() {
        let directory = directory_with(vec!["12345"]);
        let mut repository = MockCustomerRepository::new();
        repository.expect_update_zip().never();

        let manager = CustomerManager::new(Arc::new(repository), Arc::new(directory));
        let updated = manager
            .update_zip(&StubContext(Some(1)), "9999")
            .await
            .unwrap();
        assert!(!updated);
    }

    #[tokio::test]
    async fn test_missing_customer_id_resolves_to_zero() {
        let directory = directory_with(vec!["12345"]);
        let mut repository = MockCustomerRepository::new();
        repository
            .expect_update_zip()
            .withf(|id, zip| *id == 0 && zip == "12345")
            .once()
            .returning(|_, _| Ok(false));

        let manager = CustomerManager::new(Arc::new(repository), Arc::new(directory));
        let updated = manager
            .update_zip(&StubContext(None), "12345")
            .await
            .unwrap();
        assert!(!updated);
    }

    #[tokio::test]
    async fn test_directory_failure_propagates() {
        let mut directory = MockZipCodeDirectory::new();
        directory
            .expect_get_valid_zip_codes()
            .returning(|| Err(ApiError::ExternalService("directory down".to_string())));
        let mut repository = MockCustomerRepository::new();
        repository.expect_update_zip().never();

        let manager = CustomerManager::new(Arc::new(repository), Arc::new(directory));
        let err = manager
            .update_zip(&StubContext(Some(1)), "12345")
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::ExternalService(_)));
    }

    #[tokio::test]
    async fn test_repository_outcome_is_propagated() {
        let directory = directory_with(vec!["12345"]);
        let mut repository = MockCustomerRepository::new();
        repository
            .expect_update_zip()
            .withf(|id, zip| *id == 7 && zip == "12345")
            .once()
            .returning(|_, _| Ok(false));

        let manager = CustomerManager::new(Arc::new(repository), Arc::new(directory));
        let updated = manager
            .update_zip(&StubContext(Some(7)), "12345")
            .await
            .unwrap();
        assert!(!updated);
    }
}
