use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, warn};

use crate::error::ApiError;

/// Port for the external zip-code directory service.
///
/// The directory is the authority on which zip codes exist; the business
/// logic only ever asks for the full list.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ZipCodeDirectory: Send + Sync {
    /// Fetch all valid zip codes
    async fn get_valid_zip_codes(&self) -> Result<Vec<String>, ApiError>;
}

/// HTTP client for the zip-code directory.
#[derive(Debug, Clone)]
pub struct HttpZipCodeDirectory {
    client: Client,
    base_url: String,
}

impl HttpZipCodeDirectory {
    pub fn new(base_url: impl Into<String>, timeout_secs: u64) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .unwrap_or_default();

        Self {
            client,
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl ZipCodeDirectory for HttpZipCodeDirectory {
    async fn get_valid_zip_codes(&self) -> Result<Vec<String>, ApiError> {
        let url = format!("{}/GetAll", self.base_url.trim_end_matches('/'));

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ApiError::ExternalService(format!("Zip directory request failed: {}", e)))?;

        if !response.status().is_success() {
            warn!(
                status = %response.status(),
                url = %url,
                "Zip directory returned non-success status"
            );
            return Err(ApiError::ExternalService(format!(
                "Zip directory returned status {}",
                response.status()
            )));
        }

        let zip_codes: Vec<String> = response.json().await.map_err(|e| {
            ApiError::ExternalService(format!("Invalid zip directory response: {}", e))
        })?;

        debug!(count = zip_codes.len(), "Fetched valid zip codes");
        Ok(zip_codes)
    }
}
