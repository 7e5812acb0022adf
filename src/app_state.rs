use std::sync::Arc;

use crate::auth::JwtService;
use crate::config::Config;
use crate::database::CustomerRepository;
use crate::services::ZipCodeDirectory;

/// Application state shared across handlers.
///
/// This is the composition root: production implementations of the
/// repository and directory ports are constructed here and handed to the
/// business logic as trait objects.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub jwt_service: JwtService,
    pub customer_repository: Arc<dyn CustomerRepository>,
    pub zip_directory: Arc<dyn ZipCodeDirectory>,
}

impl AppState {
    pub fn new(
        config: Config,
        jwt_service: JwtService,
        customer_repository: Arc<dyn CustomerRepository>,
        zip_directory: Arc<dyn ZipCodeDirectory>,
    ) -> Self {
        Self {
            config,
            jwt_service,
            customer_repository,
            zip_directory,
        }
    }
}
