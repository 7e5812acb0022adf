//! OpenAPI documentation for the customer API.

use utoipa::openapi::security::{ApiKey, ApiKeyValue, HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::auth::TokenResponse;
use crate::handlers::health::HealthStatus;
use crate::models::{Customer, UpdateZipRequest, UpdateZipResponse};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::health::health_check,
        crate::handlers::auth::issue_token,
        crate::handlers::customers::update_zip,
        crate::handlers::customers::get_me,
    ),
    components(schemas(
        HealthStatus,
        TokenResponse,
        crate::handlers::auth::TokenRequest,
        Customer,
        UpdateZipRequest,
        UpdateZipResponse,
    )),
    modifiers(&SecurityAddon),
    tags(
        (name = "health", description = "Service health"),
        (name = "auth", description = "Token issuance"),
        (name = "customers", description = "Customer profile operations")
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
            components.add_security_scheme(
                "api_key",
                SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::new("X-API-Key"))),
            );
        }
    }
}
