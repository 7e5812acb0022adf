//! Router configuration module.

use axum::{
    Router,
    middleware::{from_fn, from_fn_with_state},
    routing::{get, post, put},
};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::AppState;
use crate::auth::middleware::auth_middleware;
use crate::handlers::{auth, customers, health};
use crate::middleware::request_logger_middleware;
use crate::openapi::ApiDoc;

/// Build the application router.
pub fn build_router(app_state: AppState) -> Router {
    let public_routes = Router::new()
        .route("/health", get(health::health_check))
        .route("/api/v1/auth/token", post(auth::issue_token));

    let protected_routes = Router::new()
        .route("/api/v1/customers/zip", put(customers::update_zip))
        .route("/api/v1/customers/me", get(customers::get_me))
        .layer(from_fn_with_state(app_state.clone(), auth_middleware));

    public_routes
        .merge(protected_routes)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(
            ServiceBuilder::new()
                .layer(from_fn(request_logger_middleware))
                .layer(TraceLayer::new_for_http())
                .layer(TimeoutLayer::new(std::time::Duration::from_secs(30)))
                .layer(CorsLayer::permissive()),
        )
        .with_state(app_state)
}
