use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::{
    body::Body,
    extract::State,
    http::{Request, header::AUTHORIZATION},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::AppState;
use crate::auth::Claims;
use crate::error::ApiError;
use crate::models::CustomerId;
use crate::services::RequestContext;

/// JWT authentication middleware.
///
/// Validates the bearer token and places the decoded claims in request
/// extensions for the handlers' extractors.
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request<Body>,
    next: Next,
) -> Response {
    let auth_header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|header| header.to_str().ok());

    let token = match auth_header {
        Some(auth_value) if auth_value.starts_with("Bearer ") => &auth_value[7..],
        _ => {
            return ApiError::Unauthorized(
                "Missing or invalid Authorization header".to_string(),
            )
            .into_response();
        }
    };

    match state.jwt_service.decode_token(token) {
        Ok(claims) => {
            request.extensions_mut().insert(claims);
            next.run(request).await
        }
        Err(err) => err.into_response(),
    }
}

/// Extractor for the authenticated customer's claims
#[derive(Clone)]
pub struct AuthenticatedCustomer(pub Claims);

impl<S> FromRequestParts<S> for AuthenticatedCustomer
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> std::result::Result<Self, Self::Rejection> {
        let claims = parts
            .extensions
            .get::<Claims>()
            .cloned()
            .ok_or_else(|| ApiError::Unauthorized("No authentication found".to_string()))?;

        Ok(AuthenticatedCustomer(claims))
    }
}

// The authenticated session is the production implementation of the
// per-request context seam the business logic depends on.
impl RequestContext for AuthenticatedCustomer {
    fn customer_id(&self) -> Option<CustomerId> {
        Some(self.0.sub)
    }
}
