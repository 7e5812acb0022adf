use axum::{Json, extract::State, http::HeaderMap};
use serde::{Deserialize, Serialize};
use tracing::info;
use utoipa::ToSchema;

use crate::AppState;
use crate::auth::TokenResponse;
use crate::error::{ApiError, Result};
use crate::models::CustomerId;

/// Request body for token issuance
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct TokenRequest {
    pub customer_id: CustomerId,
}

/// Issue an access token for a customer.
///
/// There is no user store in this service; issuance is gated by the
/// shared service key so only trusted callers (internal tools, test
/// harnesses) can mint sessions.
#[utoipa::path(
    post,
    path = "/api/v1/auth/token",
    tag = "auth",
    request_body = TokenRequest,
    responses(
        (status = 200, description = "Token issued", body = TokenResponse),
        (status = 401, description = "Missing or invalid service key")
    ),
    security(("api_key" = []))
)]
pub async fn issue_token(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(request): Json<TokenRequest>,
) -> Result<Json<TokenResponse>> {
    let api_key = headers
        .get("X-API-Key")
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| ApiError::Unauthorized("Missing X-API-Key header".to_string()))?;

    if api_key != state.config.service_api_key {
        return Err(ApiError::Unauthorized("Invalid service key".to_string()));
    }

    let access_token = state.jwt_service.generate_token(request.customer_id)?;
    info!(customer_id = request.customer_id, "Issued customer token");

    Ok(Json(TokenResponse {
        access_token,
        token_type: "Bearer".to_string(),
        expires_in: state.jwt_service.expiration_secs(),
    }))
}
