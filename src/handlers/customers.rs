use axum::{Json, extract::State};
use validator::Validate;

use crate::AppState;
use crate::auth::AuthenticatedCustomer;
use crate::error::{ApiError, ErrorCode, Result};
use crate::handlers::ApiResponse;
use crate::models::{Customer, UpdateZipRequest, UpdateZipResponse};
use crate::services::CustomerManager;

/// Update the authenticated customer's zip code.
///
/// The zip code must exist in the external directory; an unknown code is
/// a normal negative outcome (`updated: false`), not an error.
#[utoipa::path(
    put,
    path = "/api/v1/customers/zip",
    tag = "customers",
    request_body = UpdateZipRequest,
    responses(
        (status = 200, description = "Update outcome", body = UpdateZipResponse),
        (status = 400, description = "Malformed zip code"),
        (status = 401, description = "Not authenticated"),
        (status = 502, description = "Zip directory unavailable")
    ),
    security(("bearer_auth" = []))
)]
pub async fn update_zip(
    State(state): State<AppState>,
    customer: AuthenticatedCustomer,
    Json(request): Json<UpdateZipRequest>,
) -> Result<Json<ApiResponse<UpdateZipResponse>>> {
    request
        .validate()
        .map_err(|e| ApiError::with_code(ErrorCode::InvalidZipCode, e.to_string()))?;

    let manager = CustomerManager::new(
        state.customer_repository.clone(),
        state.zip_directory.clone(),
    );
    let updated = manager.update_zip(&customer, &request.zip_code).await?;

    Ok(Json(ApiResponse::success(UpdateZipResponse {
        updated,
        zip_code: request.zip_code,
    })))
}

/// Get the authenticated customer's profile
#[utoipa::path(
    get,
    path = "/api/v1/customers/me",
    tag = "customers",
    responses(
        (status = 200, description = "Customer profile", body = Customer),
        (status = 401, description = "Not authenticated"),
        (status = 404, description = "Customer not found")
    ),
    security(("bearer_auth" = []))
)]
pub async fn get_me(
    State(state): State<AppState>,
    customer: AuthenticatedCustomer,
) -> Result<Json<ApiResponse<Customer>>> {
    let record = state
        .customer_repository
        .find_by_id(customer.0.sub)
        .await?
        .ok_or_else(|| ApiError::not_found("Customer"))?;

    Ok(Json(ApiResponse::success(record)))
}
