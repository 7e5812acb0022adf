use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Customer identifier. The directory of customers is keyed by plain
/// integer ids, matching the upstream profile system.
pub type CustomerId = i64;

/// US-style five digit zip code shape. Membership in the external
/// directory is checked separately by the business logic.
static ZIP_CODE_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{5}$").expect("zip code regex is valid"));

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Customer {
    pub id: CustomerId,
    pub zip_code: String,
}

/// Request body for the zip-code update endpoint
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateZipRequest {
    #[validate(regex(path = *ZIP_CODE_SHAPE, message = "zip code must be five digits"))]
    pub zip_code: String,
}

/// Outcome of a zip-code update. `updated` is false when the zip code is
/// not in the directory or the customer record could not be updated.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UpdateZipResponse {
    pub updated: bool,
    pub zip_code: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zip_shape_accepts_five_digits() {
        let req = UpdateZipRequest {
            zip_code: "12345".to_string(),
        };
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_zip_shape_rejects_short_and_alpha() {
        for bad in ["9999", "123456", "abcde", ""] {
            let req = UpdateZipRequest {
                zip_code: bad.to_string(),
            };
            assert!(req.validate().is_err(), "{:?} should be rejected", bad);
        }
    }
}
