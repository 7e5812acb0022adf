use chrono::Utc;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::CustomerId;

pub mod jwt;
pub mod middleware;

pub use jwt::JwtService;
pub use middleware::{AuthenticatedCustomer, auth_middleware};

/// Customer claims for JWT tokens
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Claims {
    pub sub: CustomerId, // Subject (customer ID)
    pub exp: i64,        // Expiration time
    pub iat: i64,        // Issued at
    pub iss: String,     // Issuer
}

impl Claims {
    pub fn new(customer_id: CustomerId, expiration_secs: i64) -> Self {
        let now = Utc::now();
        let exp = now + chrono::Duration::seconds(expiration_secs);

        Self {
            sub: customer_id,
            exp: exp.timestamp(),
            iat: now.timestamp(),
            iss: "customer-api".to_string(),
        }
    }

    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() > self.exp
    }
}

/// Token issuance response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_claims_are_not_expired() {
        let claims = Claims::new(1, 3600);
        assert!(!claims.is_expired());
        assert_eq!(claims.sub, 1);
        assert_eq!(claims.iss, "customer-api");
    }

    #[test]
    fn test_negative_expiration_is_expired() {
        let claims = Claims::new(1, -60);
        assert!(claims.is_expired());
    }
}
