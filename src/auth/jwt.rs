use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};

use crate::auth::Claims;
use crate::error::{ApiError, Result};
use crate::models::CustomerId;

/// JWT encoding/decoding service
#[derive(Clone)]
pub struct JwtService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    expiration_secs: i64,
}

impl JwtService {
    pub fn new(secret: &str, expiration_secs: i64) -> Result<Self> {
        if secret.len() < 16 {
            return Err(ApiError::Configuration(
                "JWT_SECRET must be at least 16 characters".to_string(),
            ));
        }

        Ok(Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            expiration_secs,
        })
    }

    /// Issue a token for a customer
    pub fn generate_token(&self, customer_id: CustomerId) -> Result<String> {
        let claims = Claims::new(customer_id, self.expiration_secs);
        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| ApiError::Internal(format!("Failed to encode token: {}", e)))
    }

    /// Decode and validate a token
    pub fn decode_token(&self, token: &str) -> Result<Claims> {
        let validation = Validation::new(Algorithm::HS256);
        decode::<Claims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => ApiError::token_expired(),
                _ => ApiError::Unauthorized("Invalid authentication token".to_string()),
            })
    }

    pub fn expiration_secs(&self) -> i64 {
        self.expiration_secs
    }
}
