use actix_web::{dev::ServiceRequest, error::ErrorUnauthorized};
use actix_web_httpauth::extractors::bearer::BearerAuth;

use crate::config::config;
use crate::types::{error::AppError, token::Claims};
use crate::utils::token::decode_access_token;

/// Bearer middleware validator: a route behind this only runs for a token with
/// a good signature and unexpired claims.
pub async fn validate_token(
    req: ServiceRequest,
    credentials: BearerAuth,
) -> Result<ServiceRequest, (actix_web::Error, ServiceRequest)> {
    match decode_access_token(credentials.token(), &config().jwt_secret) {
        Ok(_) => Ok(req),
        Err(_) => Err((ErrorUnauthorized("Invalid or expired token").into(), req)),
    }
}

/// Claims for the already-validated bearer token of the current request.
pub fn bearer_claims(auth: &BearerAuth) -> Result<Claims, AppError> {
    decode_access_token(auth.token(), &config().jwt_secret).map_err(|_| AppError::Unauthorized)
}
