use actix_web::{post, web};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use std::sync::Arc;

use crate::config::config;
use crate::db::postgres_service::PostgresService;
use crate::services::MrsuClient;
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::{LinkMrsuRes, RLinkMrsu};
use crate::utils::crypto::CredentialCipher;
use crate::utils::webutils::bearer_claims;

/// Proves the portal credentials against the live API, then stores them:
/// username in the clear, password AEAD-encrypted for later replay, student id
/// from the fetched profile.
#[post("")]
async fn link_mrsu(
    _req: actix_web::HttpRequest,
    auth: BearerAuth,
    db: web::Data<Arc<PostgresService>>,
    mrsu: web::Data<MrsuClient>,
    body: web::Json<RLinkMrsu>,
) -> ApiResult<LinkMrsuRes> {
    let claims = bearer_claims(&auth)?;

    if body.username.trim().is_empty() || body.password.is_empty() {
        return Err(AppError::BadRequest(
            "missing username or password".to_string(),
        ));
    }

    let profile = mrsu.login(body.username.trim(), &body.password).await?;

    let cipher = CredentialCipher::from_base64(&config().encryption_key)
        .map_err(|_| AppError::Internal("credential cipher unavailable".to_string()))?;
    let password_enc = cipher
        .encrypt(&body.password)
        .map_err(|_| AppError::Internal("credential encryption failed".to_string()))?;

    db.link_mrsu_account(
        &claims.sub,
        body.username.trim().to_string(),
        password_enc,
        profile.student_id(),
    )
    .await?;

    Ok(ApiResponse::Ok(LinkMrsuRes {
        success: true,
        mrsu_verified: true,
    }))
}
