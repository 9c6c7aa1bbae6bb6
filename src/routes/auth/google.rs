use actix_web::{get, post, web};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::db::postgres_service::PostgresService;
use crate::services::GoogleOAuthClient;
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};
use crate::utils::webutils::bearer_claims;

#[derive(Serialize, Deserialize)]
pub struct AuthUrlRes {
    pub url: String,
}

#[derive(Serialize, Deserialize)]
pub struct CallbackQuery {
    pub code: String,
}

#[derive(Serialize, Deserialize)]
pub struct CallbackRes {
    pub detail: String,
}

#[get("")]
async fn auth_url(
    _req: actix_web::HttpRequest,
    google: web::Data<GoogleOAuthClient>,
) -> ApiResult<AuthUrlRes> {
    Ok(ApiResponse::Ok(AuthUrlRes {
        url: google.authorization_url(),
    }))
}

/// Exchanges the authorization code the frontend relayed and keeps only the
/// refresh token; access tokens are re-minted from it whenever calendar sync
/// needs one.
#[post("")]
async fn callback(
    _req: actix_web::HttpRequest,
    auth: BearerAuth,
    db: web::Data<Arc<PostgresService>>,
    google: web::Data<GoogleOAuthClient>,
    query: web::Query<CallbackQuery>,
) -> ApiResult<CallbackRes> {
    let claims = bearer_claims(&auth)?;

    if query.code.is_empty() {
        return Err(AppError::BadRequest("no code provided".to_string()));
    }

    let tokens = google.exchange_code(&query.code).await?;

    let Some(refresh_token) = tokens.refresh_token else {
        log::warn!("google exchange returned no refresh_token for user {}", claims.sub);
        return Err(AppError::BadRequest(
            "no refresh_token received; sign out of Google and authorize again with consent"
                .to_string(),
        ));
    };

    db.save_google_refresh_token(&claims.sub, refresh_token)
        .await?;

    Ok(ApiResponse::Ok(CallbackRes {
        detail: "Google refresh token saved".to_string(),
    }))
}
