use actix_web::{post, web};
use std::sync::Arc;

use crate::config::config;
use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::token::TokenOut;
use crate::types::user::RUserLogin;
use crate::utils::token::{issue_access_token, verify_password};

#[post("")]
async fn login(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    form: web::Form<RUserLogin>,
) -> ApiResult<TokenOut> {
    let email = form.username.trim().to_lowercase();

    // same answer whether the account is missing or the password is wrong
    let user = match db.get_user_by_email(&email).await {
        Ok(user) => user,
        Err(_) => return Err(AppError::Unauthorized),
    };

    let password_ok = verify_password(&form.password, &user.password_hash).unwrap_or(false);
    if !password_ok || !user.is_active {
        return Err(AppError::Unauthorized);
    }

    let access_token = issue_access_token(user.id, &user.email, &config().jwt_secret)
        .map_err(|_| AppError::Internal("token issuance failed".to_string()))?;

    Ok(ApiResponse::Ok(TokenOut::bearer(access_token)))
}
