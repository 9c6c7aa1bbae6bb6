use actix_web::{post, web};
use std::sync::Arc;

use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::{DBUserCreate, RUserRegister, UserOut};
use crate::utils::token::hash_password;

const MIN_PASSWORD_LEN: usize = 6;

fn email_looks_valid(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty() && domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
}

#[post("")]
async fn register(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    body: web::Json<RUserRegister>,
) -> ApiResult<UserOut> {
    let email = body.email.trim().to_lowercase();
    if !email_looks_valid(&email) {
        return Err(AppError::Validation("email is not valid".to_string()));
    }
    if body.password.chars().count() < MIN_PASSWORD_LEN {
        return Err(AppError::Validation(format!(
            "password must be at least {} characters",
            MIN_PASSWORD_LEN
        )));
    }

    let password_hash = hash_password(&body.password)
        .map_err(|_| AppError::Internal("password hashing failed".to_string()))?;

    let user_id = db
        .create_user(DBUserCreate {
            email,
            password_hash,
        })
        .await?;

    let user = db.get_user_by_id(&user_id).await?;
    Ok(ApiResponse::Created(UserOut::from(user)))
}
