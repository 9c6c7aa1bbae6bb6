use actix_web::{get, web};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use std::sync::Arc;

use crate::db::postgres_service::PostgresService;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::ProfileRes;
use crate::utils::webutils::bearer_claims;

#[get("")]
async fn me(
    _req: actix_web::HttpRequest,
    auth: BearerAuth,
    db: web::Data<Arc<PostgresService>>,
) -> ApiResult<ProfileRes> {
    let claims = bearer_claims(&auth)?;
    let user = db.get_user_by_id(&claims.sub).await?;
    Ok(ApiResponse::Ok(ProfileRes::from(user)))
}
