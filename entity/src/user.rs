use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "user")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: Uuid,
    pub email: String,
    pub password_hash: String,
    pub is_active: bool,
    pub student_id: Option<String>, // id in the university portal, set on link
    pub mrsu_username: Option<String>,
    pub mrsu_password_enc: Option<String>, // base64(nonce || AES-256-GCM ciphertext)
    pub is_mrsu_verified: bool,
    pub google_refresh_token: Option<String>,
    pub is_google_verified: bool,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
