use crate::db::postgres_service::PostgresService;
use crate::types::{error::AppError, user::DBUserCreate};
use chrono::Utc;
use entity::user::{ActiveModel as UserActive, Entity as User, Model as UserModel};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter, Set,
    TransactionTrait,
};
use uuid::Uuid;

impl PostgresService {
    pub async fn user_exists_by_email(&self, email: &str) -> Result<bool, AppError> {
        Ok(User::find()
            .filter(entity::user::Column::Email.eq(email))
            .count(&self.db)
            .await?
            > 0)
    }

    pub async fn get_user_by_id(&self, id: &Uuid) -> Result<UserModel, AppError> {
        Ok(User::find_by_id(*id)
            .one(&self.db)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("User does not exist".into()))?)
    }

    pub async fn get_user_by_email(&self, email: &str) -> Result<UserModel, AppError> {
        Ok(User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(&self.db)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("User does not exist".into()))?)
    }

    /// Signup: create user with a hashed password. Secrets for linked services
    /// arrive later through the link flows.
    pub async fn create_user(&self, payload: DBUserCreate) -> Result<Uuid, AppError> {
        if self.user_exists_by_email(&payload.email).await? {
            return Err(AppError::AlreadyExists);
        }
        let uid = Uuid::new_v4();
        let now = Utc::now();
        let txn = self.db.begin().await?;

        User::insert(UserActive {
            id: Set(uid),
            email: Set(payload.email),
            password_hash: Set(payload.password_hash),
            is_active: Set(true),
            student_id: Set(None),
            mrsu_username: Set(None),
            mrsu_password_enc: Set(None),
            is_mrsu_verified: Set(false),
            google_refresh_token: Set(None),
            is_google_verified: Set(false),
            created_at: Set(now),
            updated_at: Set(now),
        })
        .exec(&txn)
        .await?;

        txn.commit().await?;
        Ok(uid)
    }

    /// Persist verified portal credentials. Only called after a full upstream
    /// round-trip succeeded; the password arrives already encrypted.
    pub async fn link_mrsu_account(
        &self,
        user_id: &Uuid,
        username: String,
        password_enc: String,
        student_id: Option<String>,
    ) -> Result<(), AppError> {
        let mut am: UserActive = self.get_user_by_id(user_id).await?.into();
        am.mrsu_username = Set(Some(username));
        am.mrsu_password_enc = Set(Some(password_enc));
        am.is_mrsu_verified = Set(true);
        if student_id.is_some() {
            am.student_id = Set(student_id);
        }
        am.updated_at = Set(Utc::now());
        Ok(am.update(&self.db).await.map(|_| ())?)
    }

    pub async fn save_google_refresh_token(
        &self,
        user_id: &Uuid,
        refresh_token: String,
    ) -> Result<(), AppError> {
        let mut am: UserActive = self.get_user_by_id(user_id).await?.into();
        am.google_refresh_token = Set(Some(refresh_token));
        am.is_google_verified = Set(true);
        am.updated_at = Set(Utc::now());
        Ok(am.update(&self.db).await.map(|_| ())?)
    }
}
