use entity::user::Model as UserModel;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Serialize, Deserialize)]
pub struct RUserRegister {
    pub email: String,
    pub password: String,
}

/// Password-grant style login form. `username` carries the email.
#[derive(Serialize, Deserialize)]
pub struct RUserLogin {
    pub username: String,
    pub password: String,
}

#[derive(Serialize, Deserialize)]
pub struct RLinkMrsu {
    pub username: String,
    pub password: String,
}

pub struct DBUserCreate {
    pub email: String,
    pub password_hash: String,
}

/// Public account shape. Never carries the password hash or any stored secret.
#[derive(Serialize, Deserialize)]
pub struct UserOut {
    pub id: Uuid,
    pub email: String,
    pub is_active: bool,
    pub student_id: Option<String>,
}

impl From<UserModel> for UserOut {
    fn from(u: UserModel) -> Self {
        UserOut {
            id: u.id,
            email: u.email,
            is_active: u.is_active,
            student_id: u.student_id,
        }
    }
}

/// Profile view for the setup wizard: account basics plus link status.
#[derive(Serialize, Deserialize)]
pub struct ProfileRes {
    pub id: Uuid,
    pub email: String,
    pub is_active: bool,
    pub student_id: Option<String>,
    pub mrsu_username: Option<String>,
    pub mrsu_linked: bool,
    pub google_linked: bool,
}

impl From<UserModel> for ProfileRes {
    fn from(u: UserModel) -> Self {
        ProfileRes {
            id: u.id,
            email: u.email,
            is_active: u.is_active,
            student_id: u.student_id,
            mrsu_username: u.mrsu_username,
            mrsu_linked: u.is_mrsu_verified,
            google_linked: u.is_google_verified,
        }
    }
}

#[derive(Serialize, Deserialize)]
pub struct LinkMrsuRes {
    pub success: bool,
    pub mrsu_verified: bool,
}
