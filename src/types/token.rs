use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Claims carried by an access token. `sub` is the account id; expiry is
/// enforced on every decode.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: Uuid,
    pub email: String,
    pub iat: i64,
    pub exp: i64,
}

#[derive(Serialize, Deserialize)]
pub struct TokenOut {
    pub access_token: String,
    pub token_type: String,
}

impl TokenOut {
    pub fn bearer(access_token: String) -> Self {
        TokenOut {
            access_token,
            token_type: "bearer".to_string(),
        }
    }
}
