use std::env;
use std::sync::OnceLock;

#[derive(Clone, Debug)]
pub struct EnvConfig {
    pub port: i32,
    pub db_url: String,
    pub jwt_secret: String,
    /// base64 of a 32-byte AES key for the stored portal password
    pub encryption_key: String,
    pub frontend_origin: String,
    pub mrsu: MrsuConfig,
    pub google: GoogleConfig,
}

#[derive(Clone, Debug)]
pub struct MrsuConfig {
    pub token_url: String,
    pub api_base_url: String,
    pub client_id: String,
    pub client_secret: String,
}

#[derive(Clone, Debug)]
pub struct GoogleConfig {
    pub client_id: String,
    pub client_secret: String,
    pub auth_uri: String,
    pub token_uri: String,
    pub redirect_uri: String,
}

impl EnvConfig {
    fn get_env(key: &str) -> String {
        env::var(key).unwrap_or_else(|_| panic!("Environment variable {} not set", key))
    }

    fn get_env_or(key: &str, default: &str) -> String {
        env::var(key).unwrap_or_else(|_| default.to_string())
    }

    pub fn from_env() -> Self {
        dotenv::dotenv().ok();

        let backend_url = Self::get_env_or("BACKEND_URL", "http://localhost:8000");

        EnvConfig {
            port: Self::get_env_or("PORT", "8000").parse().unwrap_or(8000),
            db_url: Self::get_env("POSTGRES_URI"),
            jwt_secret: Self::get_env("SECRET_KEY"),
            encryption_key: Self::get_env("ENCRYPTION_KEY"),
            frontend_origin: Self::get_env_or("FRONTEND_ORIGIN", "http://localhost:3000"),
            mrsu: MrsuConfig {
                token_url: Self::get_env_or("MRSU_TOKEN_URL", "https://p.mrsu.ru/OAuth/Token"),
                api_base_url: Self::get_env_or("MRSU_API_BASE_URL", "https://papi.mrsu.ru/v1"),
                client_id: Self::get_env_or("MRSU_CLIENT_ID", "8"),
                client_secret: Self::get_env_or("MRSU_CLIENT_SECRET", "qweasd"),
            },
            google: GoogleConfig {
                client_id: Self::get_env("GOOGLE_CLIENT_ID"),
                client_secret: Self::get_env("GOOGLE_CLIENT_SECRET"),
                auth_uri: Self::get_env_or(
                    "GOOGLE_AUTH_URI",
                    "https://accounts.google.com/o/oauth2/auth",
                ),
                token_uri: Self::get_env_or(
                    "GOOGLE_TOKEN_URI",
                    "https://oauth2.googleapis.com/token",
                ),
                redirect_uri: format!("{}/auth/google/callback", backend_url),
            },
        }
    }
}

pub static CONFIG: OnceLock<EnvConfig> = OnceLock::new();

pub fn config() -> &'static EnvConfig {
    CONFIG.get().expect("Not initialized")
}
