use std::sync::Arc;

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use testcontainers::{runners::AsyncRunner, ContainerAsync};
use testcontainers_modules::postgres::Postgres;

use chronella_api::config::{EnvConfig, GoogleConfig, MrsuConfig, CONFIG};
use chronella_api::db::postgres_service::PostgresService;

pub mod client;

pub const TEST_JWT_SECRET: &str = "test-secret-not-for-production";

/// Fixed AEAD key so tests can decrypt what the handlers stored.
#[allow(dead_code)]
pub fn test_encryption_key() -> String {
    BASE64.encode([9u8; 32])
}

pub fn get_test_config() -> EnvConfig {
    EnvConfig {
        port: 8000,
        db_url: "test".to_string(), // not used in tests, the container URL is
        jwt_secret: TEST_JWT_SECRET.to_string(),
        encryption_key: test_encryption_key(),
        frontend_origin: "http://localhost:3000".to_string(),
        mrsu: MrsuConfig {
            token_url: "http://mrsu.invalid/OAuth/Token".to_string(),
            api_base_url: "http://mrsu.invalid/v1".to_string(),
            client_id: "8".to_string(),
            client_secret: "test".to_string(),
        },
        google: GoogleConfig {
            client_id: "test-client".to_string(),
            client_secret: "test-secret".to_string(),
            auth_uri: "https://accounts.google.com/o/oauth2/auth".to_string(),
            token_uri: "http://google.invalid/token".to_string(),
            redirect_uri: "http://localhost:8000/auth/google/callback".to_string(),
        },
    }
}

/// The middleware reads the global config, so every test binary primes it once.
pub fn init_test_config() -> &'static EnvConfig {
    CONFIG.get_or_init(get_test_config)
}

pub struct TestContext {
    pub db: Arc<PostgresService>,
    pub _container: ContainerAsync<Postgres>,
}

impl TestContext {
    pub async fn new() -> TestContext {
        init_test_config();

        let postgres = Postgres::default();
        let container = postgres
            .start()
            .await
            .expect("Failed to start postgres container");

        let host = container.get_host().await.expect("Failed to get host");
        let port = container
            .get_host_port_ipv4(5432)
            .await
            .expect("Failed to get port");

        let db_url = format!("postgresql://postgres:postgres@{}:{}/postgres", host, port);

        let db = Arc::new(
            PostgresService::new(&db_url)
                .await
                .expect("Failed to initialize PostgresService"),
        );

        TestContext {
            db,
            _container: container,
        }
    }
}

// Test data helpers
pub mod test_data {
    use chronella_api::types::user::RUserRegister;

    #[allow(dead_code)]
    pub fn sample_register() -> RUserRegister {
        RUserRegister {
            email: "student@example.com".to_string(),
            password: "sup3r-secret".to_string(),
        }
    }

    #[allow(dead_code)]
    pub fn sample_register_with_email(email: &str) -> RUserRegister {
        RUserRegister {
            email: email.to_string(),
            password: "sup3r-secret".to_string(),
        }
    }
}
