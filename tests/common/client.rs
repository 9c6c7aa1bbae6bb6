use actix_web::{web, App};
use std::sync::Arc;
use uuid::Uuid;

use chronella_api::{
    db::postgres_service::PostgresService,
    services::{GoogleOAuthClient, MrsuClient},
    types::user::DBUserCreate,
    utils::token::{hash_password, issue_access_token},
};

pub struct TestClient {
    pub db: Arc<PostgresService>,
}

impl TestClient {
    pub fn new(db: Arc<PostgresService>) -> Self {
        super::init_test_config();
        TestClient { db }
    }

    /// Upstream clients pointed at the (unreachable) defaults from the test
    /// config. Tests that talk to an upstream build their own against a mock
    /// server and pass them to `create_app`.
    #[allow(dead_code)]
    pub fn default_clients() -> (MrsuClient, GoogleOAuthClient) {
        let cfg = super::init_test_config();
        (
            MrsuClient::from_config(&cfg.mrsu).expect("Failed to build MRSU client"),
            GoogleOAuthClient::from_config(&cfg.google).expect("Failed to build Google client"),
        )
    }

    #[allow(dead_code)]
    pub fn create_app(
        &self,
        mrsu: MrsuClient,
        google: GoogleOAuthClient,
    ) -> actix_web::App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .app_data(web::Data::new(Arc::clone(&self.db)))
            .app_data(web::Data::new(mrsu))
            .app_data(web::Data::new(google))
            .configure(chronella_api::routes::configure_routes)
    }

    /// Seeds an account straight through the db layer and mints a bearer token
    /// for it, skipping the register/login endpoints.
    #[allow(dead_code)]
    pub async fn create_test_user(&self, email: &str, password: &str) -> (Uuid, String) {
        let password_hash = hash_password(password).expect("Failed to hash password");
        let user_id = self
            .db
            .create_user(DBUserCreate {
                email: email.to_string(),
                password_hash,
            })
            .await
            .expect("Failed to create user");
        let token = issue_access_token(user_id, email, super::TEST_JWT_SECRET)
            .expect("Failed to issue token");
        (user_id, token)
    }
}
