use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use std::sync::Arc;

use chronella_api::config::{EnvConfig, CONFIG};
use chronella_api::db::postgres_service::PostgresService;
use chronella_api::routes::configure_routes;
use chronella_api::services::{GoogleOAuthClient, MrsuClient};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init();
    let config = CONFIG.get_or_init(EnvConfig::from_env);
    let addr = format!("0.0.0.0:{}", config.port);

    let postgres_service = Arc::new(
        PostgresService::new(&config.db_url)
            .await
            .expect("Failed to initialize PostgresService"),
    );

    let mrsu_client =
        MrsuClient::from_config(&config.mrsu).expect("Failed to build MRSU client");
    let google_client =
        GoogleOAuthClient::from_config(&config.google).expect("Failed to build Google client");

    println!("Starting server on {}", addr);

    HttpServer::new(move || {
        // the React dev server talks to us from another origin
        let cors = Cors::default()
            .allowed_origin(&config.frontend_origin)
            .allowed_origin("http://localhost")
            .allow_any_method()
            .allow_any_header()
            .supports_credentials();

        App::new()
            .wrap(cors)
            .app_data(web::Data::new(Arc::clone(&postgres_service)))
            .app_data(web::Data::new(mrsu_client.clone()))
            .app_data(web::Data::new(google_client.clone()))
            .configure(configure_routes)
    })
    .bind(addr)?
    .run()
    .await
}
