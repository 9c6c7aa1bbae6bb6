use crate::utils::webutils::validate_token;
use actix_web::web;

pub mod auth;
pub mod health;
pub mod user;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    let user_auth = actix_web_httpauth::middleware::HttpAuthentication::bearer(validate_token);

    cfg.service(web::scope("/health").service(health::health));

    cfg.service(
        web::scope("/auth")
            .service(web::scope("/register").service(auth::register::register))
            .service(web::scope("/login").service(auth::login::login))
            .service(web::scope("/google/url").service(auth::google::auth_url))
            .service(
                web::scope("/google/callback")
                    .service(auth::google::callback)
                    .wrap(user_auth.clone()),
            ),
    );

    cfg.service(
        web::scope("/users")
            .service(
                web::scope("/link-mrsu")
                    .service(user::link_mrsu::link_mrsu)
                    .wrap(user_auth.clone()),
            )
            .service(
                web::scope("/me")
                    .service(user::me::me)
                    .wrap(user_auth),
            ),
    );
}
