//! HTTP handlers and route configuration.

mod blogs;
mod health;
mod login;
mod users;


use actix_web::web;

use crate::middleware::error::AppError;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    // Malformed JSON bodies get the same problem-details body as other 400s.
    let json_config = web::JsonConfig::default()
        .error_handler(|err, _req| AppError::BadRequest(err.to_string()).into());

    cfg.app_data(json_config).service(
        web::scope("/api")
            .route("/health", web::get().to(health::health_check))
            .route("/login", web::post().to(login::login))
            .service(
                web::scope("/blogs")
                    .route("", web::get().to(blogs::list))
                    .route("", web::post().to(blogs::create))
                    .route("/stats", web::get().to(blogs::statistics))
                    .route("/{id}", web::get().to(blogs::get))
                    .route("/{id}", web::put().to(blogs::update))
                    .route("/{id}", web::delete().to(blogs::delete)),
            )
            .service(
                web::scope("/users")
                    .route("", web::get().to(users::list))
                    .route("", web::post().to(users::register)),
            ),
    );
}
