use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use env_logger::Env;

use trivia_api::{
    app_state::AppState, auth::JwtVerifier, config::Config, handlers,
    middleware::RequestIdMiddleware,
};

fn startup_error(err: impl std::fmt::Display) -> std::io::Error {
    std::io::Error::other(err.to_string())
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let config = Config::from_env();
    config.validate().map_err(startup_error)?;

    let verifier = JwtVerifier::from_config(&config)
        .await
        .map_err(startup_error)?;
    let state = AppState::new(&config, Arc::new(verifier))
        .await
        .map_err(startup_error)?;

    log::info!(
        "Starting HTTP server on {}:{}",
        config.web_server_host,
        config.web_server_port
    );

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .wrap(Cors::permissive())
            .wrap(Logger::default())
            .wrap(RequestIdMiddleware)
            .configure(handlers::configure)
            .default_service(web::to(handlers::not_found))
    })
    .bind((config.web_server_host.as_str(), config.web_server_port))?
    .run()
    .await
}
