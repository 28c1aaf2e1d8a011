use std::net::TcpListener;

use actix_cors::Cors;
use actix_web::{dev::Server, middleware::Logger, web, App, HttpServer};

use crate::{
    configuration::{CorsSettings, Settings},
    routes::{health_check_route, scrape_route, scrape_route::ScrapeError},
    services::Fetcher,
};

pub fn run(listener: TcpListener, configuration: Settings) -> Result<Server, std::io::Error> {
    let fetcher = web::Data::new(Fetcher::new(configuration.fetcher));
    let extractor_settings = web::Data::new(configuration.extractor);
    let cors_settings = configuration.cors;

    if cors_settings.allows_any_origin() {
        log::warn!("CORS allows any origin; use an explicit allow-list outside local development");
    }

    let server = HttpServer::new(move || {
        App::new()
            .wrap(build_cors(&cors_settings))
            .wrap(Logger::default())
            .service(health_check_route::health_check)
            .service(scrape_route::scrape)
            .app_data(query_config())
            .app_data(fetcher.clone())
            .app_data(extractor_settings.clone())
    })
    .listen(listener)?
    .run();

    Ok(server)
}

/// Malformed query strings (e.g. a repeated `url`) answer with the same JSON
/// body as a missing `url` instead of actix's plain-text error.
fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(|err, req| {
        log::info!("Rejected query `{}`: {}", req.query_string(), err);
        ScrapeError::MissingUrl.into()
    })
}

/// Requests carrying an `Origin` outside the allow-list are rejected before
/// they reach a handler.
fn build_cors(settings: &CorsSettings) -> Cors {
    let cors = Cors::default()
        .allowed_methods(vec!["GET"])
        .max_age(3600);

    match settings.allows_any_origin() {
        true => cors.allow_any_origin(),
        false => settings
            .allowed_origins
            .iter()
            .fold(cors, |cors, origin| cors.allowed_origin(origin)),
    }
}
