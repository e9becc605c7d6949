use actix_web::middleware::Logger;
use actix_web::{web, App, HttpServer};
use auction_payments::config::Config;
use auction_payments::web::app::{configure_app, init_app_state};
use log::info;
use std::io;

pub async fn run_app(config: Config) -> io::Result<()> {
    let app_state = init_app_state(&config)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

    info!(
        "Starting server on port {} (due dates from {})",
        config.port, config.due_date_basis
    );

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .wrap(Logger::default())
            .configure(configure_app)
    })
    .bind(("127.0.0.1", config.port))?
    .run()
    .await
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::from_env()
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
    run_app(config).await
}
