mod config;
mod directory;
mod errors;
mod handlers;
mod models;
mod utils;

use actix_web::{web, App, HttpServer};
use config::AppConfig;
use directory::EmployeeDirectory;
use log::info;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let config = AppConfig::from_env()?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(config.log_filter.as_str())).init();

    // Shared across workers; the directory serializes access internally.
    let directory = web::Data::new(EmployeeDirectory::new());

    let (host, port) = config.bind_address();
    info!("Starting server at {}:{}", host, port);

    HttpServer::new(move || {
        App::new()
            .app_data(directory.clone())
            .configure(handlers::configure)
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}
