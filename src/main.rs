use actix_web::{web::Data, App, HttpServer};
use anyhow::Context;
use dotenv::dotenv;
use log::info;

use career_relay::config::RelayConfig;
use career_relay::web::routes;
use career_relay::AppState;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Initialize environment
    dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    info!("Starting career guidance chat relay");

    let config = RelayConfig::from_env();
    let bind_addr = (config.host.clone(), config.port);
    let app_state = Data::new(AppState::new(config));

    info!("Listening on {}:{}", bind_addr.0, bind_addr.1);

    // Start web server
    HttpServer::new(move || {
        App::new()
            .app_data(app_state.clone())
            .configure(routes::configure)
    })
    .bind(bind_addr.clone())
    .with_context(|| format!("failed to bind {}:{}", bind_addr.0, bind_addr.1))?
    .run()
    .await
    .context("server terminated with an error")
}
