use std::io;

use actix_web::{middleware::Logger, web, App, HttpServer};
use quiz_batch_server::{
    app_state::AppState,
    config::Config,
    handlers::configure_routes,
    middleware::{build_cors, RequestIdMiddleware},
};

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::from_env();
    if let Err(err) = config.validate() {
        log::error!("invalid configuration: {err}");
        return Err(io::Error::new(io::ErrorKind::InvalidInput, err.to_string()));
    }

    let bind_address = (config.web_server_host.clone(), config.web_server_port);
    let state = AppState::new(config);

    log::info!(
        "starting HTTP server on {}:{} (model {})",
        bind_address.0,
        bind_address.1,
        state.config.completion_model
    );

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .wrap(Logger::default())
            .wrap(build_cors(&state.config))
            .wrap(RequestIdMiddleware)
            .configure(configure_routes)
    })
    .bind(bind_address)?
    .run()
    .await
}
