use daily_games::args;
use daily_games::controller::api::{GamesApi, HttpGamesApi};
use daily_games::controller::{not_found, routes};

use actix_files::Files;
use actix_web::middleware::Logger;
use actix_web::web::{self, Data};
use actix_web::{App, HttpServer};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[actix_web::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging()?;
    let args = args::args_checks();

    let api: Arc<dyn GamesApi> = Arc::new(HttpGamesApi::new(
        args.api_base_url.clone(),
        args.request_timeout,
    )?);
    let api = Data::from(api);
    let static_dir = args.static_dir.clone();

    tracing::info!(
        host = %args.host,
        port = args.port,
        api_base_url = %args.api_base_url,
        "starting daily-games"
    );

    HttpServer::new(move || {
        let mut app = App::new()
            .wrap(Logger::default())
            .app_data(api.clone())
            .configure(routes);
        if let Some(dir) = &static_dir {
            app = app.service(Files::new("/static", dir));
        }
        app.default_service(web::to(not_found))
    })
    .bind((args.host.as_str(), args.port))?
    .run()
    .await?;
    Ok(())
}

/// `RUST_LOG` picks the filter; actix's access log is forwarded through the same subscriber.
fn init_logging() -> Result<(), Box<dyn std::error::Error>> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .try_init()
        .map_err(|e| e as Box<dyn std::error::Error>)?;
    Ok(())
}
