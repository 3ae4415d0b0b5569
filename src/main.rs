use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use inference_gateway::config::{LoggingSettings, Settings};
use inference_gateway::core::route_table;
use inference_gateway::error::json_config;
use inference_gateway::routes::{self, AppState};
use inference_gateway::services::InferenceClient;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn init_logging(logging: &LoggingSettings) {
    // RUST_LOG wins over the configured level
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&logging.level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    match logging.format.as_str() {
        "pretty" => subscriber.pretty().init(),
        "compact" => subscriber.compact().init(),
        _ => subscriber.json().init(),
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    // Logging settings live in the config, so it has to load first
    let settings = Settings::load().map_err(|e| {
        eprintln!("Failed to load configuration: {}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string())
    })?;

    init_logging(&settings.logging);

    info!("Starting inference gateway...");

    let inference = InferenceClient::new(
        settings.downstream.base_url.clone(),
        settings.downstream.timeout(),
        settings.downstream.connect_timeout(),
    )
    .map_err(|e| {
        error!("Failed to create inference client: {}", e);
        std::io::Error::new(std::io::ErrorKind::Other, e.to_string())
    })?;

    info!("Inference service at {}", inference.base_url());

    let prefix = settings.server.route_prefix.clone();
    for entry in route_table() {
        info!(
            "Route {:?} {}{} -> {} ({})",
            entry.method, prefix, entry.path, entry.downstream_path, entry.service
        );
    }

    let app_state = AppState::new(inference);

    // Configure HTTP server
    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .app_data(json_config())
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_with_prefix(&prefix))
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}
