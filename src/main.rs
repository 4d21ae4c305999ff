use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use anyhow::Context;
use nairatax::config::{Config, LogFormat};
use nairatax::middleware::{not_found, RequestId};
use tracing_actix_web::TracingLogger;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    config
        .validate()
        .context("Configuration validation failed")?;

    init_tracing(&config);

    tracing::info!("Starting Naira tax estimation service");
    tracing::info!("Environment: {}", config.app.env);
    tracing::info!("Server binding to: {}", config.server.bind_address());

    let bind_address = config.server.bind_address();
    let max_payload_bytes = config.server.max_payload_bytes;

    let server = HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allowed_methods(vec!["GET", "POST"])
            .allow_any_header()
            .max_age(3600);

        App::new()
            .wrap(cors)
            .wrap(RequestId)
            .wrap(TracingLogger::default())
            .configure(|cfg| nairatax::modules::configure(cfg, max_payload_bytes))
            .default_service(web::to(not_found))
    })
    .workers(config.server.workers)
    .bind(&bind_address)
    .with_context(|| format!("Failed to bind {}", bind_address))?
    .run();

    tracing::info!("Server started at http://{}", bind_address);

    server.await?;
    Ok(())
}

fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| config.default_log_filter().into());

    let registry = tracing_subscriber::registry().with(filter);
    match config.app.log_format {
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json())
            .init(),
        LogFormat::Pretty => registry.with(tracing_subscriber::fmt::layer()).init(),
    }
}
