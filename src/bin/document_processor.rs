use document_processor::{app, config::Config, server, telemetry};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = Config::from_env()?;
    telemetry::init_tracing(&config.log_level);

    tracing::info!("document-processor starting");
    config.log_startup("document-processor");

    let router = app::process_router(&config);
    server::serve(router, &config.bind_address()).await
}
