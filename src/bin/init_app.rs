use document_processor::{app, config::Config, server, telemetry};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = Config::from_env()?;
    telemetry::init_tracing(&config.log_level);

    tracing::info!("init-app starting");
    config.log_startup("init-app");

    server::serve(app::placeholder_router(), &config.bind_address()).await
}
