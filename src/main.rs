use dotenvy::dotenv;
use media_converter::app;
use media_converter::config::settings::AppConfig;
use media_converter::infrastructure::http::fetcher::ReqwestFetcher;
use media_converter::infrastructure::mediaconvert::client::MediaConvertService;
use media_converter::infrastructure::queue::rabbitmq::RabbitMqEventBus;
use media_converter::modules::conversion::template;
use media_converter::modules::webhook::events::{BroadcastEventBus, EventBus};
use media_converter::state::AppState;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    info!("Starting media converter...");

    let config = AppConfig::new()?;

    let jobs = Arc::new(MediaConvertService::new(&config.media_convert).await);
    let template = template::from_config(config.job_settings_path.as_deref())?;

    let events: Arc<dyn EventBus> = match &config.rabbitmq_url {
        Some(url) => Arc::new(RabbitMqEventBus::new(url, &config.events_queue).await?),
        None => {
            info!("RABBITMQ_URL not set, conversion events stay in-process");
            Arc::new(BroadcastEventBus::new(256))
        }
    };

    let port = config.server_port;
    let state = AppState::new(
        config,
        jobs,
        template,
        Arc::new(ReqwestFetcher::default()),
        events,
    );
    let app = app::create_app(state);

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await?;
    info!("🚀 Server running on http://0.0.0.0:{}", port);

    axum::serve(listener, app).await?;

    Ok(())
}
