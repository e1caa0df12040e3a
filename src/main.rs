use std::sync::Arc;
use std::time::Duration;

use article_enhancer::app::create_app;
use article_enhancer::config;
use article_enhancer::consts;
use article_enhancer::service::EnhanceService;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));
    log::info!("Initializing Article Enhancer service...");

    let config = config::load_config().map_err(std::io::Error::other)?;

    let http_client = reqwest::Client::builder()
        .connect_timeout(Duration::from_secs(config.defaults.timeout_secs))
        .read_timeout(Duration::from_secs(consts::READ_TIMEOUT_SECS))
        .build()
        .map_err(std::io::Error::other)?;

    log::info!(
        "upstream {} default model {}",
        config.api_url,
        config.defaults.model
    );

    let enhance_service = Arc::new(EnhanceService::new(http_client, &config));

    let server = actix_web::HttpServer::new(move || create_app(enhance_service.clone()));

    server.bind(("0.0.0.0", consts::SERVER_PORT))?.run().await
}
