use std::sync::Arc;

use pricebot_core::{config::Config, ports::PriceSource, price::PriceFetcher};

#[tokio::main]
async fn main() -> Result<(), pricebot_core::Error> {
    pricebot_core::logging::init("pricebot")?;

    let cfg = Arc::new(Config::load()?);
    let prices: Arc<dyn PriceSource> = Arc::new(PriceFetcher::from_config(&cfg)?);

    pricebot_telegram::router::run_polling(cfg, prices)
        .await
        .map_err(|e| pricebot_core::Error::External(format!("telegram bot failed: {e:#}")))?;

    tracing::info!("pricebot stopped");
    Ok(())
}
