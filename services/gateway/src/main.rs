mod config;
mod handlers;
mod models;
mod price_feed;
mod router;
mod state;

use std::sync::Arc;

use config::GatewayConfig;
use matching_engine::{Exchange, PriceCell, ReferencePriceSource};
use router::create_router;
use rust_decimal::Decimal;
use state::AppState;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    tracing::info!("Starting exchange gateway");

    let config = GatewayConfig::from_env()?;

    // Fixed price for test/mock mode; otherwise a background task keeps
    // the shared price cell current
    let price_source = match config.mock_price {
        Some(price) => {
            tracing::info!(%price, "using fixed reference price");
            ReferencePriceSource::Fixed(price)
        }
        None => {
            let cell = Arc::new(PriceCell::new(Decimal::ZERO));
            tokio::spawn(price_feed::run(
                cell.clone(),
                config.quote_url.clone(),
                config.fetch_interval,
            ));
            ReferencePriceSource::Feed(cell)
        }
    };

    let state = AppState::new(Exchange::new(price_source));
    let app = create_router(state);

    let listener = TcpListener::bind(config.bind_addr).await?;
    tracing::info!("Listening on {}", config.bind_addr);
    axum::serve(listener, app).await?;

    Ok(())
}
