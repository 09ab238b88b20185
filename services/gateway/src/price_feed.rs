//! Periodic reference price fetch
//!
//! Polls the external quote endpoint on a fixed interval and writes the
//! last traded price into the shared price cell. The first fetch happens
//! immediately at startup. A failed fetch is logged and skipped; the cell
//! keeps the last good value and matching is never blocked.

use matching_engine::PriceCell;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

/// Quote payload from the external API; the last traded price arrives as
/// a single-element array.
#[derive(Debug, Deserialize)]
struct StockQuote {
    last: Vec<Decimal>,
}

#[derive(Error, Debug)]
pub enum FeedError {
    #[error("quote request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("quote payload contained no price")]
    EmptyQuote,
}

/// Fetch loop; runs for the lifetime of the process
pub async fn run(cell: Arc<PriceCell>, quote_url: String, interval: Duration) {
    let client = reqwest::Client::new();
    let mut ticker = tokio::time::interval(interval);

    loop {
        ticker.tick().await;
        match fetch_quote(&client, &quote_url).await {
            Ok(price) => {
                cell.store(price);
                tracing::info!(%price, "fetched reference price");
            }
            Err(error) => {
                tracing::warn!(%error, "reference price fetch failed");
            }
        }
    }
}

async fn fetch_quote(client: &reqwest::Client, quote_url: &str) -> Result<Decimal, FeedError> {
    let quote: StockQuote = client
        .get(quote_url)
        .send()
        .await?
        .error_for_status()?
        .json()
        .await?;

    quote.last.first().copied().ok_or(FeedError::EmptyQuote)
}
