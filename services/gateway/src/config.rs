//! Gateway configuration
//!
//! All knobs come from the environment. With `MOCK_STOCK_PRICE` set the
//! gateway never talks to the external quote API and every order is
//! validated against the fixed value instead.

use rust_decimal::Decimal;
use std::net::SocketAddr;
use std::time::Duration;
use thiserror::Error;

/// Default external quote endpoint (last traded price of the security)
const DEFAULT_QUOTE_URL: &str = "https://api.marketdata.app/v1/stocks/quotes/AAPL";

/// Quote refresh cadence when no interval is configured
const DEFAULT_FETCH_INTERVAL_SECS: u64 = 60 * 60;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid {name}: {value}")]
    Invalid { name: &'static str, value: String },
}

/// Runtime configuration, resolved once at startup
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Address the HTTP server binds to
    pub bind_addr: SocketAddr,
    /// Fixed reference price; disables the external fetch task
    pub mock_price: Option<Decimal>,
    /// External quote endpoint polled by the fetch task
    pub quote_url: String,
    /// Delay between quote fetches
    pub fetch_interval: Duration,
}

impl GatewayConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let bind_addr = match std::env::var("GATEWAY_BIND") {
            Ok(value) => value.parse().map_err(|_| ConfigError::Invalid {
                name: "GATEWAY_BIND",
                value,
            })?,
            Err(_) => SocketAddr::from(([0, 0, 0, 0], 8080)),
        };

        let mock_price = match std::env::var("MOCK_STOCK_PRICE") {
            Ok(value) => Some(value.parse().map_err(|_| ConfigError::Invalid {
                name: "MOCK_STOCK_PRICE",
                value,
            })?),
            Err(_) => None,
        };

        let quote_url =
            std::env::var("QUOTE_URL").unwrap_or_else(|_| DEFAULT_QUOTE_URL.to_string());

        let fetch_interval = match std::env::var("FETCH_INTERVAL_SECS") {
            Ok(value) => Duration::from_secs(value.parse().map_err(|_| ConfigError::Invalid {
                name: "FETCH_INTERVAL_SECS",
                value,
            })?),
            Err(_) => Duration::from_secs(DEFAULT_FETCH_INTERVAL_SECS),
        };

        Ok(Self {
            bind_addr,
            mock_price,
            quote_url,
            fetch_interval,
        })
    }
}
