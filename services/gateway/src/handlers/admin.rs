//! Administrative handlers
//!
//! Reset clears both books and the trade ledger. Test/administrative
//! operation only; not part of the trading protocol.

use crate::state::AppState;
use axum::{extract::State, http::StatusCode};

pub async fn reset(State(state): State<AppState>) -> StatusCode {
    let mut exchange = state.exchange.lock().await;
    exchange.reset();
    tracing::info!("exchange state reset");
    StatusCode::NO_CONTENT
}
