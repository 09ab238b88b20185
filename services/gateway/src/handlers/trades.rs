//! Trade history handler

use crate::state::AppState;
use axum::{Json, extract::State};
use types::trade::Trade;

/// All executed trades, oldest first
pub async fn list_trades(State(state): State<AppState>) -> Json<Vec<Trade>> {
    let exchange = state.exchange.lock().await;
    Json(exchange.list_trades())
}
