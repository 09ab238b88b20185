//! Bid and offer submission handlers
//!
//! Business rejections ride back in the response envelope with HTTP 200;
//! the transport never turns them into error statuses.

use crate::models::resolve_order;
use crate::state::AppState;
use axum::{Json, extract::State};
use serde_json::Value;
use types::order::{Order, Side};
use types::response::Response;

pub async fn place_bid(
    State(state): State<AppState>,
    Json(payload): Json<Value>,
) -> Json<Response> {
    let request = match resolve_order(Side::Bid, payload) {
        Ok(request) => request,
        Err(response) => return Json(response),
    };

    let mut exchange = state.exchange.lock().await;
    Json(exchange.handle_bid(request))
}

pub async fn place_offer(
    State(state): State<AppState>,
    Json(payload): Json<Value>,
) -> Json<Response> {
    let request = match resolve_order(Side::Offer, payload) {
        Ok(request) => request,
        Err(response) => return Json(response),
    };

    let mut exchange = state.exchange.lock().await;
    Json(exchange.handle_offer(request))
}

pub async fn list_bids(State(state): State<AppState>) -> Json<Vec<Order>> {
    let exchange = state.exchange.lock().await;
    Json(exchange.list_bids().to_vec())
}

pub async fn list_offers(State(state): State<AppState>) -> Json<Vec<Order>> {
    let exchange = state.exchange.lock().await;
    Json(exchange.list_offers().to_vec())
}
