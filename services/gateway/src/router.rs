use crate::handlers::{admin, orders, trades};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/bid", post(orders::place_bid))
        .route("/offer", post(orders::place_offer))
        .route("/trades", get(trades::list_trades))
        .route("/bids", get(orders::list_bids))
        .route("/offers", get(orders::list_offers))
        .route("/admin/reset", post(admin::reset))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
