//! Request payload resolution
//!
//! Bodies arrive as raw JSON and are resolved into the typed order payload
//! here, at the boundary; a body that does not fit the shape becomes the
//! side-specific structural-error response and never reaches the engine.

use serde_json::Value;
use types::order::{OrderRequest, Side};
use types::response::Response;

/// Resolve a raw request body into an order payload for the given side
pub fn resolve_order(side: Side, payload: Value) -> Result<OrderRequest, Response> {
    serde_json::from_value(payload).map_err(|_| Response::malformed(side))
}
