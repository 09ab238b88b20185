//! Wire response envelope
//!
//! Every order submission resolves to a `Response` value; errors are
//! carried in the envelope rather than surfaced as transport faults.
//! Exactly one of `success_message`/`error_message` is present,
//! determined by `success`.

use crate::ids::OrderId;
use crate::order::Side;
use serde::{Deserialize, Serialize};

/// Outcome of handling a submitted bid or offer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Response {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub success_message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub record_id: Option<OrderId>,
}

impl Response {
    /// Order accepted; `record_id` identifies it even when fully matched
    pub fn placed(message: String, record_id: OrderId) -> Self {
        Self {
            success: true,
            success_message: Some(message),
            error_message: None,
            record_id: Some(record_id),
        }
    }

    /// Order failed business validation
    pub fn rejected(message: String) -> Self {
        Self {
            success: false,
            success_message: None,
            error_message: Some(message),
            record_id: None,
        }
    }

    /// Request body could not be resolved into an order at all
    pub fn malformed(side: Side) -> Self {
        Self::rejected(format!(
            "Request body didn't adhere to the structure of a valid {}.",
            side.noun()
        ))
    }
}
