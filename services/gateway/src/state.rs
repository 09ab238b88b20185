use matching_engine::Exchange;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Shared application state.
///
/// The whole exchange sits behind one mutex: a single order's match must
/// not interleave with another's, because the walk mutates book contents.
#[derive(Clone)]
pub struct AppState {
    pub exchange: Arc<Mutex<Exchange>>,
}

impl AppState {
    pub fn new(exchange: Exchange) -> Self {
        Self {
            exchange: Arc::new(Mutex::new(exchange)),
        }
    }
}
