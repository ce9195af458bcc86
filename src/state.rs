use std::sync::Arc;

use crate::rpc::BlockhashProvider;
use crate::store::BlinkStore;

/// Shared handles for request handlers. Cloned per request; no mutable
/// state crosses requests.
#[derive(Clone)]
pub struct AppState {
    pub store: BlinkStore,
    pub rpc: Arc<BlockhashProvider>,
}
