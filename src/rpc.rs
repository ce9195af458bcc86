//! Recent-blockhash fetch over Solana RPC.

use solana_client::nonblocking::rpc_client::RpcClient;
use solana_sdk::hash::Hash;

use crate::error::BlinkError;

/// Thin wrapper keeping the RPC dependency at one seam.
pub struct BlockhashProvider {
    client: RpcClient,
}

impl BlockhashProvider {
    pub fn new(url: String) -> Self {
        Self {
            client: RpcClient::new(url),
        }
    }

    /// Fetch the latest blockhash. Awaited with no timeout or retry; an
    /// unreachable endpoint surfaces as `UpstreamUnavailable`.
    pub async fn latest_blockhash(&self) -> Result<Hash, BlinkError> {
        self.client
            .get_latest_blockhash()
            .await
            .map_err(|e| BlinkError::UpstreamUnavailable(e.to_string()))
    }
}
