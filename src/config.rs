use std::env;

/// Runtime configuration, read from the environment with defaults for every
/// key.
#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: String,
    pub mongodb_uri: String,
    pub mongodb_db: String,
    pub rpc_url: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            bind_addr: env_or("BIND_ADDR", "0.0.0.0:3000"),
            mongodb_uri: env_or("MONGODB_URI", "mongodb://127.0.0.1:27017"),
            mongodb_db: env_or("MONGODB_DB", "Cluster0"),
            rpc_url: env_or("SOLANA_RPC_URL", "https://api.mainnet-beta.solana.com"),
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}
