//! pump-blink-api: a Solana Actions ("blink") endpoint for pump.fun token
//! purchases.
//!
//! The service exposes one route, `/api/actions/tokens/{id}`:
//!
//! - `GET` (and `OPTIONS`) returns blink metadata — a set of selectable
//!   purchase amounts rendered by Actions-aware clients.
//! - `POST` builds an **unsigned** pump.fun buy transaction for the buyer
//!   address in the request body and returns it base64-encoded for
//!   client-side wallet signing. The service never holds keys and never
//!   signs.
//!
//! # Architecture
//!
//! 1. **Core building blocks** (`pump`, `builder`) — deterministic address
//!    derivation and unsigned transaction assembly on the Solana SDK.
//! 2. **Edges** (`handlers`, `store`, `rpc`) — axum handlers over a MongoDB
//!    blink-record lookup and a thin RPC wrapper for the recent blockhash.

pub mod actions;
pub mod builder;
pub mod config;
pub mod error;
pub mod handlers;
pub mod pump;
pub mod rpc;
pub mod state;
pub mod store;

pub use config::Config;
pub use error::BlinkError;
pub use state::AppState;
pub use store::{BlinkRecord, BlinkStore};
