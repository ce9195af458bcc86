//! HTTP handlers for the blink endpoint.

use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Deserialize;
use solana_sdk::pubkey::Pubkey;

use crate::actions::{
    ActionGetResponse, ActionLinks, ActionParameter, ActionPostRequest, ActionPostResponse,
    LinkedAction,
};
use crate::builder;
use crate::error::BlinkError;
use crate::state::AppState;
use crate::store::BlinkRecord;

/// Amount when the query parameter is missing or does not parse. The
/// original endpoint treated both cases identically; preserved as-is.
const DEFAULT_AMOUNT: f64 = 0.1;

#[derive(Debug, Deserialize)]
pub struct AmountQuery {
    pub amount: Option<String>,
}

/// GET (and OPTIONS) — blink metadata with the selectable purchase options.
pub async fn get_blink(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ActionGetResponse>, BlinkError> {
    let record = state
        .store
        .find(&id)
        .await?
        .unwrap_or_else(BlinkRecord::fallback);

    tracing::debug!(%id, title = %record.title, "serving blink metadata");
    Ok(Json(blink_metadata(&record, &id)))
}

/// POST — build the unsigned buy transaction for the buyer in the body.
pub async fn post_buy(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(query): Query<AmountQuery>,
    Json(body): Json<ActionPostRequest>,
) -> Result<Json<ActionPostResponse>, BlinkError> {
    let record = state
        .store
        .find(&id)
        .await?
        .unwrap_or_else(BlinkRecord::fallback);

    let mint = record
        .mint
        .as_deref()
        .ok_or_else(|| BlinkError::InvalidAddress("blink record has no mint address".to_string()))?;
    let mint: Pubkey = mint
        .parse()
        .map_err(|_| BlinkError::InvalidAddress(format!("invalid mint: {mint}")))?;

    let buyer = parse_buyer(&body.account)?;

    let amount = amount_or_default(query.amount.as_deref());
    let blockhash = state.rpc.latest_blockhash().await?;

    let tx = builder::build_buy_transaction(&buyer, &mint, amount, blockhash)?;
    let transaction = builder::encode_base64(&tx)?;

    tracing::info!(%id, %buyer, %mint, amount, "built buy transaction");
    Ok(Json(ActionPostResponse {
        transaction,
        message: "You juts Pumped It!".to_string(),
    }))
}

/// Shape the metadata response: three fixed purchase amounts plus a
/// custom-amount form.
pub fn blink_metadata(record: &BlinkRecord, id: &str) -> ActionGetResponse {
    let name = token_name(&record.title);
    let href = |amount: &str| format!("/api/actions/tokens/{id}?amount={amount}");

    ActionGetResponse {
        icon: record.icon.clone(),
        title: record.title.clone(),
        description: record.description.clone(),
        label: record.label.clone(),
        links: ActionLinks {
            actions: vec![
                LinkedAction {
                    href: href("100000"),
                    label: format!("Buy 100k {name}"),
                    parameters: None,
                },
                LinkedAction {
                    href: href("500000"),
                    label: format!("Buy 500k {name}"),
                    parameters: None,
                },
                LinkedAction {
                    href: href("1000000"),
                    label: format!("Buy 1M {name}"),
                    parameters: None,
                },
                LinkedAction {
                    href: href("{amount}"),
                    label: "Custom amount".to_string(),
                    parameters: Some(vec![ActionParameter {
                        name: "amount".to_string(),
                        label: "Enter amount".to_string(),
                    }]),
                },
            ],
        },
    }
}

/// The buyer's wallet address from the POST body.
fn parse_buyer(account: &str) -> Result<Pubkey, BlinkError> {
    account
        .parse()
        .map_err(|_| BlinkError::InvalidAddress(format!("'{account}' is not a valid pubkey")))
}

/// Token display name: the record title minus its leading "Buy " prefix
/// (first four characters). Cut on char boundaries so a multibyte title
/// keeps its remainder instead of collapsing to empty.
fn token_name(title: &str) -> &str {
    let cut = title
        .char_indices()
        .nth(4)
        .map(|(i, _)| i)
        .unwrap_or(title.len());
    &title[cut..]
}

/// Resolve the requested amount. Missing, unparsable, zero, or non-finite
/// values all fall back to the default rather than erroring.
fn amount_or_default(param: Option<&str>) -> f64 {
    param
        .and_then(|raw| raw.parse::<f64>().ok())
        .filter(|v| v.is_finite() && *v != 0.0)
        .unwrap_or(DEFAULT_AMOUNT)
}
