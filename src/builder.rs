//! Unsigned buy-transaction assembly.
//!
//! Uses the Solana SDK for message construction and bincode for the wire
//! serialization; the result is handed to the client base64-encoded for
//! external signing.

use base64::prelude::*;
use solana_sdk::hash::Hash;
use solana_sdk::message::Message;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::transaction::Transaction;
use spl_associated_token_account::instruction::create_associated_token_account_idempotent;

use crate::error::BlinkError;
use crate::pump;

/// Build the unsigned two-instruction buy transaction.
///
/// The ATA create is always included (idempotent: a no-op at execution time
/// if the account already exists — existence is never checked here), then
/// the pump.fun buy. The buyer is the fee payer.
pub fn build_buy_transaction(
    buyer: &Pubkey,
    mint: &Pubkey,
    amount: f64,
    blockhash: Hash,
) -> Result<Transaction, BlinkError> {
    let create_ata = create_associated_token_account_idempotent(buyer, buyer, mint, &spl_token::id());
    let buy = pump::buy_instruction(buyer, mint, amount)?;

    let message = Message::new_with_blockhash(&[create_ata, buy], Some(buyer), &blockhash);
    Ok(Transaction::new_unsigned(message))
}

/// Serialize a transaction to the wire format and base64-encode it.
pub fn encode_base64(tx: &Transaction) -> Result<String, BlinkError> {
    let bytes = bincode::serialize(tx).map_err(|e| BlinkError::Encoding(e.to_string()))?;
    Ok(BASE64_STANDARD.encode(bytes))
}
