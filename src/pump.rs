//! pump.fun program constants and deterministic address derivation.
//!
//! The buy instruction payload is a manual binary encoding: an 8-byte
//! discriminator, the token amount scaled to base units as u64 LE, and a
//! max-SOL-cost sentinel as i64 LE (-1 = no limit).

use solana_sdk::instruction::{AccountMeta, Instruction};
use solana_sdk::pubkey::Pubkey;

use crate::error::BlinkError;

/// Well-known program IDs and accounts.
pub mod program_ids {
    use super::Pubkey;

    pub fn pump_program() -> Pubkey {
        "6EF8rrecthR5Dkzon8Nwu78hRvfCKubJ14M5uBEwF6P"
            .parse()
            .unwrap()
    }

    pub fn fee_recipient() -> Pubkey {
        "CebN5WGQ4jvEPvsVU4EoHEpgzq1VV7AbicfhtW4xC9iM"
            .parse()
            .unwrap()
    }

    pub fn event_authority() -> Pubkey {
        "Ce6TQqeHC9p8KetsN6JsjHK7UTZk7nasjjnr7XxXp9F1"
            .parse()
            .unwrap()
    }
}

/// Anchor discriminator for the pump.fun `buy` instruction.
pub const BUY_DISCRIMINATOR: [u8; 8] = [0x66, 0x06, 0x3d, 0x12, 0x01, 0xda, 0xeb, 0xea];

/// Pump tokens have 6 decimals; amounts scale by this factor to base units.
pub const TOKEN_BASE_UNITS: f64 = 1_000_000.0;

/// Sentinel for "no maximum SOL cost" in the buy payload.
pub const MAX_SOL_COST_UNLIMITED: i64 = -1;

/// Derive the pump.fun global config PDA. Pure: same output on every call.
pub fn global_address() -> Pubkey {
    Pubkey::find_program_address(&[b"global"], &program_ids::pump_program()).0
}

/// Derive the bonding curve PDA for a mint. Pure: same (seed, mint) pair
/// always yields the same address.
pub fn bonding_curve_address(mint: &Pubkey) -> Pubkey {
    Pubkey::find_program_address(
        &[b"bonding-curve", mint.as_ref()],
        &program_ids::pump_program(),
    )
    .0
}

/// Scale a token amount to base units, rejecting values a u64 cannot
/// represent. A float cast would saturate (negative to 0, oversized to
/// u64::MAX) and encode a payload the caller never asked for.
fn amount_base_units(amount: f64) -> Result<u64, BlinkError> {
    let scaled = amount * TOKEN_BASE_UNITS;
    if !scaled.is_finite() || scaled <= 0.0 || scaled >= u64::MAX as f64 {
        return Err(BlinkError::Encoding(format!(
            "amount out of range: {amount}"
        )));
    }
    Ok(scaled as u64)
}

/// Encode the 24-byte buy instruction payload.
pub fn buy_instruction_data(amount: f64) -> Result<[u8; 24], BlinkError> {
    let base_units = amount_base_units(amount)?;

    let mut data = [0u8; 24];
    data[0..8].copy_from_slice(&BUY_DISCRIMINATOR);
    data[8..16].copy_from_slice(&base_units.to_le_bytes());
    data[16..24].copy_from_slice(&MAX_SOL_COST_UNLIMITED.to_le_bytes());
    Ok(data)
}

/// Build the pump.fun buy instruction.
///
/// Account order is fixed by the program: global, fee recipient, mint,
/// bonding curve, bonding curve ATA, buyer ATA, buyer, system program,
/// token program, rent sysvar, event authority, pump program.
pub fn buy_instruction(buyer: &Pubkey, mint: &Pubkey, amount: f64) -> Result<Instruction, BlinkError> {
    let program = program_ids::pump_program();
    let bonding_curve = bonding_curve_address(mint);
    let bonding_curve_ata =
        spl_associated_token_account::get_associated_token_address(&bonding_curve, mint);
    let buyer_ata = spl_associated_token_account::get_associated_token_address(buyer, mint);

    Ok(Instruction::new_with_bytes(
        program,
        &buy_instruction_data(amount)?,
        vec![
            AccountMeta::new_readonly(global_address(), false),
            AccountMeta::new(program_ids::fee_recipient(), false),
            AccountMeta::new_readonly(*mint, false),
            AccountMeta::new(bonding_curve, false),
            AccountMeta::new(bonding_curve_ata, false),
            AccountMeta::new(buyer_ata, false),
            AccountMeta::new(*buyer, true),
            AccountMeta::new_readonly(solana_sdk::system_program::id(), false),
            AccountMeta::new_readonly(spl_token::id(), false),
            AccountMeta::new_readonly(solana_sdk::sysvar::rent::id(), false),
            AccountMeta::new_readonly(program_ids::event_authority(), false),
            AccountMeta::new_readonly(program, false),
        ],
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_mint() -> Pubkey {
        "FKjSjCqByQRwSzZoMXA7bKnDbJe41YgJTHFFzBeC42bH".parse().unwrap()
    }

    fn test_buyer() -> Pubkey {
        "DgT9qyYwYKBRDyDw3EfR12LHQCQjtNrKu2qMsXHuosmB".parse().unwrap()
    }

    #[test]
    fn test_global_derivation_is_deterministic() {
        assert_eq!(global_address(), global_address());
    }

    #[test]
    fn test_bonding_curve_derivation_is_deterministic() {
        let mint = test_mint();
        assert_eq!(bonding_curve_address(&mint), bonding_curve_address(&mint));
    }

    #[test]
    fn test_bonding_curve_depends_on_mint() {
        let other: Pubkey = "5ZWgXcyqrrNpQHCme5SdC5hCeYb2o3fEJhF7Gok3bTVN".parse().unwrap();
        assert_ne!(bonding_curve_address(&test_mint()), bonding_curve_address(&other));
    }

    #[test]
    fn test_derived_addresses_are_off_curve() {
        // PDAs have no corresponding private key
        assert!(!global_address().is_on_curve());
        assert!(!bonding_curve_address(&test_mint()).is_on_curve());
    }

    #[test]
    fn test_buy_data_layout() {
        let data = buy_instruction_data(100_000.0).unwrap();
        assert_eq!(data.len(), 24);
        assert_eq!(&data[0..8], &BUY_DISCRIMINATOR);
        assert_eq!(
            u64::from_le_bytes(data[8..16].try_into().unwrap()),
            100_000_000_000
        );
        assert_eq!(i64::from_le_bytes(data[16..24].try_into().unwrap()), -1);
    }

    #[test]
    fn test_buy_data_fractional_amount() {
        let data = buy_instruction_data(0.1).unwrap();
        assert_eq!(
            u64::from_le_bytes(data[8..16].try_into().unwrap()),
            100_000
        );
    }

    #[test]
    fn test_negative_amount_rejected() {
        // Must error, not encode 0 base units
        let result = buy_instruction_data(-5.0);
        assert!(matches!(result, Err(BlinkError::Encoding(_))));
    }

    #[test]
    fn test_oversized_amount_rejected() {
        // Must error, not encode u64::MAX base units
        let result = buy_instruction_data(1e20);
        assert!(matches!(result, Err(BlinkError::Encoding(_))));
    }

    #[test]
    fn test_non_finite_amount_rejected() {
        assert!(buy_instruction_data(f64::NAN).is_err());
        assert!(buy_instruction_data(f64::INFINITY).is_err());
    }

    #[test]
    fn test_buy_instruction_shape() {
        let ix = buy_instruction(&test_buyer(), &test_mint(), 100_000.0).unwrap();
        assert_eq!(ix.program_id, program_ids::pump_program());
        assert_eq!(ix.accounts.len(), 12);
        assert_eq!(ix.data, buy_instruction_data(100_000.0).unwrap());

        // buyer is the only signer, and is writable
        let signers: Vec<_> = ix.accounts.iter().filter(|m| m.is_signer).collect();
        assert_eq!(signers.len(), 1);
        assert_eq!(signers[0].pubkey, test_buyer());
        assert!(signers[0].is_writable);
    }
}
