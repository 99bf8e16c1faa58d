//! Purchase Receipts
//!
//! One receipt PDA exists per `(item, nonce)` pair and doubles as the
//! replay guard: the account is created inside the same transaction that
//! advances the price, so the consumed-check and the insert are a single
//! atomic insert-if-absent. Receipts are permanent; a nonce stays burned
//! even long after its request's deadline has passed.

use anchor_lang::prelude::*;

/// Record of a consumed purchase nonce
///
/// Seeds: ["receipt", item_id.to_le_bytes(), nonce.to_le_bytes()]
#[account]
#[derive(InitSpace)]
pub struct PurchaseReceipt {
    /// Item the purchase targeted
    pub item_id: u64,

    /// Caller-supplied one-time nonce
    pub nonce: u64,

    /// Authenticated payer
    pub payer: Pubkey,

    /// Price the purchase paid
    pub paid_price: u64,

    /// Unix timestamp of the purchase
    pub minted_at: i64,

    /// Set on first use; a second arrival of the same nonce sees this flag
    pub consumed: bool,

    /// PDA bump seed
    pub bump: u8,
}

impl PurchaseReceipt {
    pub const SEED: &'static [u8] = b"receipt";
}
