//! Weekly Fee Ledger
//!
//! Fee totals per settlement period, posted by the external fee-ledger
//! collaborator. The settlement run reads the completed week's total to
//! size the prize pool; a missing record for that week means the fee
//! source is unavailable and the run aborts cleanly.

use anchor_lang::prelude::*;

/// Collected fee total for one settlement period
///
/// Seeds: ["fees", week_id.to_le_bytes()]
#[account]
#[derive(InitSpace)]
pub struct WeekFees {
    /// Settlement period the fees were collected in
    pub week_id: u32,

    /// Total fees collected (fixed-point units)
    pub total: u64,

    /// Unix timestamp of the latest posting
    pub last_recorded_at: i64,

    /// PDA bump seed
    pub bump: u8,
}

impl WeekFees {
    pub const SEED: &'static [u8] = b"fees";
}
