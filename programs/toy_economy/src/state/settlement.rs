//! Settlement Records
//!
//! The committed outcome of one weekly settlement run. The whole record
//! (settled flag, pool size, retained remainder and every prize row) is
//! written in a single account update, so a settlement either lands
//! completely or not at all, and `(week_id, rank)` uniqueness holds by
//! construction.
//!
//! Once written, prize rows never change except for the `claimed` flag
//! flipped when a winner withdraws.

use anchor_lang::prelude::*;

/// Committed settlement for one period
///
/// Seeds: ["settlement", week_id.to_le_bytes()]
#[account]
#[derive(InitSpace)]
pub struct WeekSettlement {
    /// Settled period
    pub week_id: u32,

    /// Set exactly once; later runs for the same period are no-ops
    pub settled: bool,

    /// Prize pool the split was computed from (fixed-point units)
    pub pool: u64,

    /// Pool units retained by flooring, never distributed (audit field)
    pub remainder: u64,

    /// One row per ranked winner, best finisher first
    #[max_len(3)]
    pub prizes: Vec<Prize>,

    /// Unix timestamp of the settlement run
    pub settled_at: i64,

    /// PDA bump seed
    pub bump: u8,
}

/// A single committed prize
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, InitSpace, Debug)]
pub struct Prize {
    /// Finishing rank, 1 = best
    pub rank: u8,

    /// Winning player
    pub player: Pubkey,

    /// Amount awarded (fixed-point units)
    pub amount: u64,

    /// Whether the winner has withdrawn this prize
    pub claimed: bool,
}

impl WeekSettlement {
    pub const SEED: &'static [u8] = b"settlement";
}
