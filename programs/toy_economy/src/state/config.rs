//! Global Protocol Configuration
//!
//! This account stores protocol-wide settings that apply to every item and
//! every settlement period.

use anchor_lang::prelude::*;

/// Global configuration account (singleton PDA)
///
/// Seeds: ["config"]
#[account]
#[derive(InitSpace)]
pub struct Config {
    /// Protocol administrator with special privileges
    pub admin: Pubkey,

    /// External leaderboard collaborator authorized to post weekly points
    pub points_authority: Pubkey,

    /// External fee-ledger collaborator authorized to post weekly fee totals
    pub fee_authority: Pubkey,

    /// Collateral token mint (e.g., USDC, wrapped SOL)
    pub collateral_mint: Pubkey,

    /// Fraction of a week's fees that forms the prize pool
    /// (fixed-point, 1_000_000 = 100%)
    pub prize_pool_rate: u64,

    /// Payout fraction per rank, best finisher first
    /// (fixed-point, sums to at most 100%)
    pub payout_splits: [u64; 3],

    /// Total items configured (used as incrementing ID)
    pub item_count: u64,

    /// PDA bump seed
    pub bump: u8,

    /// Whether the protocol is paused
    pub paused: bool,
}

impl Config {
    pub const SEED: &'static [u8] = b"config";

    /// Number of ranked finishers that share the weekly prize pool
    pub const PRIZE_RANKS: usize = 3;
}
