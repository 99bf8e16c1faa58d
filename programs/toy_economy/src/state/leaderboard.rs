//! Weekly Leaderboard
//!
//! Accumulated points per player for one settlement period, posted by the
//! external points collaborator during the week. The settlement run only
//! ever reads this account.
//!
//! Each entry remembers the order in which its player first scored
//! (`seq`), which is the documented tie-break for ranking: equal points go
//! to whoever started accumulating earlier, never to incidental iteration
//! order.

use anchor_lang::prelude::*;

/// Points accumulated for one settlement period
///
/// Seeds: ["leaderboard", week_id.to_le_bytes()]
#[account]
#[derive(InitSpace)]
pub struct WeekLeaderboard {
    /// Settlement period these points belong to
    pub week_id: u32,

    /// Next first-score sequence number to hand out
    pub next_seq: u32,

    /// One entry per player who scored this week
    #[max_len(64)]
    pub entries: Vec<PointEntry>,

    /// PDA bump seed
    pub bump: u8,
}

/// A single player's accumulated points for the week
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, InitSpace, Debug)]
pub struct PointEntry {
    /// Player being scored
    pub player: Pubkey,

    /// Points accumulated so far this week
    pub points: u64,

    /// Order in which this player first scored (ranking tie-break)
    pub seq: u32,
}

impl WeekLeaderboard {
    pub const SEED: &'static [u8] = b"leaderboard";

    pub const MAX_ENTRIES: usize = 64;
}
