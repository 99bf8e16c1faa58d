//! # Toy Economy: Mint Curves and Weekly Settlement
//!
//! The settlement core of a multi-app payment platform's toy economy.
//!
//! ## Overview
//!
//! Collectible items are minted on an exponential price curve: every
//! purchase raises the price for the next one, and the highest-paying
//! buyer holds the item's leader record. Once a week, the platform's
//! collected fees fund a prize pool that is split among the top scorers
//! of the weekly leaderboard.
//!
//! ## How it works
//! - Purchases pass an admission gate (deadline, one-time nonce, live
//!   price quote) and settle atomically against the item's account.
//! - Settlement runs once per completed ISO week; duplicate triggers are
//!   idempotent no-ops and rounding leftovers stay in the pool, audited.
//!

use anchor_lang::prelude::*;

pub mod calendar;
pub mod curve;
pub mod instructions;
pub mod state;

pub use curve::*;
pub use instructions::*;

// Replace with your deployed program ID
declare_id!("Fg6PaFpoGXkYsidMpWTK6W2BeZ7FEfcYkg476zPFsLnS");

/// Main toy economy program
#[program]
pub mod toy_economy {
    use super::*;

    /// Initialize the protocol with global configuration
    pub fn initialize(
        ctx: Context<Initialize>,
        prize_pool_rate: u64,
        payout_splits: [u64; 3],
        points_authority: Pubkey,
        fee_authority: Pubkey,
    ) -> Result<()> {
        ctx.accounts.initialize(
            prize_pool_rate,
            payout_splits,
            points_authority,
            fee_authority,
            ctx.bumps,
        )
    }

    /// Configure a new item with its price curve (admin only)
    pub fn configure_item(
        ctx: Context<ConfigureItem>,
        min_price: u64,
        max_price: u64,
        growth_rate: u64,
        mint_ceiling: u32,
        metadata_ref: String,
    ) -> Result<()> {
        ctx.accounts.configure_item(
            min_price,
            max_price,
            growth_rate,
            mint_ceiling,
            metadata_ref,
            ctx.bumps,
        )
    }

    /// Buy the next mint of an item at the quoted price
    ///
    /// Returns the price of the mint after this one.
    pub fn purchase(
        ctx: Context<Purchase>,
        item_id: u64,
        quoted_price: u64,
        deadline: i64,
        nonce: u64,
    ) -> Result<u64> {
        ctx.accounts
            .purchase(item_id, quoted_price, deadline, nonce, ctx.bumps)
    }

    /// Post leaderboard points for the current week (points authority only)
    pub fn award_points(
        ctx: Context<AwardPoints>,
        week_id: u32,
        player: Pubkey,
        points: u64,
    ) -> Result<()> {
        ctx.accounts.award_points(week_id, player, points, ctx.bumps)
    }

    /// Post collected fees for a week (fee authority only)
    pub fn record_fees(ctx: Context<RecordFees>, week_id: u32, amount: u64) -> Result<()> {
        ctx.accounts.record_fees(week_id, amount, ctx.bumps)
    }

    /// Settle the just-completed week (scheduler trigger)
    pub fn settle_week(ctx: Context<SettleWeek>, week_id: u32) -> Result<()> {
        ctx.accounts.settle_week(week_id, ctx.bumps)
    }

    /// Withdraw a committed prize (winners only)
    pub fn claim_prize(ctx: Context<ClaimPrize>, week_id: u32, rank: u8) -> Result<()> {
        ctx.accounts.claim_prize(week_id, rank)
    }
}
