//! Weekly Settlement
//!
//! Once per period an external scheduler triggers this instruction for the
//! just-completed week. The run ranks the week's leaderboard, sizes the
//! prize pool from the week's fee total, splits it among the top finishers
//! and commits the whole result in one account write.
//!
//! ## Settlement Flow
//!
//! 1. Scheduler trigger fires after the week closes
//! 2. The period hint is checked against the calendar
//! 3. An already-settled week returns its existing result (no-op)
//! 4. Fee total and leaderboard are read for that week
//! 5. Pool, prizes and retained remainder are computed and committed
//!
//! ## Delivery Semantics
//!
//! The trigger is at-least-once: a missed run is retried, a duplicate run
//! is absorbed by the settled flag, and two racing triggers serialize on
//! the settlement account. A run that aborts (fee source unavailable)
//! rolls back entirely and leaves nothing for the retry to trip over.

use anchor_lang::prelude::*;

use crate::calendar;
use crate::curve::fixed_point;
use crate::state::{Config, PointEntry, Prize, WeekFees, WeekLeaderboard, WeekSettlement};

/// Event emitted when a week settles
#[event]
pub struct WeekSettled {
    pub week_id: u32,
    pub pool: u64,
    pub remainder: u64,
    pub winner_count: u8,
}

/// Accounts for settling a completed week
#[derive(Accounts)]
#[instruction(week_id: u32)]
pub struct SettleWeek<'info> {
    /// Settlement trigger (the platform scheduler's key)
    #[account(
        mut,
        constraint = authority.key() == config.admin @ SettleError::Unauthorized,
    )]
    pub authority: Signer<'info>,

    /// Protocol configuration
    #[account(
        seeds = [Config::SEED],
        bump = config.bump,
    )]
    pub config: Account<'info, Config>,

    /// Settlement record for the period; racing triggers serialize here
    #[account(
        init_if_needed,
        payer = authority,
        space = 8 + WeekSettlement::INIT_SPACE,
        seeds = [WeekSettlement::SEED, week_id.to_le_bytes().as_ref()],
        bump,
    )]
    pub settlement: Account<'info, WeekSettlement>,

    /// Fee total for the period; absent when the fee source has not posted
    pub week_fees: Option<Account<'info, WeekFees>>,

    /// Leaderboard for the period; absent when nobody scored
    pub leaderboard: Option<Account<'info, WeekLeaderboard>>,

    /// System program
    pub system_program: Program<'info, System>,
}

impl<'info> SettleWeek<'info> {
    /// Settle the just-completed week
    pub fn settle_week(&mut self, week_id: u32, bumps: SettleWeekBumps) -> Result<()> {
        let clock = Clock::get()?;

        // Settlement always targets the period that just closed, never the
        // one still in progress
        require!(
            week_id == calendar::completed_week_id(clock.unix_timestamp),
            SettleError::WrongPeriod
        );

        // Idempotent: the committed result stands, a retry is a success
        if self.settlement.settled {
            msg!("Week {} already settled", week_id);
            return Ok(());
        }

        // Fee source must have posted this week's total
        let fees = self
            .week_fees
            .as_ref()
            .filter(|f| f.week_id == week_id)
            .ok_or(SettleError::FeeSourceUnavailable)?;

        let pool = fixed_point::mul(fees.total, self.config.prize_pool_rate)?;

        let entries: &[PointEntry] = match self.leaderboard.as_ref() {
            Some(board) if board.week_id == week_id => &board.entries,
            _ => &[],
        };
        let winners = rank_entries(entries, Config::PRIZE_RANKS);

        if winners.is_empty() {
            // A quiet week is a valid outcome: zero prizes, whole pool retained
            msg!("Week {}: no participants, retaining pool of {}", week_id, pool);
        }

        let (amounts, remainder) =
            split_pool(pool, &self.config.payout_splits[..winners.len()])?;

        let prizes: Vec<Prize> = winners
            .iter()
            .zip(amounts.iter())
            .enumerate()
            .map(|(i, (entry, amount))| Prize {
                rank: (i + 1) as u8,
                player: entry.player,
                amount: *amount,
                claimed: false,
            })
            .collect();

        let winner_count = prizes.len() as u8;
        self.settlement.set_inner(WeekSettlement {
            week_id,
            settled: true,
            pool,
            remainder,
            prizes,
            settled_at: clock.unix_timestamp,
            bump: bumps.settlement,
        });

        emit!(WeekSettled {
            week_id,
            pool,
            remainder,
            winner_count,
        });

        msg!(
            "Week {} settled: pool {}, {} winners, remainder {}",
            week_id,
            pool,
            winner_count,
            remainder
        );

        Ok(())
    }
}

/// Rank leaderboard entries and keep the top `k`
///
/// Descending by points; equal points go to the earlier first score
/// (lower `seq`). The rule is fixed, never incidental iteration order.
fn rank_entries(entries: &[PointEntry], k: usize) -> Vec<PointEntry> {
    let mut ranked = entries.to_vec();
    ranked.sort_by(|a, b| b.points.cmp(&a.points).then(a.seq.cmp(&b.seq)));
    ranked.truncate(k);
    ranked
}

/// Split the pool by the configured fractions, flooring each prize
///
/// Returns the per-rank amounts and the retained remainder. Because the
/// fractions sum to at most 1.0 and every product floors, the amounts can
/// never exceed the pool.
fn split_pool(pool: u64, splits: &[u64]) -> Result<(Vec<u64>, u64)> {
    let mut amounts = Vec::with_capacity(splits.len());
    let mut paid = 0u64;
    for share in splits {
        let amount = fixed_point::mul(pool, *share)?;
        paid = paid
            .checked_add(amount)
            .ok_or(fixed_point::MathError::ArithmeticOverflow)?;
        amounts.push(amount);
    }
    let remainder = pool
        .checked_sub(paid)
        .ok_or(fixed_point::MathError::ArithmeticOverflow)?;
    Ok((amounts, remainder))
}

#[error_code]
pub enum SettleError {
    #[msg("Only the settlement authority can trigger a run")]
    Unauthorized,
    #[msg("Period hint does not name the just-completed week")]
    WrongPeriod,
    #[msg("Fee total for the period has not been posted")]
    FeeSourceUnavailable,
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(player_byte: u8, points: u64, seq: u32) -> PointEntry {
        PointEntry {
            player: Pubkey::new_from_array([player_byte; 32]),
            points,
            seq,
        }
    }

    #[test]
    fn test_rank_orders_by_points_desc() {
        let board = [entry(1, 10, 0), entry(2, 30, 1), entry(3, 20, 2)];
        let ranked = rank_entries(&board, 3);
        assert_eq!(ranked[0].points, 30);
        assert_eq!(ranked[1].points, 20);
        assert_eq!(ranked[2].points, 10);
    }

    #[test]
    fn test_rank_tie_goes_to_earlier_scorer() {
        let board = [entry(1, 25, 4), entry(2, 25, 1), entry(3, 25, 2)];
        let ranked = rank_entries(&board, 3);
        assert_eq!(ranked[0].seq, 1);
        assert_eq!(ranked[1].seq, 2);
        assert_eq!(ranked[2].seq, 4);
    }

    #[test]
    fn test_rank_truncates_to_top_k() {
        let board = [entry(1, 4, 0), entry(2, 3, 1), entry(3, 2, 2), entry(4, 1, 3)];
        let ranked = rank_entries(&board, 3);
        assert_eq!(ranked.len(), 3);
        assert_eq!(ranked.last().unwrap().points, 2);
    }

    #[test]
    fn test_rank_handles_small_fields() {
        assert!(rank_entries(&[], 3).is_empty());
        assert_eq!(rank_entries(&[entry(1, 5, 0)], 3).len(), 1);
    }

    #[test]
    fn test_split_exact() {
        // Pool 500, split 50/30/20 divides exactly
        let (amounts, remainder) =
            split_pool(500, &[500_000, 300_000, 200_000]).unwrap();
        assert_eq!(amounts, vec![250, 150, 100]);
        assert_eq!(remainder, 0);
    }

    #[test]
    fn test_split_retains_flooring_remainder() {
        // Pool 501: 250.5 / 150.3 / 100.2 floor to 250 / 150 / 100
        let (amounts, remainder) =
            split_pool(501, &[500_000, 300_000, 200_000]).unwrap();
        assert_eq!(amounts, vec![250, 150, 100]);
        assert_eq!(remainder, 1);
    }

    #[test]
    fn test_split_with_fewer_winners() {
        // Only one finisher: their share is paid, the rest is retained
        let (amounts, remainder) = split_pool(500, &[500_000]).unwrap();
        assert_eq!(amounts, vec![250]);
        assert_eq!(remainder, 250);
    }

    #[test]
    fn test_split_never_exceeds_pool() {
        for pool in [0u64, 1, 7, 99, 1_000, 123_457] {
            let (amounts, remainder) =
                split_pool(pool, &[500_000, 300_000, 200_000]).unwrap();
            let paid: u64 = amounts.iter().sum();
            assert_eq!(paid + remainder, pool);
        }
    }
}
