//! Point Accumulation
//!
//! The external leaderboard collaborator posts points as players earn them
//! during the week. The settlement run treats the resulting board as
//! read-only input; this instruction is the only write path.
//!
//! Points can only land on the week in progress; the completed week's
//! board is frozen by the calendar, not by a flag.

use anchor_lang::prelude::*;

use crate::calendar;
use crate::curve::MathError;
use crate::state::{Config, PointEntry, WeekLeaderboard};

/// Event emitted when points are posted
#[event]
pub struct PointsAwarded {
    pub week_id: u32,
    pub player: Pubkey,
    pub points: u64,
    pub total: u64,
}

/// Accounts for posting leaderboard points
#[derive(Accounts)]
#[instruction(week_id: u32)]
pub struct AwardPoints<'info> {
    /// External points collaborator
    #[account(
        mut,
        constraint = points_authority.key() == config.points_authority
            @ AwardPointsError::Unauthorized,
    )]
    pub points_authority: Signer<'info>,

    /// Protocol configuration
    #[account(
        seeds = [Config::SEED],
        bump = config.bump,
    )]
    pub config: Account<'info, Config>,

    /// Leaderboard for the week in progress
    #[account(
        init_if_needed,
        payer = points_authority,
        space = 8 + WeekLeaderboard::INIT_SPACE,
        seeds = [WeekLeaderboard::SEED, week_id.to_le_bytes().as_ref()],
        bump,
    )]
    pub leaderboard: Account<'info, WeekLeaderboard>,

    /// System program
    pub system_program: Program<'info, System>,
}

impl<'info> AwardPoints<'info> {
    /// Credit points to a player for the current week
    pub fn award_points(
        &mut self,
        week_id: u32,
        player: Pubkey,
        points: u64,
        bumps: AwardPointsBumps,
    ) -> Result<()> {
        let clock = Clock::get()?;
        require!(
            week_id == calendar::week_id_at(clock.unix_timestamp),
            AwardPointsError::WrongPeriod
        );

        let board = &mut self.leaderboard;
        if board.week_id == 0 {
            board.week_id = week_id;
            board.bump = bumps.leaderboard;
        }

        let total = match board.entries.iter_mut().find(|e| e.player == player) {
            Some(entry) => {
                entry.points = entry
                    .points
                    .checked_add(points)
                    .ok_or(MathError::ArithmeticOverflow)?;
                entry.points
            }
            None => {
                require!(
                    board.entries.len() < WeekLeaderboard::MAX_ENTRIES,
                    AwardPointsError::LeaderboardFull
                );
                let seq = board.next_seq;
                board.next_seq += 1;
                board.entries.push(PointEntry { player, points, seq });
                points
            }
        };

        emit!(PointsAwarded {
            week_id,
            player,
            points,
            total,
        });

        Ok(())
    }
}

#[error_code]
pub enum AwardPointsError {
    #[msg("Only the points authority can post points")]
    Unauthorized,
    #[msg("Points can only be posted for the week in progress")]
    WrongPeriod,
    #[msg("Leaderboard is full for this week")]
    LeaderboardFull,
}
