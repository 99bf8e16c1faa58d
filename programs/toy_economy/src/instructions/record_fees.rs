//! Fee Ledger Posting
//!
//! The external fee-ledger collaborator posts the fees the platform
//! collected, keyed by settlement period. The settlement run reads the
//! completed week's total to size the prize pool and never writes here.

use anchor_lang::prelude::*;

use crate::curve::MathError;
use crate::state::{Config, WeekFees};

/// Event emitted when fees are posted
#[event]
pub struct WeekFeesRecorded {
    pub week_id: u32,
    pub amount: u64,
    pub total: u64,
}

/// Accounts for posting collected fees
#[derive(Accounts)]
#[instruction(week_id: u32)]
pub struct RecordFees<'info> {
    /// External fee-ledger collaborator
    #[account(
        mut,
        constraint = fee_authority.key() == config.fee_authority
            @ RecordFeesError::Unauthorized,
    )]
    pub fee_authority: Signer<'info>,

    /// Protocol configuration
    #[account(
        seeds = [Config::SEED],
        bump = config.bump,
    )]
    pub config: Account<'info, Config>,

    /// Fee total for the period
    #[account(
        init_if_needed,
        payer = fee_authority,
        space = 8 + WeekFees::INIT_SPACE,
        seeds = [WeekFees::SEED, week_id.to_le_bytes().as_ref()],
        bump,
    )]
    pub week_fees: Account<'info, WeekFees>,

    /// System program
    pub system_program: Program<'info, System>,
}

impl<'info> RecordFees<'info> {
    /// Add collected fees to a period's running total
    pub fn record_fees(
        &mut self,
        week_id: u32,
        amount: u64,
        bumps: RecordFeesBumps,
    ) -> Result<()> {
        let clock = Clock::get()?;
        let fees = &mut self.week_fees;

        if fees.week_id == 0 {
            fees.week_id = week_id;
            fees.bump = bumps.week_fees;
        }

        fees.total = fees
            .total
            .checked_add(amount)
            .ok_or(MathError::ArithmeticOverflow)?;
        fees.last_recorded_at = clock.unix_timestamp;

        emit!(WeekFeesRecorded {
            week_id,
            amount,
            total: fees.total,
        });

        msg!("Fees for week {}: +{} = {}", week_id, amount, fees.total);

        Ok(())
    }
}

#[error_code]
pub enum RecordFeesError {
    #[msg("Only the fee authority can post fees")]
    Unauthorized,
}
