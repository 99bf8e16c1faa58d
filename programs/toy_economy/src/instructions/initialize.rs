//! Protocol Initialization
//!
//! Sets up the global configuration and the prize vault for the toy
//! economy. This is typically called once during deployment.

use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token_interface::{Mint, TokenAccount, TokenInterface},
};

use crate::curve::SCALE;
use crate::state::Config;

/// Accounts required for protocol initialization
#[derive(Accounts)]
pub struct Initialize<'info> {
    /// Protocol administrator (becomes the admin)
    #[account(mut)]
    pub admin: Signer<'info>,

    /// Global configuration account (created)
    #[account(
        init,
        payer = admin,
        space = 8 + Config::INIT_SPACE,
        seeds = [Config::SEED],
        bump,
    )]
    pub config: Account<'info, Config>,

    /// Collateral token mint (e.g., USDC)
    pub collateral_mint: InterfaceAccount<'info, Mint>,

    /// Prize vault the weekly payouts are claimed from
    #[account(
        init,
        payer = admin,
        associated_token::mint = collateral_mint,
        associated_token::authority = config,
    )]
    pub prize_vault: InterfaceAccount<'info, TokenAccount>,

    /// Token program
    pub token_program: Interface<'info, TokenInterface>,
    /// Associated token program
    pub associated_token_program: Program<'info, AssociatedToken>,
    /// System program
    pub system_program: Program<'info, System>,
}

impl<'info> Initialize<'info> {
    /// Initialize the protocol configuration
    pub fn initialize(
        &mut self,
        prize_pool_rate: u64,
        payout_splits: [u64; 3],
        points_authority: Pubkey,
        fee_authority: Pubkey,
        bumps: InitializeBumps,
    ) -> Result<()> {
        // The pool is a fraction of collected fees, never more than all of them
        require!(prize_pool_rate <= SCALE, InitializeError::InvalidPrizeRate);

        // Splits may leave a remainder but can never overcommit the pool
        let total: u64 = payout_splits.iter().try_fold(0u64, |acc, s| {
            acc.checked_add(*s).ok_or(InitializeError::InvalidPayoutSplits)
        })?;
        require!(total <= SCALE, InitializeError::InvalidPayoutSplits);

        self.config.set_inner(Config {
            admin: self.admin.key(),
            points_authority,
            fee_authority,
            collateral_mint: self.collateral_mint.key(),
            prize_pool_rate,
            payout_splits,
            item_count: 0,
            bump: bumps.config,
            paused: false,
        });

        msg!("Protocol initialized!");
        msg!("Admin: {}", self.admin.key());
        msg!("Prize pool rate: {} / {}", prize_pool_rate, SCALE);
        msg!(
            "Payout splits: {} / {} / {}",
            payout_splits[0],
            payout_splits[1],
            payout_splits[2]
        );

        Ok(())
    }
}

#[error_code]
pub enum InitializeError {
    #[msg("Prize pool rate cannot exceed 100%")]
    InvalidPrizeRate,
    #[msg("Payout splits cannot sum to more than 100%")]
    InvalidPayoutSplits,
}
