//! Prize Claims
//!
//! After a week settles, each ranked winner can withdraw their committed
//! prize from the prize vault. The prize rows themselves are immutable;
//! a claim only flips the `claimed` flag, so a prize can be paid out at
//! most once.

use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token_interface::{transfer_checked, Mint, TokenAccount, TokenInterface, TransferChecked},
};

use crate::state::{Config, WeekSettlement};

/// Event emitted when a prize is claimed
#[event]
pub struct PrizeClaimed {
    pub week_id: u32,
    pub rank: u8,
    pub winner: Pubkey,
    pub amount: u64,
}

/// Accounts for claiming a settled prize
#[derive(Accounts)]
#[instruction(week_id: u32)]
pub struct ClaimPrize<'info> {
    /// Winner claiming their prize
    #[account(mut)]
    pub winner: Signer<'info>,

    /// Protocol configuration
    #[account(
        seeds = [Config::SEED],
        bump = config.bump,
    )]
    pub config: Account<'info, Config>,

    /// Settlement the prize was committed in
    #[account(
        mut,
        seeds = [WeekSettlement::SEED, week_id.to_le_bytes().as_ref()],
        bump = settlement.bump,
    )]
    pub settlement: Account<'info, WeekSettlement>,

    /// Collateral mint
    #[account(
        constraint = collateral_mint.key() == config.collateral_mint,
    )]
    pub collateral_mint: InterfaceAccount<'info, Mint>,

    /// Prize vault holding the pool
    #[account(
        mut,
        associated_token::mint = collateral_mint,
        associated_token::authority = config,
    )]
    pub prize_vault: InterfaceAccount<'info, TokenAccount>,

    /// Winner's collateral account
    #[account(
        init_if_needed,
        payer = winner,
        associated_token::mint = collateral_mint,
        associated_token::authority = winner,
    )]
    pub winner_collateral: InterfaceAccount<'info, TokenAccount>,

    /// Token program
    pub token_program: Interface<'info, TokenInterface>,
    /// Associated token program
    pub associated_token_program: Program<'info, AssociatedToken>,
    /// System program
    pub system_program: Program<'info, System>,
}

impl<'info> ClaimPrize<'info> {
    /// Withdraw a committed prize
    pub fn claim_prize(&mut self, week_id: u32, rank: u8) -> Result<()> {
        require!(self.settlement.settled, ClaimError::NotSettled);

        let index = self
            .settlement
            .prizes
            .iter()
            .position(|p| p.rank == rank)
            .ok_or(ClaimError::PrizeNotFound)?;
        let prize = self.settlement.prizes[index];

        require!(prize.player == self.winner.key(), ClaimError::NotPrizeWinner);
        require!(!prize.claimed, ClaimError::AlreadyClaimed);

        // Pay out from the prize vault
        let config_seeds = &[Config::SEED, &[self.config.bump]];
        let signer_seeds = &[&config_seeds[..]];

        transfer_checked(
            CpiContext::new_with_signer(
                self.token_program.to_account_info(),
                TransferChecked {
                    from: self.prize_vault.to_account_info(),
                    mint: self.collateral_mint.to_account_info(),
                    to: self.winner_collateral.to_account_info(),
                    authority: self.config.to_account_info(),
                },
                signer_seeds,
            ),
            prize.amount,
            self.collateral_mint.decimals,
        )?;

        self.settlement.prizes[index].claimed = true;

        emit!(PrizeClaimed {
            week_id,
            rank,
            winner: self.winner.key(),
            amount: prize.amount,
        });

        msg!(
            "Week {} rank {} prize of {} claimed",
            week_id,
            rank,
            prize.amount
        );

        Ok(())
    }
}

#[error_code]
pub enum ClaimError {
    #[msg("Week is not settled yet")]
    NotSettled,
    #[msg("No prize exists at this rank")]
    PrizeNotFound,
    #[msg("Prize belongs to a different player")]
    NotPrizeWinner,
    #[msg("Prize was already claimed")]
    AlreadyClaimed,
}
