//! Item Configuration
//!
//! The administrator configures a new item by declaring its price curve:
//! a floor price, a hard cap, and a per-mint growth multiplier. The item
//! starts with a mint count of zero, no leader, and an empty vault.
//!
//! Reconfiguration of a live item is a platform operation outside this
//! program's runtime path; from the core's perspective the curve is
//! immutable once set.

use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token_interface::{Mint, TokenAccount, TokenInterface},
};

use crate::curve::SCALE;
use crate::state::{Config, Item};

/// Event emitted when a new item is configured
#[event]
pub struct ItemConfigured {
    pub item_id: u64,
    pub min_price: u64,
    pub max_price: u64,
    pub growth_rate: u64,
    pub mint_ceiling: u32,
}

/// Accounts for configuring a new item
#[derive(Accounts)]
pub struct ConfigureItem<'info> {
    /// Protocol administrator
    #[account(
        mut,
        constraint = admin.key() == config.admin @ ConfigureItemError::Unauthorized,
    )]
    pub admin: Signer<'info>,

    /// Global protocol configuration
    #[account(
        mut,
        seeds = [Config::SEED],
        bump = config.bump,
    )]
    pub config: Account<'info, Config>,

    /// The new item account
    #[account(
        init,
        payer = admin,
        space = 8 + Item::INIT_SPACE,
        seeds = [Item::SEED, config.item_count.to_le_bytes().as_ref()],
        bump,
    )]
    pub item: Account<'info, Item>,

    /// Collateral token mint
    #[account(
        constraint = collateral_mint.key() == config.collateral_mint
    )]
    pub collateral_mint: InterfaceAccount<'info, Mint>,

    /// Item's payment vault
    #[account(
        init,
        payer = admin,
        associated_token::mint = collateral_mint,
        associated_token::authority = item,
    )]
    pub vault: InterfaceAccount<'info, TokenAccount>,

    /// Token program
    pub token_program: Interface<'info, TokenInterface>,
    /// Associated token program
    pub associated_token_program: Program<'info, AssociatedToken>,
    /// System program
    pub system_program: Program<'info, System>,
}

impl<'info> ConfigureItem<'info> {
    /// Configure a new item with its price curve
    pub fn configure_item(
        &mut self,
        min_price: u64,
        max_price: u64,
        growth_rate: u64,
        mint_ceiling: u32,
        metadata_ref: String,
        bumps: ConfigureItemBumps,
    ) -> Result<()> {
        require!(min_price <= max_price, ConfigureItemError::InvalidPriceBounds);
        require!(growth_rate >= SCALE, ConfigureItemError::InvalidGrowthRate);
        require!(mint_ceiling > 0, ConfigureItemError::InvalidMintCeiling);

        let clock = Clock::get()?;
        let item_id = self.config.item_count;

        self.item.set_inner(Item {
            id: item_id,
            min_price,
            max_price,
            growth_rate,
            mint_ceiling,
            mint_count: 0,
            metadata_ref,
            leader: None,
            created_at: clock.unix_timestamp,
            bump: bumps.item,
        });

        self.config.item_count = self.config.item_count.checked_add(1).unwrap();

        emit!(ItemConfigured {
            item_id,
            min_price,
            max_price,
            growth_rate,
            mint_ceiling,
        });

        msg!("Item {} configured, opening price {}", item_id, min_price);

        Ok(())
    }
}

#[error_code]
pub enum ConfigureItemError {
    #[msg("Only the admin can configure items")]
    Unauthorized,
    #[msg("Minimum price cannot exceed maximum price")]
    InvalidPriceBounds,
    #[msg("Growth rate must be at least 1.0")]
    InvalidGrowthRate,
    #[msg("Mint ceiling must be positive")]
    InvalidMintCeiling,
}
