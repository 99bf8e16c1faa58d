//! Item Purchase
//!
//! Admission, price advance and leader update for one item, executed as a
//! single transaction against the item's account.
//!
//! ## Admission Sequence
//!
//! 1. The request's deadline has not passed
//! 2. The `(item, nonce)` pair has never been consumed
//! 3. The quoted price equals the live curve price
//!
//! The first failure aborts the whole transaction, so a rejected purchase
//! leaves no trace: the nonce stays unburned and no payment is taken.
//!
//! ## Why the quote check closes the race
//!
//! Two purchases quoting the same price can both be in flight, but both
//! take a writable lock on the item account, so the runtime serializes
//! them. The second one re-reads the curve after the first advanced it,
//! sees a higher live price than it quoted, and fails with `StalePrice`.
//! At most one purchase can ever succeed at a given price point; the
//! correct follow-up price is the caller's decision, so the program never
//! retries on its own.

use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token_interface::{transfer_checked, Mint, TokenAccount, TokenInterface, TransferChecked},
};

use crate::state::{Config, Item, Leader, PurchaseReceipt};

/// Event emitted when a purchase settles
#[event]
pub struct ItemPurchased {
    pub item_id: u64,
    pub payer: Pubkey,
    pub paid_price: u64,
    pub new_price: u64,
    pub mint_count: u32,
    pub is_new_leader: bool,
}

/// Accounts for purchasing an item mint
#[derive(Accounts)]
#[instruction(item_id: u64, quoted_price: u64, deadline: i64, nonce: u64)]
pub struct Purchase<'info> {
    /// Payer (authenticated by signature)
    #[account(mut)]
    pub payer: Signer<'info>,

    /// Protocol configuration
    #[account(
        seeds = [Config::SEED],
        bump = config.bump,
    )]
    pub config: Account<'info, Config>,

    /// Item being purchased; the writable lock on this account serializes
    /// same-item purchases while different items proceed in parallel
    #[account(
        mut,
        seeds = [Item::SEED, item_id.to_le_bytes().as_ref()],
        bump = item.bump,
    )]
    pub item: Account<'info, Item>,

    /// Replay guard for this `(item, nonce)` pair, created in the same
    /// transaction that advances the price
    #[account(
        init_if_needed,
        payer = payer,
        space = 8 + PurchaseReceipt::INIT_SPACE,
        seeds = [
            PurchaseReceipt::SEED,
            item_id.to_le_bytes().as_ref(),
            nonce.to_le_bytes().as_ref(),
        ],
        bump,
    )]
    pub receipt: Account<'info, PurchaseReceipt>,

    /// Collateral mint
    #[account(
        constraint = collateral_mint.key() == config.collateral_mint,
    )]
    pub collateral_mint: InterfaceAccount<'info, Mint>,

    /// Payer's collateral account
    #[account(
        mut,
        associated_token::mint = collateral_mint,
        associated_token::authority = payer,
    )]
    pub payer_collateral: InterfaceAccount<'info, TokenAccount>,

    /// Item's payment vault
    #[account(
        mut,
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

impl<'info> Purchase<'info> {
    /// Buy the next mint of an item at the quoted price
    pub fn purchase(
        &mut self,
        item_id: u64,
        quoted_price: u64,
        deadline: i64,
        nonce: u64,
        bumps: PurchaseBumps,
    ) -> Result<u64> {
        let clock = Clock::get()?;

        require!(!self.config.paused, PurchaseError::ProtocolPaused);

        // 1. Deadline
        require!(clock.unix_timestamp < deadline, PurchaseError::ExpiredDeadline);

        // 2. Replay: the receipt either did not exist (fresh, unconsumed)
        //    or carries the consumed flag from an earlier purchase
        require!(!self.receipt.consumed, PurchaseError::ReplayedNonce);

        // 3. Quote must match the live price computed under this lock
        let live_price = self.item.current_price()?;
        require!(quoted_price == live_price, PurchaseError::StalePrice);

        // Ceiling keeps the curve inside the u64 representation; a capped
        // item stays frozen until reconfigured
        require!(
            self.item.mint_count < self.item.mint_ceiling,
            PurchaseError::MintCeilingReached
        );

        // Take the payment
        transfer_checked(
            CpiContext::new(
                self.token_program.to_account_info(),
                TransferChecked {
                    from: self.payer_collateral.to_account_info(),
                    mint: self.collateral_mint.to_account_info(),
                    to: self.vault.to_account_info(),
                    authority: self.payer.to_account_info(),
                },
            ),
            quoted_price,
            self.collateral_mint.decimals,
        )?;

        // Advance the curve
        self.item.mint_count += 1;
        let new_price = self.item.current_price()?;

        // Leader update rides the same transaction as the advance: a
        // purchase that fails to advance can never touch the leader
        let is_new_leader = self.item.qualifies_as_leader(quoted_price);
        if is_new_leader {
            self.item.leader = Some(Leader {
                owner: self.payer.key(),
                price: quoted_price,
            });
        }

        // Burn the nonce
        self.receipt.set_inner(PurchaseReceipt {
            item_id,
            nonce,
            payer: self.payer.key(),
            paid_price: quoted_price,
            minted_at: clock.unix_timestamp,
            consumed: true,
            bump: bumps.receipt,
        });

        emit!(ItemPurchased {
            item_id,
            payer: self.payer.key(),
            paid_price: quoted_price,
            new_price,
            mint_count: self.item.mint_count,
            is_new_leader,
        });

        msg!(
            "Item {} minted at {}, next price {}",
            item_id,
            quoted_price,
            new_price
        );

        Ok(new_price)
    }
}

#[error_code]
pub enum PurchaseError {
    #[msg("Protocol is paused")]
    ProtocolPaused,
    #[msg("Request deadline has passed")]
    ExpiredDeadline,
    #[msg("Nonce was already consumed for this item")]
    ReplayedNonce,
    #[msg("Quoted price does not match the live price; re-fetch and resubmit")]
    StalePrice,
    #[msg("Item reached its mint ceiling")]
    MintCeilingReached,
}
