//! Item State
//!
//! Each item is an independently priced collectible with its own mint curve
//! and its own leader record. The account stores the curve configuration
//! and the mint count; the current price is always recomputed from the
//! count, never stored.
//!
//! Every purchase takes a writable lock on this account, so admission,
//! price advance and leader update for one item are serialized by the
//! runtime while different items proceed in parallel.

use anchor_lang::prelude::*;

use crate::curve::mint_price;

/// Individual item account
///
/// Seeds: ["item", item_id.to_le_bytes()]
#[account]
#[derive(InitSpace)]
pub struct Item {
    /// Unique item identifier
    pub id: u64,

    /// Price of the first mint (fixed-point units)
    pub min_price: u64,

    /// Hard cap the price never exceeds
    pub max_price: u64,

    /// Per-mint price multiplier (fixed-point, >= 1.0)
    pub growth_rate: u64,

    /// Mint-count ceiling keeping the curve inside the u64 representation
    pub mint_ceiling: u32,

    /// Number of successful purchases recorded so far
    pub mint_count: u32,

    /// Off-chain metadata reference (URI or content hash)
    #[max_len(128)]
    pub metadata_ref: String,

    /// Highest-price purchase recorded so far, if any
    pub leader: Option<Leader>,

    /// Unix timestamp when the item was configured
    pub created_at: i64,

    /// PDA bump seed
    pub bump: u8,
}

/// The owner and paid price of the highest-price purchase for an item
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, InitSpace, Debug)]
pub struct Leader {
    /// Holder of the leading purchase
    pub owner: Pubkey,

    /// Price that purchase paid
    pub price: u64,
}

impl Item {
    pub const SEED: &'static [u8] = b"item";

    /// Live mint price, recomputed from the mint count
    pub fn current_price(&self) -> Result<u64> {
        mint_price(self.min_price, self.max_price, self.growth_rate, self.mint_count)
    }

    /// Whether a purchase at `paid_price` takes over the leader record
    ///
    /// Ties go to the later purchase, so the most recent payer at any given
    /// price level holds the record.
    pub fn qualifies_as_leader(&self, paid_price: u64) -> bool {
        match &self.leader {
            None => true,
            Some(leader) => paid_price >= leader.price,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_item() -> Item {
        Item {
            id: 0,
            min_price: 10_000,
            max_price: 100_000_000,
            growth_rate: 1_150_000,
            mint_ceiling: 100,
            mint_count: 0,
            metadata_ref: String::new(),
            leader: None,
            created_at: 0,
            bump: 255,
        }
    }

    #[test]
    fn test_price_follows_mint_count() {
        let mut item = test_item();
        assert_eq!(item.current_price().unwrap(), 10_000);
        item.mint_count += 1;
        assert_eq!(item.current_price().unwrap(), 11_500);
        item.mint_count += 1;
        assert_eq!(item.current_price().unwrap(), 13_225);
    }

    #[test]
    fn test_first_purchase_always_leads() {
        let item = test_item();
        assert!(item.qualifies_as_leader(0));
    }

    #[test]
    fn test_later_payment_takes_the_lead_on_ties() {
        let mut item = test_item();
        item.leader = Some(Leader {
            owner: Pubkey::new_from_array([1; 32]),
            price: 11_500,
        });
        // Equal price: the newer payer wins the record
        assert!(item.qualifies_as_leader(11_500));
        assert!(item.qualifies_as_leader(13_225));
        assert!(!item.qualifies_as_leader(10_000));
    }
}
