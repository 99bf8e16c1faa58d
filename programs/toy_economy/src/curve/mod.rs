//! # Mint Curve Module
//!
//! This module implements the **exponential mint curve** used to price
//! collectible items, together with the fixed-point arithmetic it runs on.
//!
//! ## The Pricing Rule
//!
//! ```text
//!            price(n) = min(max_price, min_price * growth^n)
//!
//!   ┌────────────────────────────────────────┐
//!   │               Price Curve              │
//!   │                                         │
//!   │ price ▲              ___________ cap   │
//!   │       │            ╱                    │
//!   │       │          ╱                      │
//!   │       │       ╱                         │
//!   │       │  __╱                            │
//!   │       └──────────────────▶ mint count  │
//!   │                                         │
//!   │  Each successful purchase advances n   │
//!   │  by one, so the price never decreases  │
//!   └────────────────────────────────────────┘
//! ```
//!
//! All values are integers with six implied decimal places. No
//! floating-point representation is introduced at any step, so the same
//! mint count always yields the same price on every validator.

pub mod fixed_point;
pub mod mint_price;

pub use fixed_point::*;
pub use mint_price::*;
