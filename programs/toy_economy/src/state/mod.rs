//! State structures for the toy economy settlement core

pub mod config;
pub mod item;
pub mod leaderboard;
pub mod receipt;
pub mod settlement;
pub mod week_fees;

pub use config::*;
pub use item::*;
pub use leaderboard::*;
pub use receipt::*;
pub use settlement::*;
pub use week_fees::*;
