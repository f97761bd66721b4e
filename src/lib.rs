//! Flashcard Rewards
//!
//! Points, levels and reward history for a flashcard study app. Study
//! screens report rewarded actions (finishing a card, completing a deck,
//! logging in) and render levels, progress and notifications from the
//! results.
//!
//! ## Layout
//!
//! - [`rewards`]: level table, action table, accrual, history and the
//!   [`rewards::Ledger`] that persists state.
//! - [`store`]: the key-value store the ledger writes to.
//! - [`config`]: `~/.flashcard/config.toml`.

pub mod config;
pub mod rewards;
pub mod store;

pub use rewards::*;
