//! Reward system: points, levels, and reward history
//!
//! Callers record an action by accruing points, logging a history entry and
//! persisting, in that order:
//!
//! ```ignore
//! let ledger = Ledger::new(SqliteStore::open(&config.database_path())?);
//! let state = ledger.load_state().into_state();
//!
//! if let Some(award) = add_points(state.as_ref(), RewardAction::CompleteCard).into_award() {
//!     let notification = RewardNotification::from_award(&award);
//!     if let Some(logged) = append_history(Some(&award.state), RewardAction::CompleteCard) {
//!         ledger.save_state(&logged);
//!     }
//! }
//! ```
//!
//! [`Ledger::record`] runs the same sequence in one call.

mod actions;
mod history;
mod ledger;
mod levels;
mod notification;
mod state;
mod summary;

pub use actions::{InvalidActionError, RewardAction, RewardActionDefinition};
pub use history::{format_timestamp_in, HistoryEntry, HISTORY_LIMIT};
pub use ledger::{Ledger, LoadOutcome, REWARDS_KEY};
pub use levels::{
    level_progress_percent, next_level_threshold, resolve_level, LevelDefinition, StoredLevel,
    LEVELS, LEVEL_PERKS,
};
pub use notification::{LevelReached, RewardNotification};
pub use state::{add_points, append_history, append_history_at, Accrual, Award, RewardsState, StoredRewards};
pub use summary::{level_roadmap, LevelStatus, RewardsSummary};
