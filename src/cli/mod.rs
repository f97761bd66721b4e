//! CLI command implementations

pub mod award;
pub mod history;
pub mod init;
pub mod levels;
pub mod status;

use anyhow::{bail, Result};

use flashcard_rewards::store::KeyValueStore;
use flashcard_rewards::{Ledger, LoadOutcome, RewardsState};

/// Load the stored state, turning a corrupt or unreadable store into an error
pub(crate) fn load_state<S: KeyValueStore>(ledger: &Ledger<S>) -> Result<RewardsState> {
    match ledger.load_state() {
        LoadOutcome::Loaded(state) | LoadOutcome::Initialized(state) => Ok(state),
        LoadOutcome::Corrupt => bail!("Stored rewards data is corrupt"),
        LoadOutcome::Unavailable => bail!("Rewards storage is unavailable"),
    }
}
