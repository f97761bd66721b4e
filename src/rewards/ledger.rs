//! Rewards ledger - persistence of the rewards state
//!
//! Loads and saves [`RewardsState`] under a fixed key of an injected
//! [`KeyValueStore`]. Store faults are logged and contained here; nothing
//! past this boundary sees a storage error.

use tracing::{debug, error, warn};

use super::actions::RewardAction;
use super::state::{add_points, append_history, Award, RewardsState, StoredRewards};
use crate::store::KeyValueStore;

/// Key the rewards state is stored under
pub const REWARDS_KEY: &str = "userRewards";

/// Result of [`Ledger::load_state`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// A stored state was read
    Loaded(RewardsState),
    /// Nothing was stored; a default state was created and persisted
    Initialized(RewardsState),
    /// The stored payload could not be parsed
    Corrupt,
    /// The store could not be read
    Unavailable,
}

impl LoadOutcome {
    /// The usable state, if any
    pub fn into_state(self) -> Option<RewardsState> {
        match self {
            Self::Loaded(state) | Self::Initialized(state) => Some(state),
            Self::Corrupt | Self::Unavailable => None,
        }
    }
}

/// Owns reads and writes of the rewards state
pub struct Ledger<S> {
    store: S,
}

impl<S: KeyValueStore> Ledger<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Read the stored state.
    ///
    /// If nothing (or an empty value) is stored yet, a default state
    /// (0 points, level 1, empty history) is persisted and returned.
    pub fn load_state(&self) -> LoadOutcome {
        let raw = match self.store.get(REWARDS_KEY) {
            Ok(raw) => raw,
            Err(e) => {
                warn!("Failed to read user rewards: {}", e);
                return LoadOutcome::Unavailable;
            }
        };

        let Some(raw) = raw.filter(|raw| !raw.is_empty()) else {
            let state = RewardsState::default();
            debug!("No stored rewards, initializing default state");
            self.save_state(&state);
            return LoadOutcome::Initialized(state);
        };

        match serde_json::from_slice::<StoredRewards>(&raw) {
            Ok(record) => LoadOutcome::Loaded(record.into()),
            Err(e) => {
                error!("Failed to parse user rewards: {}", e);
                LoadOutcome::Corrupt
            }
        }
    }

    /// Persist `state`. Best effort: failures are logged and dropped.
    pub fn save_state(&self, state: &RewardsState) {
        let payload = match serde_json::to_vec(&state.to_record()) {
            Ok(payload) => payload,
            Err(e) => {
                error!("Failed to serialize user rewards: {}", e);
                return;
            }
        };

        match self.store.set(REWARDS_KEY, &payload) {
            Ok(()) => debug!(points = state.points, "Saved user rewards"),
            Err(e) => warn!("Failed to save user rewards: {}", e),
        }
    }

    /// Load, award `action`, log it to history and save.
    ///
    /// Returns `None` without touching the store when there is no usable
    /// stored state (corrupt or unreadable).
    pub fn record(&self, action: RewardAction) -> Option<Award> {
        let state = self.load_state().into_state();

        let mut award = add_points(state.as_ref(), action).into_award()?;
        award.state = append_history(Some(&award.state), action)?;
        self.save_state(&award.state);

        debug!(
            action = action.key(),
            points = award.state.points,
            leveled_up = award.leveled_up,
            "Recorded reward"
        );
        Some(award)
    }
}
