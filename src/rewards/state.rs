//! User rewards state and the pure accrual/logging operations

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::actions::RewardAction;
use super::history::{push_capped, HistoryEntry};
use super::levels::{resolve_level, LevelDefinition, StoredLevel};

/// Points and reward history for the local user
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RewardsState {
    pub points: u32,
    /// Newest first, at most [`super::HISTORY_LIMIT`] entries
    pub reward_history: Vec<HistoryEntry>,
}

impl RewardsState {
    /// Current level, derived from `points`
    pub fn level(&self) -> &'static LevelDefinition {
        resolve_level(self.points)
    }

    /// Newest `limit` history entries
    pub fn recent(&self, limit: usize) -> &[HistoryEntry] {
        &self.reward_history[..limit.min(self.reward_history.len())]
    }

    /// Persisted form; the level is always recomputed from `points`
    pub fn to_record(&self) -> StoredRewards {
        StoredRewards {
            points: self.points,
            level: Some(StoredLevel::from(self.level())),
            reward_history: self.reward_history.clone(),
        }
    }
}

/// Shape of the value stored under the rewards key
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredRewards {
    #[serde(default)]
    pub points: u32,
    /// Redundant copy of the level for readers; ignored on load
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<StoredLevel>,
    #[serde(default)]
    pub reward_history: Vec<HistoryEntry>,
}

impl From<StoredRewards> for RewardsState {
    fn from(record: StoredRewards) -> Self {
        Self {
            points: record.points,
            reward_history: record.reward_history,
        }
    }
}

/// A point award that was applied to a working copy of the state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Award {
    /// Working copy with the new point total
    pub state: RewardsState,
    pub leveled_up: bool,
    pub new_level: &'static LevelDefinition,
    pub points_added: u32,
    /// Description of the rewarded action
    pub action: &'static str,
}

/// Result of [`add_points`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Accrual {
    Accrued(Award),
    /// No state to update
    NoOp,
}

impl Accrual {
    pub fn into_award(self) -> Option<Award> {
        match self {
            Self::Accrued(award) => Some(award),
            Self::NoOp => None,
        }
    }
}

/// Add the points for `action` to a copy of `state`.
///
/// An absent state yields [`Accrual::NoOp`], which is distinct from an award
/// of zero points.
pub fn add_points(state: Option<&RewardsState>, action: RewardAction) -> Accrual {
    let Some(state) = state else {
        return Accrual::NoOp;
    };

    let def = action.definition();
    let new_points = state.points.saturating_add(def.points);

    let old_level = resolve_level(state.points);
    let new_level = resolve_level(new_points);

    Accrual::Accrued(Award {
        state: RewardsState {
            points: new_points,
            reward_history: state.reward_history.clone(),
        },
        leveled_up: new_level.level > old_level.level,
        new_level,
        points_added: def.points,
        action: def.description,
    })
}

/// Prepend a history entry for `action` to a copy of `state`, keeping the
/// newest 50. Points are left untouched. An absent state yields `None`.
pub fn append_history(state: Option<&RewardsState>, action: RewardAction) -> Option<RewardsState> {
    append_history_at(state, action, Utc::now())
}

/// [`append_history`] with an explicit timestamp
pub fn append_history_at(
    state: Option<&RewardsState>,
    action: RewardAction,
    at: DateTime<Utc>,
) -> Option<RewardsState> {
    let state = state?;
    Some(RewardsState {
        points: state.points,
        reward_history: push_capped(&state.reward_history, HistoryEntry::at(action, at)),
    })
}
