//! Award command implementation

use anyhow::{bail, Result};

use flashcard_rewards::store::KeyValueStore;
use flashcard_rewards::{Ledger, RewardAction, RewardNotification};

/// Record `action` and print the resulting notification
pub fn award_command<S: KeyValueStore>(ledger: &Ledger<S>, action: RewardAction) -> Result<()> {
    let Some(award) = ledger.record(action) else {
        bail!("No usable rewards state; {} was not recorded", action);
    };

    println!("{}", RewardNotification::from_award(&award));
    println!("当前积分: {}", award.state.points);
    Ok(())
}
