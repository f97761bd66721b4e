//! Levels and actions listing

use anyhow::Result;

use flashcard_rewards::store::KeyValueStore;
use flashcard_rewards::{level_roadmap, Ledger, RewardAction};

/// Show every level with its unlock status and perks
pub fn levels_command<S: KeyValueStore>(ledger: &Ledger<S>) -> Result<()> {
    let state = super::load_state(ledger)?;

    for (def, status) in level_roadmap(state.points) {
        let marker = if status.is_unlocked() { "*" } else { " " };
        println!(
            "{} 等级 {:>2}: {:<8} {:>5} 积分  {}",
            marker,
            def.level,
            def.title,
            def.required_points,
            status.label()
        );
        for perk in def.perks() {
            let check = if status.is_unlocked() { "✓" } else { "·" };
            println!("      {} 解锁{}", check, perk);
        }
    }

    Ok(())
}

/// Show the rewarded actions table
pub fn actions_command() {
    for action in RewardAction::all() {
        println!(
            "  {:<18} +{:<3} {}",
            action.key(),
            action.points(),
            action.description()
        );
    }
}
