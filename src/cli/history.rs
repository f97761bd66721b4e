//! History command implementation

use anyhow::Result;

use flashcard_rewards::store::KeyValueStore;
use flashcard_rewards::Ledger;

/// Show the newest `limit` reward history entries
pub fn history_command<S: KeyValueStore>(ledger: &Ledger<S>, limit: usize) -> Result<()> {
    let state = super::load_state(ledger)?;

    if state.reward_history.is_empty() {
        println!("暂无奖励记录");
        println!("完成学习任务获取奖励");
        return Ok(());
    }

    println!("奖励记录 ({}/{}):\n", state.recent(limit).len(), state.reward_history.len());

    for entry in state.recent(limit) {
        println!("  {}  {}  +{}", entry.display_time(), entry.action, entry.points);
    }

    Ok(())
}
