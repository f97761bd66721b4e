//! Status command implementation

use anyhow::Result;

use flashcard_rewards::store::KeyValueStore;
use flashcard_rewards::{Ledger, RewardsSummary};

const BAR_WIDTH: usize = 20;

/// Show level, points and progress to the next level
pub fn status_command<S: KeyValueStore>(ledger: &Ledger<S>) -> Result<()> {
    let state = super::load_state(ledger)?;
    let summary = RewardsSummary::from_points(state.points);

    println!("等级 {}  {}", summary.level, summary.title);
    println!("{} 积分\n", summary.points);
    println!(
        "等级进度 {} {}/{} ({}%)",
        progress_bar(summary.progress_percent, BAR_WIDTH),
        summary.points,
        summary.next_level_points,
        summary.progress_percent
    );

    if let Some(hint) = summary.next_level_hint() {
        println!("{}", hint);
    }

    Ok(())
}

/// Render a percentage as a fixed-width text bar
fn progress_bar(percent: u32, width: usize) -> String {
    let filled = (percent.min(100) as usize * width) / 100;
    format!("[{}{}]", "#".repeat(filled), "-".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_bar() {
        assert_eq!(progress_bar(0, 10), "[----------]");
        assert_eq!(progress_bar(55, 10), "[#####-----]");
        assert_eq!(progress_bar(100, 10), "[##########]");
        assert_eq!(progress_bar(250, 4), "[####]");
    }
}
