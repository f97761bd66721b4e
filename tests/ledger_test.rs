//! Integration tests for the rewards ledger against real stores

use chrono::{DateTime, Utc};
use tempfile::TempDir;

use flashcard_rewards::store::{KeyValueStore, MemoryStore, SqliteStore};
use flashcard_rewards::{
    add_points, append_history, append_history_at, resolve_level, LevelDefinition, Ledger,
    LoadOutcome, RewardAction, RewardNotification, RewardsState, RewardsSummary, HISTORY_LIMIT,
    REWARDS_KEY,
};

/// Opens a ledger on a fresh SQLite file
fn sqlite_ledger() -> (TempDir, Ledger<SqliteStore>) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let store = SqliteStore::open(&dir.path().join("rewards.db")).expect("Failed to open db");
    (dir, Ledger::new(store))
}

fn at(secs: i64) -> DateTime<Utc> {
    DateTime::from_timestamp(secs, 0).unwrap()
}

#[test]
fn test_first_load_default_persists() {
    let (dir, ledger) = sqlite_ledger();

    let state = match ledger.load_state() {
        LoadOutcome::Initialized(state) => state,
        other => panic!("expected Initialized, got {:?}", other),
    };
    assert_eq!(state.points, 0);
    assert!(state.reward_history.is_empty());
    assert_eq!(state.level(), LevelDefinition::first());

    // A second process sees the persisted default
    let reopened = Ledger::new(SqliteStore::open(&dir.path().join("rewards.db")).unwrap());
    assert_eq!(reopened.load_state(), LoadOutcome::Loaded(RewardsState::default()));
}

#[test]
fn test_manual_sequence_roundtrip() {
    let (_dir, ledger) = sqlite_ledger();
    let state = ledger.load_state().into_state().unwrap();

    let award = add_points(Some(&state), RewardAction::CreateDeck)
        .into_award()
        .unwrap();
    let logged = append_history(Some(&award.state), RewardAction::CreateDeck).unwrap();
    ledger.save_state(&logged);

    let loaded = ledger.load_state().into_state().unwrap();
    assert_eq!(loaded.points, logged.points);
    assert_eq!(loaded.reward_history, logged.reward_history);
    assert_eq!(loaded.level(), resolve_level(30));
}

#[test]
fn test_history_cap_through_store() {
    let (_dir, ledger) = sqlite_ledger();
    let mut state = ledger.load_state().into_state().unwrap();

    for i in 1..=55 {
        state = append_history_at(Some(&state), RewardAction::CompleteCard, at(i)).unwrap();
        ledger.save_state(&state);
    }

    let loaded = ledger.load_state().into_state().unwrap();
    assert_eq!(loaded.reward_history.len(), HISTORY_LIMIT);
    assert_eq!(loaded.reward_history.first().unwrap().timestamp, at(55));
    assert_eq!(loaded.reward_history.last().unwrap().timestamp, at(6));
    assert!(loaded
        .reward_history
        .windows(2)
        .all(|w| w[0].timestamp > w[1].timestamp));
}

#[test]
fn test_study_session_levels_up() {
    let (_dir, ledger) = sqlite_ledger();
    ledger.load_state();

    // 19 cards (95 points), then a login crosses 100
    for _ in 0..19 {
        let award = ledger.record(RewardAction::CompleteCard).unwrap();
        assert!(!award.leveled_up);
    }
    let award = ledger.record(RewardAction::DailyLogin).unwrap();
    assert_eq!(award.state.points, 105);
    assert!(award.leveled_up);
    assert_eq!(award.new_level.level, 2);

    let notification = RewardNotification::from_award(&award);
    assert_eq!(notification.headline(), "升级啦！");
    assert_eq!(notification.level_line().as_deref(), Some("达到 2 级: 勤奋学习者"));

    let summary = RewardsSummary::from_points(award.state.points);
    assert_eq!(summary.progress_percent, 2);
    assert_eq!(summary.points_to_next_level(), 195);
}

#[test]
fn test_corrupt_payload_is_not_overwritten() {
    let (_dir, ledger) = sqlite_ledger();
    ledger.store().set(REWARDS_KEY, b"[1, 2, 3]").unwrap();

    assert_eq!(ledger.load_state(), LoadOutcome::Corrupt);
    assert!(ledger.record(RewardAction::CompleteCard).is_none());
    assert_eq!(ledger.store().get(REWARDS_KEY).unwrap(), Some(b"[1, 2, 3]".to_vec()));
}

#[test]
fn test_reads_payload_written_by_web_client() {
    let store = MemoryStore::new();
    store.put_raw(
        REWARDS_KEY,
        r#"{
            "points": 1010,
            "level": {"level": 5, "requiredPoints": 1000, "title": "知识大师"},
            "rewardHistory": [
                {"action": "完成一个卡片集", "points": 20, "timestamp": "2024-05-01T09:30:00.000Z"}
            ]
        }"#,
    );
    let ledger = Ledger::new(store);

    let state = ledger.load_state().into_state().unwrap();
    assert_eq!(state.points, 1010);
    assert_eq!(state.level().title, "知识大师");
    assert_eq!(state.reward_history[0].points, 20);
}

#[test]
fn test_failed_save_keeps_previous_value() {
    let store = MemoryStore::with_quota(200);
    let ledger = Ledger::new(store.clone());
    let state = ledger.load_state().into_state().unwrap();

    // Grow history until a save no longer fits
    let mut current = state;
    for i in 0..10 {
        current = append_history_at(Some(&current), RewardAction::ShareResult, at(i)).unwrap();
        ledger.save_state(&current);
    }

    let stored = ledger.load_state().into_state().unwrap();
    assert!(stored.reward_history.len() < current.reward_history.len());
}
