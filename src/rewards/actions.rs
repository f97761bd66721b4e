//! Reward action definitions
//!
//! The closed set of actions that grant points, with their point values and
//! the descriptions shown in history entries and notifications.

use std::fmt;
use std::str::FromStr;

/// An action key that does not name any reward action
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown reward action: {0}")]
pub struct InvalidActionError(pub String);

/// Unique identifier for each reward action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RewardAction {
    CompleteCard,
    CompleteDeck,
    DailyLogin,
    StreakMilestone,
    CreateDeck,
    ShareResult,
    CommunityPost,
    PerfectScore,
}

/// Static point/description entry for an action
#[derive(Debug, Clone, Copy)]
pub struct RewardActionDefinition {
    pub points: u32,
    pub description: &'static str,
}

impl RewardAction {
    /// Stable key, as used by callers and on the command line
    pub fn key(&self) -> &'static str {
        match self {
            Self::CompleteCard => "COMPLETE_CARD",
            Self::CompleteDeck => "COMPLETE_DECK",
            Self::DailyLogin => "DAILY_LOGIN",
            Self::StreakMilestone => "STREAK_MILESTONE",
            Self::CreateDeck => "CREATE_DECK",
            Self::ShareResult => "SHARE_RESULT",
            Self::CommunityPost => "COMMUNITY_POST",
            Self::PerfectScore => "PERFECT_SCORE",
        }
    }

    pub fn definition(&self) -> RewardActionDefinition {
        let (points, description) = match self {
            Self::CompleteCard => (5, "完成一张卡片"),
            Self::CompleteDeck => (20, "完成一个卡片集"),
            Self::DailyLogin => (10, "每日登录"),
            Self::StreakMilestone => (50, "连续学习里程碑"),
            Self::CreateDeck => (30, "创建卡片集"),
            Self::ShareResult => (15, "分享学习成果"),
            Self::CommunityPost => (10, "发布社区内容"),
            Self::PerfectScore => (25, "完美掌握卡片集"),
        };
        RewardActionDefinition {
            points,
            description,
        }
    }

    pub fn points(&self) -> u32 {
        self.definition().points
    }

    pub fn description(&self) -> &'static str {
        self.definition().description
    }

    /// Get all reward actions
    pub fn all() -> &'static [RewardAction] {
        &[
            Self::CompleteCard,
            Self::CompleteDeck,
            Self::DailyLogin,
            Self::StreakMilestone,
            Self::CreateDeck,
            Self::ShareResult,
            Self::CommunityPost,
            Self::PerfectScore,
        ]
    }
}

impl fmt::Display for RewardAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for RewardAction {
    type Err = InvalidActionError;

    /// Accepts the key in any case, with `-` or `_` as separator
    /// (`COMPLETE_CARD`, `complete-card`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_uppercase().replace('-', "_");
        Self::all()
            .iter()
            .copied()
            .find(|a| a.key() == normalized)
            .ok_or_else(|| InvalidActionError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_table() {
        let points: Vec<u32> = RewardAction::all().iter().map(|a| a.points()).collect();
        assert_eq!(points, vec![5, 20, 10, 50, 30, 15, 10, 25]);
        assert!(RewardAction::all().iter().all(|a| a.points() > 0));
    }

    #[test]
    fn test_descriptions() {
        assert_eq!(RewardAction::CompleteCard.description(), "完成一张卡片");
        assert_eq!(RewardAction::PerfectScore.description(), "完美掌握卡片集");
        assert_eq!(RewardAction::CommunityPost.description(), "发布社区内容");
    }

    #[test]
    fn test_parse_keys() {
        for action in RewardAction::all() {
            assert_eq!(action.key().parse::<RewardAction>(), Ok(*action));
        }
        assert_eq!("daily-login".parse(), Ok(RewardAction::DailyLogin));
        assert_eq!(" share_result ".parse(), Ok(RewardAction::ShareResult));
    }

    #[test]
    fn test_parse_unknown_key() {
        let err = "FINISH_QUIZ".parse::<RewardAction>().unwrap_err();
        assert_eq!(err, InvalidActionError("FINISH_QUIZ".to_string()));
        assert_eq!(err.to_string(), "Unknown reward action: FINISH_QUIZ");
    }
}
