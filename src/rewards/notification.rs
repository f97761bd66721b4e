//! Notification content for a point award
//!
//! Built from the transient fields of an [`Award`], before persistence.

use std::fmt;

use super::state::Award;

/// What to show the user after an award
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewardNotification {
    pub points: u32,
    /// Action description
    pub message: String,
    /// Set only when the award crossed a level boundary
    pub level_up: Option<LevelReached>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelReached {
    pub level: u32,
    pub title: String,
}

impl RewardNotification {
    pub fn from_award(award: &Award) -> Self {
        Self {
            points: award.points_added,
            message: award.action.to_string(),
            level_up: award.leveled_up.then(|| LevelReached {
                level: award.new_level.level,
                title: award.new_level.title.to_string(),
            }),
        }
    }

    pub fn headline(&self) -> &'static str {
        if self.level_up.is_some() {
            "升级啦！"
        } else {
            "获得奖励"
        }
    }

    pub fn points_badge(&self) -> String {
        format!("+{}", self.points)
    }

    pub fn level_line(&self) -> Option<String> {
        self.level_up
            .as_ref()
            .map(|l| format!("达到 {} 级: {}", l.level, l.title))
    }
}

impl fmt::Display for RewardNotification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.headline(), self.message, self.points_badge())?;
        if let Some(line) = self.level_line() {
            write!(f, "\n{}", line)?;
        }
        Ok(())
    }
}
