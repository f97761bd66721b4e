//! Read-side views of the rewards state for rendering

use super::levels::{
    level_progress_percent, next_level_threshold, resolve_level, LevelDefinition, LEVELS,
};

/// Level and progress for a point total
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewardsSummary {
    pub points: u32,
    pub level: u32,
    pub title: &'static str,
    /// Points needed for the current level
    pub current_level_points: u32,
    /// Points needed for the next level (equals `current_level_points` at max)
    pub next_level_points: u32,
    /// 0 - 100
    pub progress_percent: u32,
}

impl RewardsSummary {
    pub fn from_points(points: u32) -> Self {
        let current = resolve_level(points);
        Self {
            points,
            level: current.level,
            title: current.title,
            current_level_points: current.required_points,
            next_level_points: next_level_threshold(points),
            progress_percent: level_progress_percent(points),
        }
    }

    pub fn is_max_level(&self) -> bool {
        self.level >= LevelDefinition::max_level()
    }

    /// Points still missing for the next level, 0 at max level
    pub fn points_to_next_level(&self) -> u32 {
        self.next_level_points.saturating_sub(self.points)
    }

    /// Hint shown under the progress bar, `None` at max level
    pub fn next_level_hint(&self) -> Option<String> {
        if self.is_max_level() {
            return None;
        }
        Some(format!(
            "还需 {} 积分升至 {} 级",
            self.points_to_next_level(),
            self.level + 1
        ))
    }
}

/// Where a level sits relative to the user's current level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LevelStatus {
    Reached,
    Current,
    Next,
    Locked,
}

impl LevelStatus {
    pub fn is_unlocked(&self) -> bool {
        matches!(self, Self::Reached | Self::Current)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Reached => "已达成",
            Self::Current => "当前",
            Self::Next => "下一级",
            Self::Locked => "未解锁",
        }
    }
}

/// Every level with its status for `points`, lowest first
pub fn level_roadmap(points: u32) -> Vec<(&'static LevelDefinition, LevelStatus)> {
    let current = resolve_level(points).level;
    LEVELS
        .iter()
        .map(|def| {
            let status = if def.level == current {
                LevelStatus::Current
            } else if def.level < current {
                LevelStatus::Reached
            } else if def.level == current + 1 {
                LevelStatus::Next
            } else {
                LevelStatus::Locked
            };
            (def, status)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_mid_level() {
        let summary = RewardsSummary::from_points(150);
        assert_eq!(summary.level, 2);
        assert_eq!(summary.title, "勤奋学习者");
        assert_eq!(summary.current_level_points, 100);
        assert_eq!(summary.next_level_points, 300);
        assert_eq!(summary.progress_percent, 25);
        assert_eq!(summary.points_to_next_level(), 150);
        assert_eq!(summary.next_level_hint().as_deref(), Some("还需 150 积分升至 3 级"));
    }

    #[test]
    fn test_summary_max_level() {
        let summary = RewardsSummary::from_points(7000);
        assert!(summary.is_max_level());
        assert_eq!(summary.progress_percent, 100);
        assert_eq!(summary.points_to_next_level(), 0);
        assert!(summary.next_level_hint().is_none());
    }

    #[test]
    fn test_roadmap() {
        let roadmap = level_roadmap(320);
        assert_eq!(roadmap.len(), LEVELS.len());
        let statuses: Vec<LevelStatus> = roadmap.iter().map(|(_, s)| *s).collect();
        assert_eq!(statuses[0], LevelStatus::Reached);
        assert_eq!(statuses[1], LevelStatus::Reached);
        assert_eq!(statuses[2], LevelStatus::Current);
        assert_eq!(statuses[3], LevelStatus::Next);
        assert!(statuses[4..].iter().all(|s| *s == LevelStatus::Locked));
    }

    #[test]
    fn test_roadmap_at_max_has_no_next() {
        let roadmap = level_roadmap(5000);
        assert_eq!(roadmap.last().map(|(_, s)| *s), Some(LevelStatus::Current));
        assert!(roadmap.iter().all(|(_, s)| s.is_unlocked()));
    }
}
