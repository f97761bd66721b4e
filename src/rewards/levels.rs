//! Level system
//!
//! Defines level thresholds, titles, and the point-to-level derivations.

use serde::{Deserialize, Serialize};

/// Level definition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelDefinition {
    pub level: u32,
    pub required_points: u32,
    pub title: &'static str,
}

/// All level definitions (must be sorted by level, first threshold is 0)
pub static LEVELS: &[LevelDefinition] = &[
    LevelDefinition {
        level: 1,
        required_points: 0,
        title: "初学者",
    },
    LevelDefinition {
        level: 2,
        required_points: 100,
        title: "勤奋学习者",
    },
    LevelDefinition {
        level: 3,
        required_points: 300,
        title: "知识探索者",
    },
    LevelDefinition {
        level: 4,
        required_points: 600,
        title: "记忆达人",
    },
    LevelDefinition {
        level: 5,
        required_points: 1000,
        title: "知识大师",
    },
    LevelDefinition {
        level: 6,
        required_points: 1500,
        title: "记忆王者",
    },
    LevelDefinition {
        level: 7,
        required_points: 2200,
        title: "智慧导师",
    },
    LevelDefinition {
        level: 8,
        required_points: 3000,
        title: "学习传奇",
    },
    LevelDefinition {
        level: 9,
        required_points: 4000,
        title: "知识守护者",
    },
    LevelDefinition {
        level: 10,
        required_points: 5000,
        title: "记忆之神",
    },
];

/// Perks by the minimum level that unlocks them (cumulative)
pub static LEVEL_PERKS: &[(u32, &str)] = &[
    (2, "自定义卡片背景"),
    (3, "高级统计分析"),
    (4, "社区特殊徽章"),
    (5, "高级卡片模板"),
    (7, "AI学习助手"),
    (10, "终极记忆模式"),
];

impl LevelDefinition {
    /// Lowest level, the one every fresh state starts at
    pub fn first() -> &'static LevelDefinition {
        &LEVELS[0]
    }

    /// Highest level in the table
    pub fn max_level() -> u32 {
        LEVELS.last().map(|l| l.level).unwrap_or(1)
    }

    pub fn is_max(&self) -> bool {
        self.level == Self::max_level()
    }

    /// Perks available at this level, including those of lower levels
    pub fn perks(&self) -> impl Iterator<Item = &'static str> + use<> {
        let level = self.level;
        LEVEL_PERKS
            .iter()
            .filter(move |(min_level, _)| level >= *min_level)
            .map(|(_, perk)| *perk)
    }
}

/// Resolve the level for a point total.
///
/// Scans from the top of the table down and returns the first level whose
/// threshold is covered by `points`.
pub fn resolve_level(points: u32) -> &'static LevelDefinition {
    LEVELS
        .iter()
        .rev()
        .find(|l| points >= l.required_points)
        .unwrap_or(&LEVELS[0])
}

/// Points required for the level after the one `points` resolves to.
///
/// At the max level this returns the current level's own threshold.
pub fn next_level_threshold(points: u32) -> u32 {
    let current = resolve_level(points);
    LEVELS
        .iter()
        .position(|l| l.level == current.level)
        .and_then(|idx| LEVELS.get(idx + 1))
        .map(|next| next.required_points)
        .unwrap_or(current.required_points)
}

/// Integer progress (0-100) from the current level's threshold to the next one
pub fn level_progress_percent(points: u32) -> u32 {
    let current = resolve_level(points);
    let next = next_level_threshold(points);

    if next == current.required_points {
        return 100;
    }

    let progress = u64::from(points - current.required_points);
    let span = u64::from(next - current.required_points);
    ((progress * 100) / span).min(100) as u32
}

/// Level as written into the persisted record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredLevel {
    pub level: u32,
    pub title: String,
    pub required_points: u32,
}

impl From<&LevelDefinition> for StoredLevel {
    fn from(def: &LevelDefinition) -> Self {
        Self {
            level: def.level,
            title: def.title.to_string(),
            required_points: def.required_points,
        }
    }
}
