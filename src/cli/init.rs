//! Init command implementation

use anyhow::{bail, Context, Result};
use std::path::Path;

/// Default configuration content for `flashcard-rewards init`
pub const DEFAULT_CONFIG: &str = r#"# Flashcard Rewards Configuration
# ===============================

# Where the rewards state (points, level, history) is stored.
#
#   database_path - SQLite file (default: ~/.flashcard/rewards.db)
[storage]
# database_path = "/path/to/rewards.db"

# Log output. RUST_LOG overrides this, --verbose forces "debug".
[logging]
level = "info"
"#;

/// Write the default config file
pub fn init_command(config_path: &Path, force: bool) -> Result<()> {
    if config_path.exists() && !force {
        bail!(
            "Configuration already exists: {}\nUse --force to overwrite.",
            config_path.display()
        );
    }

    if let Some(parent) = config_path.parent() {
        if !parent.exists() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
    }

    std::fs::write(config_path, DEFAULT_CONFIG)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;
    println!("Created: {}", config_path.display());

    Ok(())
}
