use std::fs;
use std::path::Path;

use crate::config::RecommenderConfig;
use crate::error::Result;

/// Load settings from a JSON file.
///
/// Missing fields fall back to their defaults; the result is validated.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<RecommenderConfig> {
    let content = fs::read_to_string(path)?;
    let config: RecommenderConfig = serde_json::from_str(&content)?;
    config.validate()?;
    Ok(config)
}

/// Save settings to a JSON file.
pub fn save_config<P: AsRef<Path>>(path: P, config: &RecommenderConfig) -> Result<()> {
    let json = serde_json::to_string_pretty(config)?;
    fs::write(path, json)?;
    Ok(())
}
