use crate::ui::types::choices::TaskChoice;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Reads a task from a JSON file shaped like `{"type": ..., "params": ...}`.
pub fn load_task<P: AsRef<Path>>(path: P) -> Result<TaskChoice> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("invalid task in {}", path.display()))
}

/// Writes `task` so that [`load_task`] can replay it.
pub fn save_task<P: AsRef<Path>>(path: P, task: &TaskChoice) -> Result<()> {
    let path = path.as_ref();
    let mut text = serde_json::to_string_pretty(task)?;
    text.push('\n');
    fs::write(path, text).with_context(|| format!("failed to write config {}", path.display()))
}
