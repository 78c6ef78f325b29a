use crate::evaluation::{Comparison, TableFormat};
use crate::tasks::Task;
use crate::ui::cli::drivers::PromptDriver;
use crate::ui::cli::wizard::prompt_export;
use anyhow::{Context, Result, anyhow};
use std::path::PathBuf;
use std::sync::mpsc;
use std::thread;

/// Runs `task` on a worker thread, handing every row to `on_row` as soon as
/// it is computed. Returns the finished task.
pub fn run_streaming<F>(mut task: Box<dyn Task + Send>, mut on_row: F) -> Result<Box<dyn Task + Send>>
where
    F: FnMut(Comparison),
{
    let (tx, rx) = mpsc::channel();
    task.set_progress(tx);
    let worker = thread::spawn(move || {
        let outcome = task.run();
        (task, outcome)
    });

    for row in rx {
        on_row(row);
    }

    let (task, outcome) = worker
        .join()
        .map_err(|_| anyhow!("task thread panicked"))?;
    outcome.with_context(|| format!("task {} failed", task.name()))?;
    Ok(task)
}

/// Where to export a finished task: the explicit path if one was given,
/// otherwise ask when running interactively. An empty table is never
/// offered for export.
pub fn export_target<D: PromptDriver>(
    driver: &D,
    task: &dyn Task,
    explicit: Option<PathBuf>,
    interactive: bool,
    format: TableFormat,
) -> Result<Option<PathBuf>> {
    match explicit {
        Some(path) => Ok(Some(path)),
        None if interactive && !task.table().is_empty() => {
            prompt_export(driver, task.name(), format)
        }
        None => Ok(None),
    }
}
