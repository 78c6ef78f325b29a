use anyhow::{Context, Result};
use clap::Parser;
use converge::evaluation::{ComparisonTable, TableFormat};
use converge::ui::cli::drivers::InquireDriver;
use converge::ui::cli::session::{export_target, run_streaming};
use converge::ui::cli::wizard::prompt_choice;
use converge::ui::config::{load_task, save_task};
use converge::ui::types::build::build_task;
use converge::ui::types::choices::{TaskChoice, UIChoice};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(name = "converge")]
#[command(about = "Iterative estimators with convergence stopping rules", long_about = None)]
#[command(version)]
struct Cli {
    /// Run the task described in this JSON file instead of asking for one
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Write the finished table to this file
    #[arg(short, long)]
    export: Option<PathBuf>,

    /// Format of the exported table
    #[arg(short, long, default_value_t = TableFormat::Csv)]
    format: TableFormat,

    /// Save the chosen task as a config file before running it
    #[arg(long)]
    save_config: Option<PathBuf>,

    /// Print the JSON schema of config files and exit
    #[arg(long)]
    print_schema: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if cli.print_schema {
        println!("{}", serde_json::to_string_pretty(&TaskChoice::schema())?);
        return Ok(());
    }

    let driver = InquireDriver;
    let interactive = cli.config.is_none();
    let choice = match &cli.config {
        Some(path) => load_task(path)?,
        None => prompt_choice::<TaskChoice, _>(&driver)?,
    };

    if let Some(path) = &cli.save_config {
        save_task(path, &choice)?;
        info!(path = %path.display(), "saved task config");
    }

    let task = build_task(choice)?;

    println!("{}", ComparisonTable::header());
    let task = run_streaming(task, |row| println!("{row}"))?;

    println!();
    for m in task.table().summary() {
        println!("{:<16} {:e}", m.name, m.value);
    }

    let export = export_target(&driver, task.as_ref(), cli.export, interactive, cli.format)?;
    if let Some(path) = export {
        task.table()
            .export(&path, cli.format)
            .with_context(|| format!("failed to export to {}", path.display()))?;
        info!(path = %path.display(), format = %cli.format, "table exported");
    }

    Ok(())
}
