use anyhow::{Context, Result, bail};
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};
use strum::{EnumMessage, IntoEnumIterator};

use crate::evaluation::TableFormat;
use crate::ui::cli::drivers::PromptDriver;
use crate::ui::types::choices::{FieldKind, FieldSpec, UIChoice, param_specs};
use crate::utils::naming::default_export_name;

const DIM_ITALIC: &str = "\x1b[2m\x1b[3m";
const RESET: &str = "\x1b[0m";

fn menu_label<K>(kind: K) -> String
where
    K: Copy + Into<&'static str> + EnumMessage,
{
    let label = kind.get_message().unwrap_or_else(|| kind.into());
    match kind.get_detailed_message() {
        Some(desc) if !desc.is_empty() => format!("{label}  {DIM_ITALIC}{desc}{RESET}"),
        _ => label.to_string(),
    }
}

/// Asks for a variant of `C`, then for each of its parameters, then for any
/// nested choices, and assembles the typed value.
pub fn prompt_choice<C: UIChoice, D: PromptDriver>(driver: &D) -> Result<C> {
    let kinds: Vec<C::Kind> = C::Kind::iter().collect();
    let labels: Vec<String> = kinds.iter().map(|k| menu_label(*k)).collect();

    let idx = driver.ask_select(C::prompt_label(), C::prompt_help(), &labels)?;
    let kind = *kinds.get(idx).context("selection out of range")?;

    let key: &'static str = kind.into();
    let specs = param_specs(&C::schema(), key)?;
    let defaults = C::default_params(kind);

    let mut params = Map::new();
    for spec in &specs {
        let init = spec
            .default
            .clone()
            .or_else(|| defaults.get(&spec.name).cloned());
        if let Some(value) = ask_field(driver, spec, init)? {
            params.insert(spec.name.clone(), value);
        }
    }

    if let Some(extra) = C::subprompts(driver, kind)? {
        params.extend(extra);
    }
    C::from_parts(kind, Value::Object(params))
}

fn ask_field<D: PromptDriver>(
    driver: &D,
    spec: &FieldSpec,
    init: Option<Value>,
) -> Result<Option<Value>> {
    let help = spec.description.as_deref().unwrap_or("");

    if spec.is_blank_allowed(init.as_ref()) {
        let answer = driver.ask_string(&spec.title, &format!("{help}\n(leave blank for none)"), "")?;
        return parse_optional(spec, answer.trim());
    }

    let value = match spec.kind {
        FieldKind::Boolean => {
            let def = init.and_then(|v| v.as_bool()).unwrap_or(false);
            Value::Bool(driver.ask_bool(&spec.title, help, def)?)
        }
        FieldKind::String => {
            let def = init
                .as_ref()
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string();
            Value::String(driver.ask_string(&spec.title, help, &def)?)
        }
        FieldKind::Integer => {
            let def = init.and_then(|v| v.as_u64()).unwrap_or(0);
            Value::from(driver.ask_u64(
                &spec.title,
                help,
                def,
                spec.min.map(|x| x as u64),
                spec.max.map(|x| x as u64),
            )?)
        }
        FieldKind::Number => {
            let def = init.and_then(|v| v.as_f64()).unwrap_or(0.0);
            Value::from(driver.ask_f64(&spec.title, help, def, spec.min, spec.max)?)
        }
    };
    Ok(Some(value))
}

fn parse_optional(spec: &FieldSpec, answer: &str) -> Result<Option<Value>> {
    if answer.is_empty() {
        return Ok(None);
    }
    let value = match spec.kind {
        FieldKind::Integer => {
            let n: u64 = answer
                .parse()
                .with_context(|| format!("invalid integer for {}", spec.title))?;
            Value::from(n)
        }
        _ => {
            let x: f64 = answer
                .parse()
                .with_context(|| format!("invalid number for {}", spec.title))?;
            if !x.is_finite() {
                bail!("{} must be a finite number", spec.title);
            }
            Value::from(x)
        }
    };
    Ok(Some(value))
}

/// Offers to export the table once the task finishes; keeps asking until
/// the path is usable for `format`.
pub fn prompt_export<D: PromptDriver>(
    driver: &D,
    task: &str,
    format: TableFormat,
) -> Result<Option<PathBuf>> {
    if !driver.ask_bool(
        "Export the table?",
        "Write every row to a file when the run finishes",
        false,
    )? {
        return Ok(None);
    }

    let default = default_export_name(task, format.extension());
    let help = format!("Path of the .{} file to write", format.extension());
    loop {
        let answer = driver.ask_string("Export path", &help, &default)?;
        match validate_export_path(&answer, format) {
            Ok(path) => return Ok(Some(path)),
            Err(msg) => eprintln!("✗ {msg}"),
        }
    }
}

fn validate_export_path(input: &str, format: TableFormat) -> Result<PathBuf, String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err("Path cannot be empty".into());
    }
    let p = Path::new(trimmed);

    if p.is_dir() {
        return Err(format!("{} is a directory", p.display()));
    }
    match p.parent() {
        Some(dir) if !dir.as_os_str().is_empty() && !dir.is_dir() => {
            return Err(format!("Directory does not exist: {}", dir.display()));
        }
        _ => {}
    }
    match p.extension().and_then(|e| e.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case(format.extension()) => Ok(p.to_path_buf()),
        _ => Err(format!("Expected a .{} file", format.extension())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::DEFAULT_TOLERANCE;
    use crate::ui::cli::drivers::ScriptedDriver;
    use crate::ui::types::choices::{
        InputChoice, RandomParams, RangeParams, SeriesParams, SquareRootTableParams, TaskChoice,
    };
    use tempfile::tempdir;

    #[test]
    fn square_root_table_walkthrough() {
        let driver = ScriptedDriver::new([
            "0",  // task: square-root-table
            "",   // initial guess: none
            "",   // tolerance: default
            "50", // max iterations
            "0",  // inputs: range
            "",   // start: default
            "5",  // stop
            "",   // step: default
        ]);
        let choice: TaskChoice = prompt_choice(&driver).unwrap();
        assert_eq!(
            choice,
            TaskChoice::SquareRootTable(SquareRootTableParams {
                inputs: InputChoice::Range(RangeParams {
                    start: 1.0,
                    stop: 5.0,
                    step: 1.0
                }),
                initial_guess: None,
                tolerance: DEFAULT_TOLERANCE,
                max_iterations: 50,
            })
        );
        assert_eq!(
            driver.asked(),
            [
                "Choose a task:",
                "Initial Guess",
                "Tolerance",
                "Max Iterations",
                "Choose the inputs:",
                "Start",
                "Stop",
                "Step"
            ]
        );
    }

    #[test]
    fn optional_guess_accepts_a_number() {
        let driver = ScriptedDriver::new(["0", "3", "1e-7", "", "1", "4", "", "", "7"]);
        let choice: TaskChoice = prompt_choice(&driver).unwrap();
        let TaskChoice::SquareRootTable(p) = choice else {
            panic!("wrong variant");
        };
        assert_eq!(p.initial_guess, Some(3.0));
        assert_eq!(p.tolerance, 1e-7);
        assert_eq!(
            p.inputs,
            InputChoice::Random(RandomParams {
                count: 4,
                low: 1.0,
                high: 100.0,
                seed: 7
            })
        );
    }

    #[test]
    fn optional_guess_rejects_garbage() {
        let driver = ScriptedDriver::new(["0", "abc"]);
        assert!(prompt_choice::<TaskChoice, _>(&driver).is_err());
        let driver = ScriptedDriver::new(["0", "NaN"]);
        assert!(prompt_choice::<TaskChoice, _>(&driver).is_err());
    }

    #[test]
    fn ramanujan_walkthrough() {
        let driver = ScriptedDriver::new(["1", "1e-12", ""]);
        let choice: TaskChoice = prompt_choice(&driver).unwrap();
        assert_eq!(
            choice,
            TaskChoice::RamanujanPi(SeriesParams {
                threshold: 1e-12,
                max_terms: 1_000
            })
        );
    }

    #[test]
    fn menu_labels_carry_descriptions() {
        use crate::ui::types::choices::TaskKind;
        let label = menu_label(TaskKind::RamanujanPi);
        assert!(label.starts_with("Ramanujan Pi"));
        assert!(label.contains(DIM_ITALIC));
    }

    #[test]
    fn export_declined() {
        let driver = ScriptedDriver::new(["n"]);
        assert_eq!(prompt_export(&driver, "t", TableFormat::Csv).unwrap(), None);
    }

    #[test]
    fn export_path_retries_until_valid() {
        let dir = tempdir().unwrap();
        let wrong_ext = dir.path().join("out.txt");
        let good = dir.path().join("out.csv");
        let missing_dir = dir.path().join("nope").join("out.csv");

        let driver = ScriptedDriver::new([
            "y".to_string(),
            missing_dir.display().to_string(),
            wrong_ext.display().to_string(),
            good.display().to_string(),
        ]);
        let got = prompt_export(&driver, "t", TableFormat::Csv).unwrap();
        assert_eq!(got, Some(good));
    }

    #[test]
    fn export_default_name_is_accepted() {
        let driver = ScriptedDriver::new(["y", ""]);
        let got = prompt_export(&driver, "ramanujan-pi", TableFormat::Json)
            .unwrap()
            .unwrap();
        let name = got.to_string_lossy();
        assert!(name.starts_with("ramanujan-pi-"));
        assert!(name.ends_with(".json"));
    }

    #[test]
    fn validate_rejects_directories_and_empty() {
        let dir = tempdir().unwrap();
        assert!(validate_export_path("", TableFormat::Csv).is_err());
        assert!(validate_export_path(&dir.path().display().to_string(), TableFormat::Csv).is_err());
        assert!(validate_export_path("table.TSV", TableFormat::Tsv).is_ok());
    }
}
