use crate::core::DEFAULT_TOLERANCE;
use crate::estimators::DEFAULT_TERM_THRESHOLD;
use crate::ui::cli::drivers::PromptDriver;
use crate::ui::cli::wizard::prompt_choice;
use crate::ui::types::choices::{InputChoice, UIChoice};
use schemars::{JsonSchema, Schema, schema_for};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};
use strum_macros::{Display, EnumDiscriminants, EnumIter, EnumMessage, EnumString, IntoStaticStr};

fn default_tolerance() -> f64 {
    DEFAULT_TOLERANCE
}

fn default_max_iterations() -> u64 {
    1_000
}

fn default_threshold() -> f64 {
    DEFAULT_TERM_THRESHOLD
}

fn default_max_terms() -> u64 {
    1_000
}

// enough for e^700 to reach the default threshold
fn default_exponential_max_terms() -> u64 {
    5_000
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct SquareRootTableParams {
    #[schemars(skip)]
    pub inputs: InputChoice,

    #[serde(default)]
    #[schemars(
        title = "Initial Guess",
        description = "Positive starting estimate for every input (blank = the input itself)"
    )]
    pub initial_guess: Option<f64>,

    #[serde(default = "default_tolerance")]
    #[schemars(
        title = "Tolerance",
        description = "Stop when two consecutive estimates differ by less than this",
        default = "default_tolerance"
    )]
    pub tolerance: f64,

    #[serde(default = "default_max_iterations")]
    #[schemars(
        title = "Max Iterations",
        description = "Give up on an input after this many refinements",
        range(min = 1),
        default = "default_max_iterations"
    )]
    pub max_iterations: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct SeriesParams {
    #[serde(default = "default_threshold")]
    #[schemars(
        title = "Term Threshold",
        description = "Stop once a term smaller than this has been added",
        default = "default_threshold"
    )]
    pub threshold: f64,

    #[serde(default = "default_max_terms")]
    #[schemars(
        title = "Max Terms",
        description = "Give up after this many terms",
        range(min = 1),
        default = "default_max_terms"
    )]
    pub max_terms: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct ExponentialParams {
    #[schemars(title = "Exponent", description = "x in e^x (|x| <= 700)")]
    pub x: f64,

    #[serde(default = "default_threshold")]
    #[schemars(
        title = "Term Threshold",
        description = "Stop once a term smaller than this has been added",
        default = "default_threshold"
    )]
    pub threshold: f64,

    #[serde(default = "default_exponential_max_terms")]
    #[schemars(
        title = "Max Terms",
        description = "Give up after this many terms",
        range(min = 1),
        default = "default_exponential_max_terms"
    )]
    pub max_terms: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, EnumDiscriminants, PartialEq)]
#[serde(tag = "type", content = "params", rename_all = "kebab-case")]
#[strum_discriminants(name(TaskKind))]
#[strum_discriminants(derive(EnumIter, EnumString, Display, IntoStaticStr, EnumMessage))]
#[strum_discriminants(strum(serialize_all = "kebab-case"))]
pub enum TaskChoice {
    #[strum_discriminants(strum(
        message = "Square Root Table",
        detailed_message = "Newton's method next to f64::sqrt, one row per input."
    ))]
    SquareRootTable(SquareRootTableParams),

    #[strum_discriminants(strum(
        message = "Ramanujan Pi",
        detailed_message = "Sum Ramanujan's 1/pi series and compare with pi."
    ))]
    RamanujanPi(SeriesParams),

    #[strum_discriminants(strum(
        message = "Exponential",
        detailed_message = "Sum the Taylor series of e^x and compare with exp(x)."
    ))]
    Exponential(ExponentialParams),
}

impl TaskChoice {
    pub fn kind(&self) -> TaskKind {
        TaskKind::from(self)
    }
}

impl UIChoice for TaskChoice {
    type Kind = TaskKind;

    fn schema() -> Schema {
        schema_for!(TaskChoice)
    }

    fn prompt_label() -> &'static str {
        "Choose a task:"
    }

    fn default_params(kind: Self::Kind) -> Value {
        match kind {
            TaskKind::SquareRootTable => json!({
                "initial_guess": null,
                "tolerance": DEFAULT_TOLERANCE,
                "max_iterations": default_max_iterations(),
            }),
            TaskKind::RamanujanPi => json!({
                "threshold": DEFAULT_TERM_THRESHOLD,
                "max_terms": default_max_terms(),
            }),
            TaskKind::Exponential => json!({
                "x": 1.0,
                "threshold": DEFAULT_TERM_THRESHOLD,
                "max_terms": default_exponential_max_terms(),
            }),
        }
    }

    fn subprompts<D: PromptDriver>(
        driver: &D,
        kind: Self::Kind,
    ) -> anyhow::Result<Option<Map<String, Value>>> {
        match kind {
            TaskKind::SquareRootTable => {
                let inputs = prompt_choice::<InputChoice, _>(driver)?;
                let mut m = Map::new();
                m.insert("inputs".into(), serde_json::to_value(inputs)?);
                Ok(Some(m))
            }
            TaskKind::RamanujanPi | TaskKind::Exponential => Ok(None),
        }
    }
}
