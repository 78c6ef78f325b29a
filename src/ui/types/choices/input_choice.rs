use crate::ui::types::choices::UIChoice;
use schemars::{JsonSchema, Schema, schema_for};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use strum_macros::{Display, EnumDiscriminants, EnumIter, EnumMessage, EnumString, IntoStaticStr};

const DEFAULT_SEED: u64 = 42;
fn default_seed() -> u64 {
    DEFAULT_SEED
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct RangeParams {
    #[schemars(title = "Start", description = "First input (included)")]
    pub start: f64,

    #[schemars(title = "Stop", description = "Upper end of the range (excluded)")]
    pub stop: f64,

    #[schemars(title = "Step", description = "Distance between consecutive inputs (> 0)")]
    pub step: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct RandomParams {
    #[schemars(
        title = "Count",
        description = "How many inputs to draw",
        range(min = 1)
    )]
    pub count: u64,

    #[schemars(title = "Low", description = "Lower bound (included)")]
    pub low: f64,

    #[schemars(title = "High", description = "Upper bound (excluded)")]
    pub high: f64,

    #[serde(default = "default_seed")]
    #[schemars(title = "Seed", description = "PRNG seed", default = "default_seed")]
    pub seed: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, EnumDiscriminants, PartialEq)]
#[serde(tag = "type", content = "params", rename_all = "kebab-case")]
#[strum_discriminants(name(InputKind))]
#[strum_discriminants(derive(EnumIter, EnumString, Display, IntoStaticStr, EnumMessage))]
#[strum_discriminants(strum(serialize_all = "kebab-case"))]
pub enum InputChoice {
    #[strum_discriminants(strum(
        message = "Range",
        detailed_message = "Evenly spaced inputs: start, start + step, ... below stop."
    ))]
    Range(RangeParams),

    #[strum_discriminants(strum(
        message = "Random",
        detailed_message = "Uniform draws from [low, high) with a fixed seed."
    ))]
    Random(RandomParams),
}

impl UIChoice for InputChoice {
    type Kind = InputKind;

    fn schema() -> Schema {
        schema_for!(InputChoice)
    }

    fn prompt_label() -> &'static str {
        "Choose the inputs:"
    }

    fn default_params(kind: Self::Kind) -> Value {
        match kind {
            InputKind::Range => json!({ "start": 1.0, "stop": 10.0, "step": 1.0 }),
            InputKind::Random => json!({
                "count": 10,
                "low": 1.0,
                "high": 100.0,
                "seed": DEFAULT_SEED,
            }),
        }
    }
}
