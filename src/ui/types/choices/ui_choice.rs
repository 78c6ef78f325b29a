use crate::ui::cli::drivers::PromptDriver;
use anyhow::Result;
use schemars::{JsonSchema, Schema};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value, json};
use strum::{EnumMessage, IntoEnumIterator};

/// A serde enum tagged as `{"type": <kind>, "params": {...}}` that the wizard
/// can fill in.
///
/// `Kind` is the strum discriminant enum: it lists the variants, names them
/// in kebab-case and carries the menu label and description.
pub trait UIChoice: Sized + Serialize + DeserializeOwned + JsonSchema {
    type Kind: Copy + Into<&'static str> + EnumMessage + IntoEnumIterator;

    fn schema() -> Schema;

    fn prompt_label() -> &'static str;

    fn prompt_help() -> Option<&'static str> {
        Some("↑/↓ to move, ↵ to pick")
    }

    /// Values offered as defaults when asking for the `params` of `kind`.
    fn default_params(kind: Self::Kind) -> Value;

    /// Collects parameters the schema hides (nested choices). Default: none.
    fn subprompts<D: PromptDriver>(_driver: &D, _kind: Self::Kind) -> Result<Option<Map<String, Value>>> {
        Ok(None)
    }

    fn from_parts(kind: Self::Kind, params: Value) -> Result<Self> {
        let key: &'static str = kind.into();
        Ok(serde_json::from_value(json!({ "type": key, "params": params }))?)
    }
}
