use anyhow::{Context, Result, anyhow};
use schemars::Schema;
use serde_json::{Map, Value};

type Object = Map<String, Value>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    String,
    Integer,
    Number,
    Boolean,
}

impl FieldKind {
    fn from_type_name(name: &str) -> Option<Self> {
        match name {
            "string" => Some(FieldKind::String),
            "integer" => Some(FieldKind::Integer),
            "number" => Some(FieldKind::Number),
            "boolean" => Some(FieldKind::Boolean),
            _ => None,
        }
    }

    /// `Option<T>` shows up as `["<t>", "null"]`; the first concrete type wins.
    fn from_schema_type(ty: &Value) -> Option<Self> {
        match ty {
            Value::String(s) => Self::from_type_name(s),
            Value::Array(types) => types
                .iter()
                .filter_map(Value::as_str)
                .find_map(Self::from_type_name),
            _ => None,
        }
    }
}

/// One question the wizard asks: a field of a variant's `params` object.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldSpec {
    pub name: String,
    pub title: String,
    pub description: Option<String>,
    pub required: bool,
    pub kind: FieldKind,
    pub default: Option<Value>,
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl FieldSpec {
    fn from_property(name: &str, prop: &Object, required: bool) -> Option<Self> {
        let kind = FieldKind::from_schema_type(prop.get("type")?)?;
        let bound = |inclusive: &str, exclusive: &str| {
            prop.get(inclusive)
                .or_else(|| prop.get(exclusive))
                .and_then(Value::as_f64)
        };

        Some(Self {
            name: name.to_string(),
            title: prop
                .get("title")
                .and_then(Value::as_str)
                .unwrap_or(name)
                .to_string(),
            description: prop
                .get("description")
                .and_then(Value::as_str)
                .map(str::to_string),
            required,
            kind,
            default: prop.get("default").cloned(),
            min: bound("minimum", "exclusiveMinimum"),
            max: bound("maximum", "exclusiveMaximum"),
        })
    }

    /// Optional numeric field with nothing to pre-fill; may be left blank.
    pub fn is_blank_allowed(&self, init: Option<&Value>) -> bool {
        !self.required
            && matches!(self.kind, FieldKind::Integer | FieldKind::Number)
            && matches!(init, None | Some(Value::Null))
    }
}

/// Lists the fields of the `params` object of the variant tagged `kind`.
///
/// Fields whose type the wizard cannot ask for (objects, skipped nested
/// choices) are left out.
pub fn param_specs(root: &Schema, kind: &str) -> Result<Vec<FieldSpec>> {
    let root = root.as_object().context("schema root is not an object")?;
    let variants = root
        .get("oneOf")
        .or_else(|| root.get("anyOf"))
        .and_then(Value::as_array)
        .context("schema has no oneOf/anyOf")?;

    let props = variants
        .iter()
        .filter_map(|v| v.get("properties")?.as_object())
        .find(|p| tag_of(p) == Some(kind))
        .ok_or_else(|| anyhow!("no variant tagged '{kind}'"))?;

    let Some(params) = props.get("params").and_then(Value::as_object) else {
        return Ok(vec![]);
    };
    let params = resolve(root, params).context("unresolved $ref for params")?;

    let required: Vec<&str> = params
        .get("required")
        .and_then(Value::as_array)
        .map(|a| a.iter().filter_map(Value::as_str).collect())
        .unwrap_or_default();

    let Some(fields) = params.get("properties").and_then(Value::as_object) else {
        return Ok(vec![]);
    };

    let mut out = Vec::with_capacity(fields.len());
    for (name, field) in fields {
        let prop = field
            .as_object()
            .with_context(|| format!("schema of field '{name}' is not an object"))?;
        let prop = resolve(root, prop).with_context(|| format!("unresolved $ref for '{name}'"))?;
        if let Some(spec) = FieldSpec::from_property(name, prop, required.contains(&name.as_str())) {
            out.push(spec);
        }
    }
    Ok(out)
}

fn tag_of(props: &Object) -> Option<&str> {
    let tag = props.get("type")?.as_object()?;
    if let Some(c) = tag.get("const").and_then(Value::as_str) {
        return Some(c);
    }
    match tag.get("enum")?.as_array()?.as_slice() {
        [only] => only.as_str(),
        _ => None,
    }
}

/// Follows a local `$ref` such as `#/$defs/RangeParams`. Objects without a
/// `$ref` are returned unchanged.
fn resolve<'a>(root: &'a Object, obj: &'a Object) -> Option<&'a Object> {
    let Some(reference) = obj.get("$ref") else {
        return Some(obj);
    };
    reference
        .as_str()?
        .strip_prefix("#/")?
        .split('/')
        .try_fold(root, |cur, raw| {
            // JSON pointer escapes
            let seg = raw.replace("~1", "/").replace("~0", "~");
            cur.get(&seg)?.as_object()
        })
}
