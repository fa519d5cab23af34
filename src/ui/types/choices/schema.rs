use anyhow::{Context, Result, anyhow};
use schemars::Schema;
use serde_json::{Map, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    String,
    Integer,
    Boolean,
}

impl FieldKind {
    fn from_type_name(name: &str) -> Option<Self> {
        match name {
            "string" => Some(FieldKind::String),
            "integer" => Some(FieldKind::Integer),
            "boolean" => Some(FieldKind::Boolean),
            _ => None,
        }
    }

    // `["integer", "null"]` is how an `Option<u64>` shows up.
    fn detect(ty: Option<&Value>) -> Option<Self> {
        match ty? {
            Value::String(s) => Self::from_type_name(s),
            Value::Array(arr) => arr
                .iter()
                .filter_map(Value::as_str)
                .find_map(Self::from_type_name),
            _ => None,
        }
    }
}

/// One prompt-able field of a choice's `params` object.
#[derive(Debug, Clone)]
pub struct FieldSpec {
    pub name: String,
    pub title: String,
    pub description: Option<String>,
    pub required: bool,
    pub kind: FieldKind,
    pub default: Option<Value>,
    pub min: Option<u64>,
    pub max: Option<u64>,
}

impl FieldSpec {
    fn from_schema(name: &str, field: &Map<String, Value>, required: bool) -> Option<Self> {
        let kind = FieldKind::detect(field.get("type"))?;
        let bound = |keys: [&str; 2]| {
            keys.iter()
                .find_map(|k| field.get(*k))
                .and_then(Value::as_f64)
                .map(|x| x.max(0.0) as u64)
        };

        Some(Self {
            name: name.to_string(),
            title: field
                .get("title")
                .and_then(Value::as_str)
                .unwrap_or(name)
                .to_string(),
            description: field
                .get("description")
                .and_then(Value::as_str)
                .map(str::to_string),
            required,
            kind,
            default: field.get("default").cloned(),
            min: bound(["minimum", "exclusiveMinimum"]),
            max: bound(["maximum", "exclusiveMaximum"]),
        })
    }

    /// Optional integers are asked as free text so they can be left blank.
    pub fn is_optional_integer(&self, init: Option<&Value>) -> bool {
        !self.required && self.kind == FieldKind::Integer && matches!(init, None | Some(Value::Null))
    }
}

// Return the whole tagged-enum schema for T
pub fn schema_for<T: schemars::JsonSchema>() -> Schema {
    schemars::schema_for!(T)
}

/// Field specs of the `params` object of the variant tagged `kind_key`.
pub fn specs_for_kind(root: &Schema, kind_key: &str) -> Result<Vec<FieldSpec>> {
    let root_obj = root.as_object().context("root schema is not an object")?;

    let branches = root_obj
        .get("oneOf")
        .or_else(|| root_obj.get("anyOf"))
        .and_then(Value::as_array)
        .context("missing oneOf/anyOf")?;

    let branch = branches
        .iter()
        .filter_map(Value::as_object)
        .filter_map(|b| b.get("properties").and_then(Value::as_object))
        .find(|props| discriminant_matches(props, kind_key))
        .ok_or_else(|| anyhow!("no branch found for type={kind_key}"))?;

    let Some(params) = branch
        .get("params")
        .and_then(Value::as_object)
        .and_then(|o| resolve_ref_obj(root_obj, o))
    else {
        return Ok(vec![]);
    };
    let Some(props) = params.get("properties").and_then(Value::as_object) else {
        return Ok(vec![]);
    };

    let required: Vec<&str> = params
        .get("required")
        .and_then(Value::as_array)
        .map(|a| a.iter().filter_map(Value::as_str).collect())
        .unwrap_or_default();

    let mut out = Vec::with_capacity(props.len());
    for (name, field) in props {
        let field = field.as_object().context("field schema not object")?;
        let field = resolve_ref_obj(root_obj, field)
            .ok_or_else(|| anyhow!("failed to resolve field $ref for '{name}'"))?;
        if let Some(spec) = FieldSpec::from_schema(name, field, required.contains(&name.as_str())) {
            out.push(spec);
        }
    }
    Ok(out)
}

fn discriminant_matches(props: &Map<String, Value>, kind_key: &str) -> bool {
    let Some(tag) = props.get("type").and_then(Value::as_object) else {
        return false;
    };
    if tag.get("const").and_then(Value::as_str) == Some(kind_key) {
        return true;
    }
    matches!(
        tag.get("enum").and_then(Value::as_array).map(Vec::as_slice),
        Some([only]) if only.as_str() == Some(kind_key)
    )
}

/// Resolve a local $ref like "#/$defs/EstimationParams" against the root object.
fn resolve_ref_obj<'a>(
    root_obj: &'a Map<String, Value>,
    obj: &'a Map<String, Value>,
) -> Option<&'a Map<String, Value>> {
    let Some(Value::String(r)) = obj.get("$ref") else {
        return Some(obj);
    };
    let path = r.strip_prefix("#/")?;
    path.split('/').try_fold(root_obj, |cur, raw_seg| {
        // JSON Pointer unescape (~1 => /, ~0 => ~)
        let seg = raw_seg.replace("~1", "/").replace("~0", "~");
        cur.get(&seg)?.as_object()
    })
}
