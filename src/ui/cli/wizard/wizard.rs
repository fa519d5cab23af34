use anyhow::{Context, Result};
use serde_json::{Map, Value};
use std::fmt::{Display, Formatter};
use strum::{EnumMessage, IntoEnumIterator};

use crate::ui::cli::drivers::PromptDriver;
use crate::ui::types::choices::{FieldKind, FieldSpec, UIChoice, schema_for, specs_for_kind};

const DIM_ITALIC: &str = "\x1b[2m\x1b[3m";
const RESET: &str = "\x1b[0m";

struct KindItem<K> {
    kind: K,
    text: String,
}

impl<K> Display for KindItem<K> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.text)
    }
}

fn kind_items<K>() -> Vec<KindItem<K>>
where
    K: Copy + Into<&'static str> + EnumMessage + IntoEnumIterator,
{
    K::iter()
        .map(|k| {
            let label = k.get_message().unwrap_or_else(|| k.into());
            let desc = k.get_detailed_message().unwrap_or("");
            let text = if desc.is_empty() {
                label.to_string()
            } else {
                format!("{label}  {DIM_ITALIC}{desc}{RESET}")
            };
            KindItem { kind: k, text }
        })
        .collect()
}

/// Prompts for a choice of `C`, prefilling answers from `defaults` (e.g. the
/// settings file) before falling back to the schema and `default_params`.
pub fn prompt_choice_with<C: UIChoice, D: PromptDriver>(
    driver: &D,
    defaults: &Map<String, Value>,
) -> Result<C> {
    let items = kind_items::<C::Kind>();
    let cursor = C::preferred_kind(defaults)
        .and_then(|k| items.iter().position(|item| item.kind == k))
        .unwrap_or(0);

    let mut select = inquire::Select::new(C::prompt_label(), items).with_starting_cursor(cursor);
    if let Some(help) = C::prompt_help() {
        select = select.with_help_message(help);
    }

    let choice_kind: C::Kind = select.prompt()?.kind;
    let key: &'static str = choice_kind.into();
    let specs = specs_for_kind(&schema_for::<C>(), key)?;
    let kind_defaults = C::default_params(choice_kind);

    let mut params = Map::new();
    for s in specs {
        let init = defaults
            .get(&s.name)
            .cloned()
            .or_else(|| s.default.clone())
            .or_else(|| kind_defaults.get(&s.name).cloned());

        if let Some(val) = ask_field(driver, &s, init)? {
            params.insert(s.name.clone(), val);
        }
    }

    if let Some(extra) = C::subprompts(driver, choice_kind, defaults)? {
        params.extend(extra);
    }
    C::from_parts(choice_kind, Value::Object(params))
}

/// Asks one field. `None` means an optional field left blank.
pub(crate) fn ask_field<D: PromptDriver>(
    driver: &D,
    s: &FieldSpec,
    init: Option<Value>,
) -> Result<Option<Value>> {
    let help = s.description.as_deref().unwrap_or("");

    if s.is_optional_integer(init.as_ref()) {
        let def_txt = init
            .as_ref()
            .and_then(Value::as_u64)
            .map(|n| n.to_string())
            .unwrap_or_default();
        let answer = driver.ask_string(
            &s.title,
            &format!("{help}\n(leave blank for none)"),
            &def_txt,
        )?;
        let answer = answer.trim();
        if answer.is_empty() {
            return Ok(None);
        }
        let n: u64 = answer
            .parse()
            .with_context(|| format!("invalid integer for {}", s.title))?;
        return Ok(Some(Value::from(n)));
    }

    Ok(Some(match s.kind {
        FieldKind::Boolean => {
            let def = init.and_then(|v| v.as_bool()).unwrap_or(false);
            Value::Bool(driver.ask_bool(&s.title, help, def)?)
        }
        FieldKind::String => {
            let def = init
                .and_then(|v| v.as_str().map(str::to_string))
                .unwrap_or_default();
            Value::String(driver.ask_string(&s.title, help, &def)?.trim().to_string())
        }
        FieldKind::Integer => {
            let def = init.and_then(|v| v.as_u64()).unwrap_or(0);
            Value::from(driver.ask_u64(&s.title, help, def, s.min, s.max)?)
        }
    }))
}
