use crate::config::AnimationLevel;
use crate::ui::types::choices::UIChoice;
use schemars::{JsonSchema, Schema, schema_for};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};
use std::str::FromStr;
use strum_macros::{Display, EnumDiscriminants, EnumIter, EnumMessage, EnumString, IntoStaticStr};

/// Empty parameter object so the wizard can still look under "params"
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Default, PartialEq)]
pub struct NoAnimationParams {}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, EnumDiscriminants, PartialEq)]
#[serde(tag = "type", content = "params", rename_all = "kebab-case")]
#[strum_discriminants(name(AnimationKind))]
#[strum_discriminants(derive(EnumIter, EnumString, Display, IntoStaticStr, EnumMessage))]
#[strum_discriminants(strum(serialize_all = "kebab-case"))]
pub enum AnimationChoice {
    #[strum_discriminants(strum(
        message = "Minimum",
        detailed_message = "Show the first and the last run, then the result."
    ))]
    Min(NoAnimationParams),
    #[strum_discriminants(strum(
        message = "Medium",
        detailed_message = "Show every run as it completes."
    ))]
    Med(NoAnimationParams),
    #[strum_discriminants(strum(
        message = "Maximum",
        detailed_message = "Show every run and the dots streaming in."
    ))]
    Max(NoAnimationParams),
}

impl From<&AnimationChoice> for AnimationLevel {
    fn from(c: &AnimationChoice) -> Self {
        match c {
            AnimationChoice::Min(_) => AnimationLevel::Min,
            AnimationChoice::Med(_) => AnimationLevel::Med,
            AnimationChoice::Max(_) => AnimationLevel::Max,
        }
    }
}

impl UIChoice for AnimationChoice {
    type Kind = AnimationKind;

    fn schema() -> Schema {
        schema_for!(AnimationChoice)
    }

    fn prompt_label() -> &'static str {
        "Choose an animation level:"
    }

    fn preferred_kind(defaults: &Map<String, Value>) -> Option<Self::Kind> {
        defaults
            .get("animation")
            .and_then(Value::as_str)
            .and_then(|s| AnimationKind::from_str(s).ok())
    }

    fn default_params(_kind: Self::Kind) -> Value {
        json!({})
    }
}
