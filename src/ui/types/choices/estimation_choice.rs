use crate::config::{DEFAULT_BATCH_SIZE, DEFAULT_LOG_THRESHOLD};
use crate::ui::cli::wizard::prompt_choice_with;
use crate::ui::types::choices::{AnimationChoice, UIChoice};
use schemars::{JsonSchema, Schema, schema_for};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};
use strum_macros::{Display, EnumDiscriminants, EnumIter, EnumMessage, EnumString, IntoStaticStr};

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct EstimationParams {
    #[schemars(skip)]
    pub animation: AnimationChoice,

    #[schemars(
        title = "Runs",
        description = "Number of independent Monte Carlo trials",
        range(min = 1)
    )]
    pub run_count: u64,

    #[schemars(
        title = "Dots",
        description = "Random points sampled in each run",
        range(min = 1)
    )]
    pub dot_count: u64,

    #[serde(default)]
    #[schemars(
        title = "Seed",
        description = "Fixed seed for a reproducible session (None = random)"
    )]
    pub seed: Option<u64>,

    #[serde(default)]
    #[schemars(
        title = "Max Seconds",
        description = "Stop after this many seconds (None = unlimited)"
    )]
    pub max_seconds: Option<u64>,

    #[serde(default)]
    #[schemars(
        title = "Convergence Export",
        description = "CSV file for the running error and st.dev (blank = skip)"
    )]
    pub curve_export: String,

    #[serde(default = "default_batch_size")]
    #[schemars(skip)]
    pub batch_size: u64,

    #[serde(default = "default_log_threshold")]
    #[schemars(skip)]
    pub log_threshold: u64,
}

fn default_batch_size() -> u64 {
    DEFAULT_BATCH_SIZE as u64
}

fn default_log_threshold() -> u64 {
    DEFAULT_LOG_THRESHOLD as u64
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, EnumDiscriminants)]
#[serde(tag = "type", content = "params", rename_all = "kebab-case")]
#[strum_discriminants(name(EstimationKind))]
#[strum_discriminants(derive(EnumIter, EnumString, Display, IntoStaticStr, EnumMessage))]
#[strum_discriminants(strum(serialize_all = "kebab-case"))]
pub enum EstimationChoice {
    #[strum_discriminants(strum(
        message = "Estimate Pi",
        detailed_message = "Monte Carlo runs summarised with mean, error and st.dev."
    ))]
    EstimatePi(EstimationParams),
}

impl UIChoice for EstimationChoice {
    type Kind = EstimationKind;

    fn schema() -> Schema {
        schema_for!(EstimationChoice)
    }

    fn prompt_label() -> &'static str {
        "Choose a task:"
    }

    fn default_params(kind: Self::Kind) -> Value {
        match kind {
            EstimationKind::EstimatePi => json!({
                "run_count": 10,
                "dot_count": 1000,
                "seed": null,
                "max_seconds": null,
                "curve_export": "",
            }),
        }
    }

    fn subprompts<D: crate::ui::cli::drivers::PromptDriver>(
        driver: &D,
        kind: Self::Kind,
        defaults: &Map<String, Value>,
    ) -> anyhow::Result<Option<Map<String, Value>>> {
        match kind {
            EstimationKind::EstimatePi => {
                let animation = prompt_choice_with::<AnimationChoice, _>(driver, defaults)?;
                let mut m = Map::new();
                m.insert("animation".into(), serde_json::to_value(animation)?);
                Ok(Some(m))
            }
        }
    }
}
