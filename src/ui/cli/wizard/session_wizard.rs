use anyhow::{Context, Result};
use serde_json::{Map, Value, json};

use crate::persistence::{SETTINGS_FILE_NAME, Settings};
use crate::ui::cli::drivers::PromptDriver;
use crate::ui::cli::wizard::prompt_choice_with;
use crate::ui::types::build::{SessionPlan, build_plan};
use crate::ui::types::choices::EstimationChoice;

pub struct WizardOutcome {
    pub plan: SessionPlan,
    pub save_settings: bool,
}

impl WizardOutcome {
    /// `base` with the chosen runs, dots and animation.
    pub fn updated_settings(&self, base: &Settings) -> Settings {
        Settings {
            runs: self.plan.config.run_count,
            dots: self.plan.config.dot_count,
            animation: self.plan.config.animation,
            ..base.clone()
        }
    }
}

/// Wizard answers prefilled from the settings file.
pub fn settings_defaults(settings: &Settings) -> Map<String, Value> {
    let mut m = Map::new();
    m.insert("run_count".into(), json!(settings.runs));
    m.insert("dot_count".into(), json!(settings.dots));
    m.insert("animation".into(), json!(settings.animation.to_string()));
    m
}

pub fn configure_session<D: PromptDriver>(driver: &D, settings: &Settings) -> Result<WizardOutcome> {
    let choice = prompt_choice_with::<EstimationChoice, _>(driver, &settings_defaults(settings))?;
    let plan = build_plan(choice).context("invalid session parameters")?;
    let save_settings = driver.ask_bool(
        "Save as defaults?",
        &format!("Write runs, dots and animation to {SETTINGS_FILE_NAME}"),
        false,
    )?;
    Ok(WizardOutcome {
        plan,
        save_settings,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AnimationLevel, EstimationConfig};

    #[test]
    fn defaults_come_from_settings() {
        let s = Settings {
            runs: 300,
            dots: 2000,
            animation: AnimationLevel::Max,
            ..Settings::default()
        };
        let m = settings_defaults(&s);
        assert_eq!(m["run_count"], json!(300));
        assert_eq!(m["dot_count"], json!(2000));
        assert_eq!(m["animation"], json!("max"));
    }

    #[test]
    fn updated_settings_keep_presentation_fields() {
        let base = Settings {
            height: 900,
            wait_ms: 5,
            ..Settings::default()
        };
        let outcome = WizardOutcome {
            plan: SessionPlan {
                config: EstimationConfig::new(50, 700).with_animation(AnimationLevel::Min),
                curve_export: None,
            },
            save_settings: true,
        };
        let s = outcome.updated_settings(&base);
        assert_eq!(s.runs, 50);
        assert_eq!(s.dots, 700);
        assert_eq!(s.animation, AnimationLevel::Min);
        assert_eq!(s.height, 900);
        assert_eq!(s.wait_ms, 5);
    }
}
