use crate::config::{AnimationLevel, EstimationConfig};
use crate::error::SettingsError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use std::str::FromStr;

pub const SETTINGS_FILE_NAME: &str = "pi_settings.txt";

/// Persisted control-panel settings.
///
/// Only `runs` and `dots` reach the estimator; the rest is for presentation.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// Height of the drawing area, in pixels.
    pub height: u32,
    /// Initial delay between plotted dots, in milliseconds.
    pub wait_ms: u64,
    /// Dots plotted per refresh at the start of a run.
    pub step: u64,
    pub runs: usize,
    pub dots: usize,
    pub animation: AnimationLevel,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            height: 600,
            wait_ms: 100,
            step: 1,
            runs: 10,
            dots: 1000,
            animation: AnimationLevel::Med,
        }
    }
}

// On-disk shape. Values may be numbers or numeric strings, and are written
// back as strings.
#[derive(Debug, Serialize, Deserialize)]
struct StoredSettings {
    h: Scalar,
    wait: Scalar,
    step: Scalar,
    runs: Scalar,
    dots: Scalar,
    animation: Scalar,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
enum Scalar {
    Number(serde_json::Number),
    Text(String),
}

impl Scalar {
    fn text(&self) -> String {
        match self {
            Scalar::Number(n) => n.to_string(),
            Scalar::Text(s) => s.trim().to_string(),
        }
    }

    fn parse<T: FromStr>(&self, key: &'static str) -> Result<T, SettingsError> {
        let raw = self.text();
        raw.parse().map_err(|_| SettingsError::InvalidValue {
            key,
            reason: format!("`{raw}` is not a valid number"),
        })
    }

    fn positive<T>(&self, key: &'static str) -> Result<T, SettingsError>
    where
        T: FromStr + PartialOrd + Default,
    {
        let v: T = self.parse(key)?;
        if v <= T::default() {
            return Err(SettingsError::InvalidValue {
                key,
                reason: "must be > 0".into(),
            });
        }
        Ok(v)
    }
}

impl Settings {
    pub fn parse(text: &str) -> Result<Self, SettingsError> {
        let stored: StoredSettings = serde_json::from_str(text)?;
        Self::try_from(stored)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, SettingsError> {
        let text = fs::read_to_string(path)?;
        Self::parse(&text)
    }

    /// Defaults when the file does not exist; any other failure is an error.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self, SettingsError> {
        match fs::read_to_string(path) {
            Ok(text) => Self::parse(&text),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(e.into()),
        }
    }

    /// Rewrites the whole file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), SettingsError> {
        let stored = StoredSettings::from(self);
        let text = serde_json::to_string_pretty(&stored)?;
        fs::write(path, text)?;
        Ok(())
    }

    pub fn to_config(&self) -> EstimationConfig {
        EstimationConfig::new(self.runs, self.dots).with_animation(self.animation)
    }
}

impl TryFrom<StoredSettings> for Settings {
    type Error = SettingsError;

    fn try_from(s: StoredSettings) -> Result<Self, Self::Error> {
        let animation_text = s.animation.text();
        let animation = AnimationLevel::from_str(&animation_text.to_lowercase()).map_err(|_| {
            SettingsError::InvalidValue {
                key: "animation",
                reason: format!("`{animation_text}` is not one of min, med, max"),
            }
        })?;

        Ok(Self {
            height: s.h.positive("h")?,
            wait_ms: s.wait.parse("wait")?,
            step: s.step.positive("step")?,
            runs: s.runs.positive("runs")?,
            dots: s.dots.positive("dots")?,
            animation,
        })
    }
}

impl From<&Settings> for StoredSettings {
    fn from(s: &Settings) -> Self {
        Self {
            h: Scalar::Text(s.height.to_string()),
            wait: Scalar::Text(s.wait_ms.to_string()),
            step: Scalar::Text(s.step.to_string()),
            runs: Scalar::Text(s.runs.to_string()),
            dots: Scalar::Text(s.dots.to_string()),
            animation: Scalar::Text(s.animation.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn parses_string_valued_file() {
        let text = r#"{"h": "700", "wait": "120", "step": "1", "runs": "100", "dots": "5000", "animation": "max"}"#;
        let s = Settings::parse(text).unwrap();
        assert_eq!(s.height, 700);
        assert_eq!(s.wait_ms, 120);
        assert_eq!(s.runs, 100);
        assert_eq!(s.dots, 5000);
        assert_eq!(s.animation, AnimationLevel::Max);
    }

    #[test]
    fn parses_number_valued_file() {
        let text = r#"{"h": 500, "wait": 0, "step": 2, "runs": 3, "dots": 40, "animation": "MIN"}"#;
        let s = Settings::parse(text).unwrap();
        assert_eq!(s.height, 500);
        assert_eq!(s.wait_ms, 0);
        assert_eq!(s.step, 2);
        assert_eq!(s.animation, AnimationLevel::Min);
    }

    #[test]
    fn rejects_zero_runs_and_unknown_animation() {
        let zero = r#"{"h": 500, "wait": 0, "step": 2, "runs": "0", "dots": 40, "animation": "min"}"#;
        assert!(matches!(
            Settings::parse(zero),
            Err(SettingsError::InvalidValue { key: "runs", .. })
        ));

        let loud = r#"{"h": 500, "wait": 0, "step": 2, "runs": 1, "dots": 40, "animation": "loud"}"#;
        assert!(matches!(
            Settings::parse(loud),
            Err(SettingsError::InvalidValue {
                key: "animation",
                ..
            })
        ));

        let text = r#"{"h": 500, "wait": 0, "step": 2, "runs": "ten", "dots": 40, "animation": "min"}"#;
        assert!(matches!(
            Settings::parse(text),
            Err(SettingsError::InvalidValue { key: "runs", .. })
        ));
    }

    #[test]
    fn missing_key_is_a_json_error() {
        let text = r#"{"h": 500, "runs": 1}"#;
        assert!(matches!(Settings::parse(text), Err(SettingsError::Json(_))));
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let dir = tempdir().unwrap();
        let s = Settings::load_or_default(dir.path().join(SETTINGS_FILE_NAME)).unwrap();
        assert_eq!(s, Settings::default());
        assert!(Settings::load(dir.path().join(SETTINGS_FILE_NAME)).is_err());
    }

    #[test]
    fn save_then_load_keeps_values_and_writes_strings() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(SETTINGS_FILE_NAME);
        let s = Settings {
            runs: 200,
            dots: 5000,
            animation: AnimationLevel::Min,
            ..Settings::default()
        };
        s.save(&path).unwrap();

        let raw: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(raw["runs"], serde_json::json!("200"));
        assert_eq!(raw["animation"], serde_json::json!("min"));

        assert_eq!(Settings::load(&path).unwrap(), s);
    }

    #[test]
    fn config_takes_runs_dots_and_animation() {
        let s = Settings {
            runs: 7,
            dots: 70,
            animation: AnimationLevel::Max,
            ..Settings::default()
        };
        let c = s.to_config();
        assert_eq!(c.run_count, 7);
        assert_eq!(c.dot_count, 70);
        assert_eq!(c.animation, AnimationLevel::Max);
    }
}
