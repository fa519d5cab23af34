use crate::ui::cli::drivers::PromptDriver;
use crate::ui::cli::drivers::inquire_driver::out_of_range;
use anyhow::{Context, Result, anyhow};
use std::collections::VecDeque;
use std::sync::Mutex;

/// Answers prompts from a fixed script, in order.
pub struct ScriptedDriver {
    answers: Mutex<VecDeque<String>>,
}

impl ScriptedDriver {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: Mutex::new(answers.into_iter().map(Into::into).collect()),
        }
    }

    fn next(&self, title: &str) -> Result<String> {
        self.answers
            .lock()
            .map_err(|_| anyhow!("script lock poisoned"))?
            .pop_front()
            .ok_or_else(|| anyhow!("no scripted answer for {title:?}"))
    }

    pub fn remaining(&self) -> usize {
        self.answers.lock().map(|q| q.len()).unwrap_or(0)
    }
}

impl PromptDriver for ScriptedDriver {
    fn ask_bool(&self, title: &str, _help: &str, _default: bool) -> Result<bool> {
        let a = self.next(title)?;
        Ok(matches!(a.trim().to_lowercase().as_str(), "y" | "yes" | "true"))
    }

    fn ask_string(&self, title: &str, _help: &str, _default: &str) -> Result<String> {
        self.next(title)
    }

    fn ask_u64(
        &self,
        title: &str,
        _help: &str,
        _default: u64,
        min: Option<u64>,
        max: Option<u64>,
    ) -> Result<u64> {
        let n: u64 = self
            .next(title)?
            .trim()
            .parse()
            .with_context(|| format!("invalid integer for {title}"))?;
        match out_of_range(n, min, max) {
            Some(msg) => Err(anyhow!("{title}: {msg}")),
            None => Ok(n),
        }
    }
}
