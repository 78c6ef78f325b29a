use crate::ui::cli::drivers::PromptDriver;
use anyhow::{Result, anyhow};
use std::cell::RefCell;
use std::collections::VecDeque;

/// Replays canned answers in order. An empty answer means "take the default".
pub struct ScriptedDriver {
    answers: RefCell<VecDeque<String>>,
    asked: RefCell<Vec<String>>,
}

impl ScriptedDriver {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: RefCell::new(answers.into_iter().map(Into::into).collect()),
            asked: RefCell::new(vec![]),
        }
    }

    pub fn asked(&self) -> Vec<String> {
        self.asked.borrow().clone()
    }

    fn next(&self, title: &str) -> Result<String> {
        self.asked.borrow_mut().push(title.to_string());
        self.answers
            .borrow_mut()
            .pop_front()
            .ok_or_else(|| anyhow!("no scripted answer for '{title}'"))
    }
}

impl PromptDriver for ScriptedDriver {
    fn ask_select(&self, title: &str, _help: Option<&str>, options: &[String]) -> Result<usize> {
        let a = self.next(title)?;
        let idx: usize = if a.is_empty() { 0 } else { a.parse()? };
        if idx >= options.len() {
            return Err(anyhow!("option {idx} out of range for '{title}'"));
        }
        Ok(idx)
    }

    fn ask_bool(&self, title: &str, _help: &str, default: bool) -> Result<bool> {
        let a = self.next(title)?;
        Ok(if a.is_empty() { default } else { a == "y" })
    }

    fn ask_string(&self, title: &str, _help: &str, default: &str) -> Result<String> {
        let a = self.next(title)?;
        Ok(if a.is_empty() { default.to_string() } else { a })
    }

    fn ask_u64(
        &self,
        title: &str,
        _help: &str,
        default: u64,
        _min: Option<u64>,
        _max: Option<u64>,
    ) -> Result<u64> {
        let a = self.next(title)?;
        if a.is_empty() {
            Ok(default)
        } else {
            Ok(a.parse()?)
        }
    }

    fn ask_f64(
        &self,
        title: &str,
        _help: &str,
        default: f64,
        _min: Option<f64>,
        _max: Option<f64>,
    ) -> Result<f64> {
        let a = self.next(title)?;
        if a.is_empty() {
            Ok(default)
        } else {
            Ok(a.parse()?)
        }
    }
}
