use crate::core::FEATURE_COUNT;
use crate::ui::cli::drivers::PromptDriver;
use anyhow::{Result, bail};
use inquire::InquireError;
use std::cell::{Cell, RefCell};
use std::collections::VecDeque;

#[derive(Debug, Clone, PartialEq)]
pub enum Answer {
    /// Take whatever default the prompt offers.
    Default,
    Bool(bool),
    Select(String),
    Number(f64),
    Integer(i64),
    /// Behave as if the user pressed Esc.
    Cancel,
}

/// Replays a fixed list of answers and counts the prompts it saw.
#[derive(Default)]
pub struct ScriptedDriver {
    answers: RefCell<VecDeque<Answer>>,
    asked: Cell<usize>,
}

impl ScriptedDriver {
    pub fn new<I: IntoIterator<Item = Answer>>(answers: I) -> Self {
        Self {
            answers: RefCell::new(answers.into_iter().collect()),
            asked: Cell::new(0),
        }
    }

    /// `submissions` forms filled with defaults, answering "yes" to another
    /// forecast between them and "no" after the last.
    pub fn accepting_defaults(submissions: usize) -> Self {
        let mut answers = Vec::new();
        for i in 0..submissions {
            answers.extend(std::iter::repeat_n(Answer::Default, FEATURE_COUNT));
            answers.push(Answer::Bool(i + 1 < submissions));
        }
        Self::new(answers)
    }

    pub fn asked(&self) -> usize {
        self.asked.get()
    }

    pub fn remaining(&self) -> usize {
        self.answers.borrow().len()
    }

    fn next(&self, title: &str) -> Result<Answer> {
        self.asked.set(self.asked.get() + 1);
        match self.answers.borrow_mut().pop_front() {
            Some(Answer::Cancel) => Err(InquireError::OperationCanceled.into()),
            Some(a) => Ok(a),
            None => bail!("script exhausted at prompt `{title}`"),
        }
    }
}

impl PromptDriver for ScriptedDriver {
    fn ask_bool(&self, title: &str, _help: &str, default: bool) -> Result<bool> {
        match self.next(title)? {
            Answer::Default => Ok(default),
            Answer::Bool(b) => Ok(b),
            other => bail!("`{title}` wants a yes/no, script has {other:?}"),
        }
    }

    fn ask_select(
        &self,
        title: &str,
        _help: &str,
        options: &[&'static str],
        default: &str,
    ) -> Result<String> {
        match self.next(title)? {
            Answer::Default => Ok(default.to_string()),
            Answer::Select(s) if options.contains(&s.as_str()) => Ok(s),
            other => bail!("`{title}` cannot select {other:?}"),
        }
    }

    fn ask_f64(&self, title: &str, _help: &str, default: f64) -> Result<f64> {
        match self.next(title)? {
            Answer::Default => Ok(default),
            Answer::Number(x) => Ok(x),
            other => bail!("`{title}` wants a number, script has {other:?}"),
        }
    }

    fn ask_i64(&self, title: &str, _help: &str, default: i64, min: i64, max: i64) -> Result<i64> {
        match self.next(title)? {
            Answer::Default => Ok(default),
            Answer::Integer(i) if (min..=max).contains(&i) => Ok(i),
            other => bail!("`{title}` wants an integer in {min}..={max}, script has {other:?}"),
        }
    }
}
