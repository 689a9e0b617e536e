use crate::core::FormValues;
use crate::inference::{InferenceOutcome, invoke, render_failure, render_prediction};
use crate::pipeline::SharedPipeline;
use crate::ui::cli::drivers::{PromptDriver, is_cancellation};
use crate::ui::cli::form::prompt_form;
use anyhow::Result;
use chrono::{Local, NaiveDate};
use std::io::Write;
use tracing::info;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    pub succeeded: usize,
    pub failed: usize,
}

/// Form loop over one loaded pipeline: ask, predict, render, repeat.
///
/// A failed prediction is shown and counted; it never ends the session.
pub struct Session<D: PromptDriver> {
    pipeline: SharedPipeline,
    driver: D,
}

impl<D: PromptDriver> Session<D> {
    pub fn new(pipeline: SharedPipeline, driver: D) -> Self {
        Self { pipeline, driver }
    }

    pub fn driver(&self) -> &D {
        &self.driver
    }

    pub fn submit(&self, values: &FormValues) -> InferenceOutcome {
        invoke(self.pipeline.as_ref(), values)
    }

    pub fn run<W: Write>(&self, out: &mut W) -> Result<SessionSummary> {
        let mut summary = SessionSummary::default();
        loop {
            match self.round(out, &mut summary) {
                Ok(true) => {}
                Ok(false) => break,
                Err(err) if is_cancellation(&err) => {
                    info!("form cancelled");
                    break;
                }
                Err(err) => return Err(err),
            }
        }
        info!(
            succeeded = summary.succeeded,
            failed = summary.failed,
            "session finished"
        );
        Ok(summary)
    }

    /// One submission. Returns whether the user wants another.
    fn round<W: Write>(&self, out: &mut W, summary: &mut SessionSummary) -> Result<bool> {
        let values = prompt_form(&self.driver, out)?;

        match self.submit(&values) {
            Ok(prediction) => {
                summary.succeeded += 1;
                write!(out, "\n{}\n", render_prediction(&prediction, tomorrow()))?;
            }
            Err(err) => {
                summary.failed += 1;
                write!(out, "\n{}\n", render_failure(&err))?;
            }
        }
        out.flush()?;

        self.driver
            .ask_bool("Make another forecast?", "↵ to continue, n to quit", true)
    }
}

pub fn tomorrow() -> NaiveDate {
    let today = Local::now().date_naive();
    today.succ_opt().unwrap_or(today)
}
