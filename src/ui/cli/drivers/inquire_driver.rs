use crate::ui::cli::drivers::PromptDriver;
use anyhow::Result;
use inquire::{Confirm, CustomType, Select, validator::Validation};

pub struct InquireDriver;

impl PromptDriver for InquireDriver {
    fn ask_bool(&self, title: &str, help: &str, default: bool) -> Result<bool> {
        Ok(Confirm::new(title)
            .with_default(default)
            .with_help_message(help)
            .prompt()?)
    }

    fn ask_select(
        &self,
        title: &str,
        help: &str,
        options: &[&'static str],
        default: &str,
    ) -> Result<String> {
        let cursor = options.iter().position(|o| *o == default).unwrap_or(0);
        let picked = Select::new(title, options.to_vec())
            .with_starting_cursor(cursor)
            .with_help_message(help)
            .prompt()?;
        Ok(picked.to_string())
    }

    fn ask_f64(&self, title: &str, help: &str, default: f64) -> Result<f64> {
        Ok(CustomType::<f64>::new(title)
            .with_default(default)
            .with_help_message(help)
            .with_error_message("Please type a number")
            .prompt()?)
    }

    fn ask_i64(&self, title: &str, help: &str, default: i64, min: i64, max: i64) -> Result<i64> {
        Ok(CustomType::<i64>::new(title)
            .with_default(default)
            .with_help_message(help)
            .with_validator(move |x: &i64| {
                if *x >= min && *x <= max {
                    Ok(Validation::Valid)
                } else {
                    Ok(Validation::Invalid(
                        format!("Must be between {min} and {max}").into(),
                    ))
                }
            })
            .prompt()?)
    }
}
