use crate::core::{
    FEATURE_SCHEMA, FieldDefault, FieldKind, FieldSpec, FieldValue, FormColumn, FormValues,
};
use crate::ui::cli::drivers::PromptDriver;
use anyhow::{Result, bail};
use std::io::Write;

const BOLD: &str = "\x1b[1m";
const DIM_ITALIC: &str = "\x1b[2m\x1b[3m";
const RESET: &str = "\x1b[0m";

fn column_heading(column: FormColumn) -> &'static str {
    match column {
        FormColumn::Left => "Temperature, rain and wind (1/2)",
        FormColumn::Right => "Humidity, pressure, cloud and rain today (2/2)",
    }
}

/// Walks the feature schema and asks for every field, in schema order.
pub fn prompt_form<D: PromptDriver, W: Write>(driver: &D, out: &mut W) -> Result<FormValues> {
    writeln!(out, "{BOLD}Enter today's weather conditions{RESET}")?;

    let mut column = None;
    let mut values = FormValues::new();
    for spec in FEATURE_SCHEMA.iter() {
        if column != Some(spec.column) {
            column = Some(spec.column);
            writeln!(out, "{DIM_ITALIC}{}{RESET}", column_heading(spec.column))?;
        }
        values.insert(spec.name, prompt_field(driver, spec)?);
    }
    Ok(values)
}

fn prompt_field<D: PromptDriver>(driver: &D, spec: &FieldSpec) -> Result<FieldValue> {
    let value = match (spec.kind, spec.default) {
        (FieldKind::Categorical(list), FieldDefault::Text(def)) => {
            FieldValue::Text(driver.ask_select(spec.title, spec.help, &list.options(), def)?)
        }
        (FieldKind::Number { step }, FieldDefault::Number(def)) => {
            let help = format!("{} (step {step})", spec.help);
            FieldValue::Number(driver.ask_f64(spec.title, &help, def)?)
        }
        (FieldKind::Integer { min, max }, FieldDefault::Integer(def)) => {
            FieldValue::Integer(driver.ask_i64(spec.title, spec.help, def, min, max)?)
        }
        _ => bail!("default for {} does not match its kind", spec.name),
    };
    Ok(value)
}
