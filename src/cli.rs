use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Will it rain tomorrow? Ask a trained pipeline.
#[derive(Parser, Debug)]
#[command(name = "rain-tomorrow")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the serialized pipeline artifact
    #[arg(long, short = 'a', global = true, env = "RAIN_TOMORROW_ARTIFACT")]
    pub artifact: Option<PathBuf>,

    /// Optional JSON config file
    #[arg(long, short = 'c', global = true)]
    pub config: Option<PathBuf>,

    /// Defaults to `form`
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Fill in today's conditions interactively
    Form,

    /// Predict once from a JSON file of field values
    Predict(PredictArgs),

    /// Print the JSON Schema of the artifact format
    ArtifactSchema,
}

#[derive(Args, Debug, Clone)]
pub struct PredictArgs {
    /// JSON object of field name to value; missing fields use form defaults
    #[arg(long, short = 'i')]
    pub input: PathBuf,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    pub fn subcommand(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Form)
    }
}
