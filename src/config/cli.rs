use crate::adapters::report::ReportFormat;
use crate::config::toml_config::TomlConfig;
use crate::config::RunConfig;
use crate::utils::error::Result;
use crate::utils::validation::{validate_file_extension, validate_path, Validate};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "game-matrix")]
#[command(about = "Solve two-player zero-sum matrix games")]
pub struct CliConfig {
    /// Payoff matrix file (.json or .csv)
    #[arg(short, long)]
    pub input: String,

    /// Path to TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Write the report here instead of stdout
    #[arg(short, long)]
    pub output: Option<String>,

    /// Report format (overrides the config file)
    #[arg(long, value_enum)]
    pub format: Option<ReportFormat>,

    /// Pretty-print JSON reports
    #[arg(long)]
    pub pretty: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long)]
    pub json_logs: bool,
}

impl CliConfig {
    /// CLI flags win over the config file.
    pub fn into_run_config(self, file: Option<TomlConfig>) -> RunConfig {
        let file = file.unwrap_or_default();
        RunConfig {
            input: self.input,
            output: self.output.or(file.output.path),
            format: self.format.unwrap_or(file.output.format),
            pretty: self.pretty || file.output.pretty,
            solver: file.solver,
        }
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("input", &self.input)?;
        validate_file_extension("input", &self.input, &["json", "csv"])?;
        if let Some(output) = &self.output {
            validate_path("output", output)?;
        }
        if let Some(config) = &self.config {
            validate_path("config", config)?;
        }
        Ok(())
    }
}
