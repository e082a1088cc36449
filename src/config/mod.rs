#[cfg(feature = "cli")]
pub mod cli;
pub mod solver_config;
pub mod toml_config;

use crate::adapters::report::ReportFormat;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};
use solver_config::SolverConfig;

/// Settings for one engine run after CLI flags and the config file are merged.
#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    pub input: String,
    pub output: Option<String>,
    pub format: ReportFormat,
    pub pretty: bool,
    pub solver: SolverConfig,
}

impl RunConfig {
    pub fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            output: None,
            format: ReportFormat::default(),
            pretty: false,
            solver: SolverConfig::default(),
        }
    }
}

impl Validate for RunConfig {
    fn validate(&self) -> Result<()> {
        validate_path("input", &self.input)?;
        if let Some(output) = &self.output {
            validate_path("output", output)?;
        }
        self.solver.validate()
    }
}
