use super::toml_config::TomlConfig;
use crate::app::Demo;
use crate::core::runner::RunPlan;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_file_extension, validate_path, validate_unique, Validate,
};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "generic-collections")]
#[command(about = "Shows the difference between untyped and generic collections")]
pub struct CliConfig {
    /// Demos to run, in order (comma separated)
    #[arg(long, value_enum, value_delimiter = ',')]
    pub demo: Vec<Demo>,

    /// Run every demo
    #[arg(long, conflicts_with = "demo")]
    pub all: bool,

    /// Path to a TOML run configuration
    #[arg(short, long)]
    pub config: Option<String>,

    /// Exit without waiting for a line on standard input
    #[arg(long)]
    pub no_wait: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    pub fn run_plan(&self, file: Option<&TomlConfig>) -> RunPlan {
        RunPlan::resolve(self.all, &self.demo, file, self.no_wait)
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.config {
            validate_path("config", path)?;
            validate_file_extension("config", path, &["toml"])?;
        }
        validate_unique("demo", &self.demo)
    }
}
