use clap::Parser;
use generic_collections::config::toml_config::TomlConfig;
use generic_collections::utils::{logger, validation::Validate};
use generic_collections::{CliConfig, DemoRunner, Result};
use std::io;

fn main() {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting generic-collections");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = run(&config) {
        tracing::error!("❌ Run failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());

        std::process::exit(e.exit_code());
    }
}

fn run(config: &CliConfig) -> Result<()> {
    config.validate()?;

    let file_config = match &config.config {
        Some(path) => {
            let file_config = TomlConfig::from_file(path)?;
            file_config.validate()?;
            tracing::info!("✅ Loaded run configuration from {}", path);
            Some(file_config)
        }
        None => None,
    };

    let runner = DemoRunner::new(config.run_plan(file_config.as_ref()));
    tracing::debug!("Run plan: {:?}", runner.plan());

    runner.run(&mut io::stdout().lock())?;
    runner.wait_for_input(io::stdin().lock())?;

    Ok(())
}
