use anyhow::Result;
use generic_collections::utils::validation::Validate;
use generic_collections::{CollectionsError, Demo, RunPlan, TomlConfig};
use tempfile::TempDir;

#[test]
fn test_load_run_config_from_file() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config_path = temp_dir.path().join("run.toml");
    std::fs::write(
        &config_path,
        r#"
[run]
demos = ["simple-box-unbox", "generic-queue"]
wait_for_input = false
"#,
    )?;

    let config = TomlConfig::from_file(&config_path)?;
    config.validate()?;

    let plan = RunPlan::resolve(false, &[], Some(&config), false);
    assert_eq!(plan.demos, vec![Demo::SimpleBoxUnbox, Demo::GenericQueue]);
    assert!(!plan.wait_for_input);
    Ok(())
}

#[test]
fn test_environment_substitution() -> Result<()> {
    std::env::set_var("GENERIC_COLLECTIONS_TEST_WAIT", "false");

    let config = TomlConfig::from_toml_str(
        r#"
[run]
wait_for_input = ${GENERIC_COLLECTIONS_TEST_WAIT}
"#,
    )?;
    assert_eq!(config.run.wait_for_input, Some(false));
    Ok(())
}

#[test]
fn test_missing_file_is_config_error() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("absent.toml");

    let err = TomlConfig::from_file(&missing).unwrap_err();
    assert!(matches!(err, CollectionsError::ConfigReadError { .. }));
    assert!(err.is_config_error());
    assert_eq!(err.exit_code(), 1);
    assert_eq!(
        err.recovery_suggestion(),
        "Check that the --config path exists and is readable"
    );
}

#[test]
fn test_invalid_toml_is_config_error() {
    let err = TomlConfig::from_toml_str("[run\ndemos = ").unwrap_err();
    assert!(err.is_config_error());
    assert_eq!(
        err.user_friendly_message(),
        "The configuration file is not valid TOML"
    );
}
