use crate::app::Demo;
use crate::utils::error::{CollectionsError, Result};
use crate::utils::validation::{validate_non_empty_list, validate_unique, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub run: RunConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RunConfig {
    pub demos: Option<Vec<Demo>>,
    pub wait_for_input: Option<bool>,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        tracing::debug!("Loading run configuration from {}", path.as_ref().display());
        let content = std::fs::read_to_string(&path).map_err(|source| {
            CollectionsError::ConfigReadError {
                path: path.as_ref().display().to_string(),
                source,
            }
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;
        Ok(toml::from_str(&processed_content)?)
    }

    /// Replaces `${VAR}` with the environment value; unknown variables are left as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| CollectionsError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        if let Some(demos) = &self.run.demos {
            validate_non_empty_list("run.demos", demos)?;
            validate_unique("run.demos", demos)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_run_section() {
        let config = TomlConfig::from_toml_str(
            r#"
[run]
demos = ["generic-queue", "sorted-set"]
wait_for_input = false
"#,
        )
        .unwrap();

        assert_eq!(
            config.run.demos,
            Some(vec![Demo::GenericQueue, Demo::SortedSet])
        );
        assert_eq!(config.run.wait_for_input, Some(false));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_missing_run_section_is_empty() {
        let config = TomlConfig::from_toml_str("").unwrap();
        assert!(config.run.demos.is_none());
        assert!(config.run.wait_for_input.is_none());
    }

    #[test]
    fn test_unknown_demo_is_a_parse_error() {
        let err = TomlConfig::from_toml_str("[run]\ndemos = [\"linked-list\"]\n").unwrap_err();
        assert!(matches!(err, CollectionsError::ConfigParseError(_)));
    }

    #[test]
    fn test_duplicate_and_empty_demos_fail_validation() {
        let config =
            TomlConfig::from_toml_str("[run]\ndemos = [\"dictionary\", \"dictionary\"]\n")
                .unwrap();
        assert!(config.validate().is_err());

        let config = TomlConfig::from_toml_str("[run]\ndemos = []\n").unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_unset_variable_is_left_in_place() {
        let substituted =
            TomlConfig::substitute_env_vars("x = \"${GENERIC_COLLECTIONS_SURELY_UNSET}\"").unwrap();
        assert_eq!(substituted, "x = \"${GENERIC_COLLECTIONS_SURELY_UNSET}\"");
    }
}
