use thiserror::Error;

#[derive(Error, Debug)]
pub enum CollectionsError {
    #[error("Unable to cast value of type '{found}' to type '{expected}'.")]
    InvalidCast {
        expected: &'static str,
        found: &'static str,
    },

    #[error("{container} empty.")]
    EmptyContainer { container: &'static str },

    #[error("An item with the same key has already been added. Key: {key}")]
    DuplicateKey { key: String },

    #[error("The given key '{key}' was not present in the dictionary.")]
    KeyNotFound { key: String },

    #[error("Index {index} was out of range. Must be less than the size of the collection ({len}).")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Failed to parse configuration: {0}")]
    ConfigParseError(#[from] toml::de::Error),

    #[error("Cannot read configuration file {path}: {source}")]
    ConfigReadError {
        path: String,
        source: std::io::Error,
    },
}

impl CollectionsError {
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            Self::ConfigError { .. }
                | Self::InvalidConfigValueError { .. }
                | Self::ConfigParseError(_)
                | Self::ConfigReadError { .. }
        )
    }

    /// Process exit code: 1 for configuration problems, 2 for anything else.
    pub fn exit_code(&self) -> i32 {
        if self.is_config_error() {
            1
        } else {
            2
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::IoError(e) => format!("Could not write demo output: {}", e),
            Self::ConfigParseError(_) => "The configuration file is not valid TOML".to_string(),
            Self::ConfigReadError { path, .. } => {
                format!("Could not read configuration file {}", path)
            }
            Self::InvalidConfigValueError { field, .. } => {
                format!("Invalid setting '{}'", field)
            }
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::IoError(_) => "Check that standard output is writable",
            Self::ConfigParseError(_) => {
                "Expected a [run] table with `demos` and `wait_for_input` keys"
            }
            Self::ConfigReadError { .. } => "Check that the --config path exists and is readable",
            Self::ConfigError { .. } | Self::InvalidConfigValueError { .. } => {
                "Run with --help to list the accepted demo names and flags"
            }
            _ => "This failure is part of a demonstration and needs no action",
        }
    }
}

pub type Result<T> = std::result::Result<T, CollectionsError>;
