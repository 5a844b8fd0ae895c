use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    Missing(&'static str),
    Invalid { key: &'static str, value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ConfigError::Missing(key) => write!(f, "{key} not set in .env file or environment"),
            ConfigError::Invalid { key, value } => write!(f, "{key} has an invalid value: {value}"),
        }
    }
}

impl std::error::Error for ConfigError {}
