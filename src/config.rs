use std::{env, time::Duration};

use crate::errors::ConfigError;

const DEFAULT_TIMEOUT_SECS: u64 = 10;

/* Connection settings of the hosted backend. Read from the environment, `.env` is loaded by main with dotenv. */
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub supabase_url: String,
    pub anon_key: String,
    pub timeout: Duration,
}

impl Config {
    pub fn new(supabase_url: &str, anon_key: &str) -> Self {
        Config {
            supabase_url: supabase_url.trim().trim_end_matches('/').to_string(),
            anon_key: anon_key.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        let supabase_url = required("SUPABASE_URL")?;
        if !supabase_url.starts_with("http://") && !supabase_url.starts_with("https://") {
            return Err(ConfigError::Invalid {
                key: "SUPABASE_URL",
                value: supabase_url,
            });
        }
        let anon_key = required("SUPABASE_ANON_KEY")?;

        let mut config = Config::new(&supabase_url, &anon_key);
        if let Ok(raw) = env::var("SHAREFOLIO_HTTP_TIMEOUT_SECS") {
            let secs: u64 = raw.trim().parse().map_err(|_| ConfigError::Invalid {
                key: "SHAREFOLIO_HTTP_TIMEOUT_SECS",
                value: raw.clone(),
            })?;
            config.timeout = Duration::from_secs(secs);
        }
        Ok(config)
    }
}

fn required(key: &'static str) -> Result<String, ConfigError> {
    env::var(key)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .ok_or(ConfigError::Missing(key))
}

#[cfg(test)]
mod tests {
    use serial_test::serial;

    use super::*;

    fn clear() {
        env::remove_var("SUPABASE_URL");
        env::remove_var("SUPABASE_ANON_KEY");
        env::remove_var("SHAREFOLIO_HTTP_TIMEOUT_SECS");
    }

    #[test]
    #[serial]
    fn test_from_env() {
        clear();
        env::set_var("SUPABASE_URL", "https://project.supabase.co/");
        env::set_var("SUPABASE_ANON_KEY", "anon");

        let config = Config::from_env().unwrap();
        assert_eq!(config.supabase_url, "https://project.supabase.co");
        assert_eq!(config.anon_key, "anon");
        assert_eq!(config.timeout, Duration::from_secs(10));
        clear();
    }

    #[test]
    #[serial]
    fn test_missing_key() {
        clear();
        env::set_var("SUPABASE_URL", "https://project.supabase.co");
        assert_eq!(
            Config::from_env(),
            Err(ConfigError::Missing("SUPABASE_ANON_KEY"))
        );
        clear();
    }

    #[test]
    #[serial]
    fn test_invalid_values() {
        clear();
        env::set_var("SUPABASE_URL", "project.supabase.co");
        env::set_var("SUPABASE_ANON_KEY", "anon");
        assert!(matches!(
            Config::from_env(),
            Err(ConfigError::Invalid { key: "SUPABASE_URL", .. })
        ));

        env::set_var("SUPABASE_URL", "https://project.supabase.co");
        env::set_var("SHAREFOLIO_HTTP_TIMEOUT_SECS", "soon");
        assert!(matches!(
            Config::from_env(),
            Err(ConfigError::Invalid {
                key: "SHAREFOLIO_HTTP_TIMEOUT_SECS",
                ..
            })
        ));

        env::set_var("SHAREFOLIO_HTTP_TIMEOUT_SECS", "3");
        assert_eq!(Config::from_env().unwrap().timeout, Duration::from_secs(3));
        clear();
    }
}
