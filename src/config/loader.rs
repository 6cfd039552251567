//! Configuration loading from disk and environment.

use std::fs;
use std::path::Path;

use crate::config::schema::GatewayConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Environment variable naming an optional TOML config file.
pub const CONFIG_PATH_VAR: &str = "GATEWAY_CONFIG";

/// Error type for configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Validation(Vec<ValidationError>),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::Parse(e) => write!(f, "Parse error: {}", e),
            ConfigError::Validation(errors) => {
                write!(f, "Validation failed: ")?;
                for (i, err) in errors.iter().enumerate() {
                    if i > 0 { write!(f, ", ")?; }
                    write!(f, "{}", err)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Load the file named by `GATEWAY_CONFIG` (if any), apply environment
/// overrides, and validate.
///
/// `lookup` is the environment; pass `|k| std::env::var(k).ok()` in production.
pub fn load_config<F>(lookup: F) -> Result<GatewayConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

    let mut config = match non_empty(CONFIG_PATH_VAR) {
        Some(path) => parse_file(Path::new(&path))?,
        None => GatewayConfig::default(),
    };

    apply_env(&mut config, non_empty);
    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

fn parse_file(path: &Path) -> Result<GatewayConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(ConfigError::Io)?;
    toml::from_str(&content).map_err(ConfigError::Parse)
}

/// Overlay environment values.
fn apply_env<F>(config: &mut GatewayConfig, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(secret) = first_set(&lookup, &["SHARED_SECRET", "AUTH_API_KEY"]) {
        config.auth.shared_secret = Some(secret);
    }
    if let Some(keys) = first_set(&lookup, &["UPSTREAM_API_KEYS", "GOOGLE_API_KEYS"]) {
        config.auth.api_keys = Some(keys);
    }
    if let Some(addr) = lookup("GATEWAY_BIND_ADDRESS") {
        config.listener.bind_address = addr;
    }
    if let Some(url) = lookup("GATEWAY_UPSTREAM_URL") {
        config.upstream.base_url = url;
    }
}

/// First variable in `names` that is set. Later names are legacy aliases.
fn first_set<F>(lookup: &F, names: &[&str]) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    names.iter().find_map(|&name| lookup(name))
}
