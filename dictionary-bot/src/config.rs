use std::env;
use std::fs;
use std::path::Path;

use anyhow::Context;
use dictionary::DictionaryConfig;
use tracing::{debug, info};

const CONFIG_FILENAME: &str = "dictionary-bot.toml";

/// Loads the config file (explicit path, else `dictionary-bot.toml` if present, else defaults)
/// and then lets API keys from the environment win over the file.
pub fn load_config(path: Option<&Path>) -> anyhow::Result<DictionaryConfig> {
    let mut config = match path {
        Some(path) => load_config_from_path(path)?,
        None => {
            let default_path = Path::new(CONFIG_FILENAME);
            if default_path.exists() {
                load_config_from_path(default_path)?
            } else {
                debug!("no {CONFIG_FILENAME} found, using defaults");
                DictionaryConfig::default()
            }
        }
    };
    apply_env_overrides(&mut config, |name| env::var(name).ok());
    Ok(config)
}

fn load_config_from_path(path: &Path) -> anyhow::Result<DictionaryConfig> {
    info!("Loading configuration from: {}", path.display());
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

fn apply_env_overrides(config: &mut DictionaryConfig, var: impl Fn(&str) -> Option<String>) {
    if let Some(key) = var("MERRIAM_WEBSTER_API_KEY") {
        config.merriam_webster.api_key = Some(key);
    }
    if let Some(key) = var("PEARSON_API_KEY") {
        config.pearson.api_key = Some(key);
    }
    if let Some(key) = var("BIGHUGELABS_API_KEY") {
        config.thesaurus.api_key = Some(key);
    }
}
