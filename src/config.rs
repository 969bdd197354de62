use std::io::ErrorKind;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::model::keys::ReducerKeys;
use crate::model::schema::RowPolicy;

pub const DEFAULT_CONFIG_PATH: &str = "xtle-core.toml";

/// Top-level core configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub core: CoreConfig,
    #[serde(default)]
    pub keys: ReducerKeys,
    #[serde(default)]
    pub reducer: ReducerConfig,
}

/// Process settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CoreConfig {
    /// Used when `RUST_LOG` is not set.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ReducerConfig {
    #[serde(default)]
    pub row_policy: RowPolicy,
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Parse and validate configuration from TOML text.
pub fn parse(content: &str) -> Result<Config, CoreError> {
    let config: Config = toml::from_str(content)
        .map_err(|e| CoreError::Config(format!("failed to parse config: {}", e)))?;
    config.keys.validate()?;
    Ok(config)
}

/// Where a loaded configuration came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigSource {
    File,
    Defaults,
}

/// Load configuration from a TOML file.
///
/// Falls back to defaults if the file does not exist.
pub fn load(path: &str) -> Result<(Config, ConfigSource), CoreError> {
    let path = Path::new(path);
    let content = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Ok((Config::default(), ConfigSource::Defaults))
        }
        Err(e) => {
            return Err(CoreError::Config(format!(
                "failed to read {}: {}",
                path.display(),
                e
            )))
        }
    };

    Ok((parse(&content)?, ConfigSource::File))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_missing() {
        let (cfg, source) = load("/nonexistent/__xtle_core_test__.toml").unwrap();
        assert_eq!(source, ConfigSource::Defaults);
        assert_eq!(cfg, Config::default());
        assert_eq!(cfg.core.log_level, "info");
        assert_eq!(cfg.reducer.row_policy, RowPolicy::Lenient);
        assert_eq!(cfg.keys, ReducerKeys::default());
    }

    #[test]
    fn test_parse_full() {
        let cfg = parse(
            r#"
            [core]
            log_level = "debug"

            [keys]
            languages = "langs"
            site_languages = "site"

            [reducer]
            row_policy = "strict"
        "#,
        )
        .unwrap();
        assert_eq!(cfg.core.log_level, "debug");
        assert_eq!(cfg.keys.languages, "langs");
        assert_eq!(cfg.keys.site_languages, "site");
        assert_eq!(cfg.reducer.row_policy, RowPolicy::Strict);
    }

    #[test]
    fn test_partial_keys_use_defaults() {
        let cfg = parse("[keys]\nlanguages = \"langs\"\n").unwrap();
        assert_eq!(cfg.keys.languages, "langs");
        assert_eq!(cfg.keys.site_languages, "xtle.languages.site");
    }

    #[test]
    fn test_invalid_config_rejected() {
        assert!(matches!(parse("[keys]\nlanguages = \"\"\n"), Err(CoreError::Config(_))));
        assert!(matches!(
            parse("[reducer]\nrow_policy = \"pad\"\n"),
            Err(CoreError::Config(_))
        ));
        assert!(matches!(parse("not toml ["), Err(CoreError::Config(_))));
    }

    #[test]
    fn test_load_from_file() {
        let dir = std::env::temp_dir().join(format!(
            "__xtle_core_test_config_{}__",
            std::process::id()
        ));
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("xtle-core.toml");
        std::fs::write(&path, "[reducer]\nrow_policy = \"strict\"\n").unwrap();

        let (cfg, source) = load(path.to_str().unwrap()).unwrap();
        assert_eq!(source, ConfigSource::File);
        assert_eq!(cfg.reducer.row_policy, RowPolicy::Strict);

        // A directory exists but cannot be read as a file.
        assert!(matches!(load(dir.to_str().unwrap()), Err(CoreError::Config(_))));

        let _ = std::fs::remove_dir_all(&dir);
    }
}
