// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::config::PreprocessorRegistry;
use crate::errors::ConfigError;
use crate::observability::messages::{registry::ConfigLoaded, StructuredLog};

/// Preprocessor configuration, typically loaded from a YAML file.
///
/// # Fields
/// * `defaults` - Names of the default preprocessors, in the order they run.
///   When omitted the built-in defaults apply; an explicit empty list disables
///   all defaults.
///
/// # Example
/// ```yaml
/// defaults:
///   - randstr
/// ```
#[derive(Debug, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub defaults: Option<Vec<String>>,
}

/// Load a config from a YAML file
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
    let path = path.as_ref();

    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let cfg: Config = serde_yaml::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    ConfigLoaded {
        path: &path.display().to_string(),
        default_count: cfg.defaults.as_ref().map(|d| d.len()),
    }
    .log();

    Ok(cfg)
}

/// Load a config from a YAML file and build the registry it describes
pub fn load_registry<P: AsRef<Path>>(path: P) -> Result<PreprocessorRegistry, ConfigError> {
    let cfg = load_config(path)?;
    Ok(PreprocessorRegistry::from_config(&cfg)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::RegistryError;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(yaml: &str) -> NamedTempFile {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(yaml.as_bytes()).unwrap();
        temp_file.flush().unwrap();
        temp_file
    }

    #[test]
    fn parse_basic_config() {
        let yaml = r#"
defaults:
  - randstr
"#;

        let cfg: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(cfg.defaults, Some(vec!["randstr".to_string()]));
    }

    #[test]
    fn parse_config_without_defaults() {
        let cfg: Config = serde_yaml::from_str("{}").unwrap();
        assert_eq!(cfg, Config::default());
        assert!(cfg.defaults.is_none());
    }

    #[test]
    fn parse_config_with_empty_defaults() {
        let cfg: Config = serde_yaml::from_str("defaults: []").unwrap();
        assert_eq!(cfg.defaults, Some(vec![]));
    }

    #[test]
    fn parse_config_rejects_unknown_fields() {
        let result: Result<Config, _> = serde_yaml::from_str("preprocessors: [randstr]");
        assert!(result.is_err());
    }

    #[test]
    fn test_load_config_from_file() {
        let temp_file = write_config("defaults:\n  - randstr\n");
        let cfg = load_config(temp_file.path()).unwrap();
        assert_eq!(cfg.defaults, Some(vec!["randstr".to_string()]));
    }

    #[test]
    fn test_load_config_missing_file() {
        let result = load_config("/nonexistent/preprocessors.yaml");
        match result {
            Err(ConfigError::Io { path, .. }) => {
                assert_eq!(path, Path::new("/nonexistent/preprocessors.yaml"));
            }
            other => panic!("Expected Io error, got {:?}", other),
        }
    }

    #[test]
    fn test_load_config_invalid_yaml() {
        let temp_file = write_config("defaults: [randstr\n");
        let result = load_config(temp_file.path());
        assert!(matches!(result, Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn test_load_registry_unknown_preprocessor() {
        let temp_file = write_config("defaults:\n  - randstr\n  - lorem_ipsum\n");
        let result = load_registry(temp_file.path());
        match result {
            Err(ConfigError::Registry(RegistryError::UnknownImplementation(name))) => {
                assert_eq!(name, "lorem_ipsum");
            }
            Err(other) => panic!("Expected unknown implementation error, got {}", other),
            Ok(_) => panic!("Expected unknown implementation error"),
        }
    }

    #[test]
    fn test_load_registry_defaults_to_builtin() {
        let temp_file = write_config("{}\n");
        let registry = load_registry(temp_file.path()).unwrap();
        assert_eq!(registry.names(), vec!["randstr"]);
    }
}
