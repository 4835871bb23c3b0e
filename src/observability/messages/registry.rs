// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for configuration loading and preprocessor list construction.

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// Preprocessor configuration file loaded.
///
/// # Log Level
/// `info!` - Important operational event
///
/// # Example
/// ```
/// use template_preprocessors::observability::messages::registry::ConfigLoaded;
///
/// let msg = ConfigLoaded {
///     path: "configs/default.yaml",
///     default_count: Some(1),
/// };
///
/// tracing::info!("{}", msg);
/// ```
pub struct ConfigLoaded<'a> {
    pub path: &'a str,
    /// `None` when the file leaves the defaults to the built-in list.
    pub default_count: Option<usize>,
}

impl Display for ConfigLoaded<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        match self.default_count {
            Some(count) => write!(
                f,
                "Loaded preprocessor config '{}': {} default preprocessors",
                self.path, count
            ),
            None => write!(
                f,
                "Loaded preprocessor config '{}': using built-in defaults",
                self.path
            ),
        }
    }
}

impl StructuredLog for ConfigLoaded<'_> {
    fn log(&self) {
        tracing::info!(
            path = self.path,
            default_count = ?self.default_count,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!("config_loaded", span_name = name, path = self.path)
    }
}

/// Default preprocessor list built.
///
/// # Log Level
/// `info!`
pub struct DefaultPreprocessorsInitialized<'a> {
    pub names: &'a [&'a str],
}

impl Display for DefaultPreprocessorsInitialized<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Initialized {} default preprocessors: [{}]",
            self.names.len(),
            self.names.join(", ")
        )
    }
}

impl StructuredLog for DefaultPreprocessorsInitialized<'_> {
    fn log(&self) {
        tracing::info!(
            count = self.names.len(),
            names = self.names.join(", "),
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "default_preprocessors",
            span_name = name,
            count = self.names.len(),
        )
    }
}

/// Preprocessor instantiation failed.
///
/// # Log Level
/// `error!` - Failure requiring attention
pub struct PreprocessorInstantiationFailed<'a> {
    pub name: &'a str,
    pub error: &'a dyn std::error::Error,
}

impl Display for PreprocessorInstantiationFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Failed to instantiate preprocessor '{}': {}",
            self.name, self.error
        )
    }
}

impl StructuredLog for PreprocessorInstantiationFailed<'_> {
    fn log(&self) {
        tracing::error!(name = self.name, error = %self.error, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::error_span!(
            "preprocessor_instantiation_failed",
            span_name = name,
            preprocessor = self.name,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::RegistryError;

    #[test]
    fn test_config_loaded_display() {
        let explicit = ConfigLoaded { path: "a.yaml", default_count: Some(2) };
        assert_eq!(
            explicit.to_string(),
            "Loaded preprocessor config 'a.yaml': 2 default preprocessors"
        );

        let builtin = ConfigLoaded { path: "a.yaml", default_count: None };
        assert_eq!(
            builtin.to_string(),
            "Loaded preprocessor config 'a.yaml': using built-in defaults"
        );
    }

    #[test]
    fn test_defaults_initialized_display() {
        let names = ["randstr"];
        let msg = DefaultPreprocessorsInitialized { names: &names };
        assert_eq!(msg.to_string(), "Initialized 1 default preprocessors: [randstr]");
    }

    #[test]
    fn test_instantiation_failed_display() {
        let error = RegistryError::UnknownImplementation("nope".to_string());
        let msg = PreprocessorInstantiationFailed { name: "nope", error: &error };
        assert_eq!(
            msg.to_string(),
            "Failed to instantiate preprocessor 'nope': Unknown preprocessor implementation: 'nope'"
        );
    }
}
