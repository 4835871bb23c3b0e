// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use once_cell::sync::Lazy;
use std::collections::HashSet;
use std::sync::Arc;

use crate::config::Config;
use crate::errors::RegistryError;
use crate::observability::messages::{registry::*, StructuredLog};
use crate::preprocessors::{PreprocessorFactory, RandStrPreprocessor};
use crate::traits::Preprocessor;

/// An ordered, immutable list of shared preprocessors.
///
/// Cloning the list clones the `Arc`, so two handles to the same list can be
/// compared with [`Arc::ptr_eq`].
pub type PreprocessorList = Arc<[Arc<dyn Preprocessor>]>;

static DEFAULT_REGISTRY: Lazy<PreprocessorRegistry> = Lazy::new(PreprocessorRegistry::builtin);

/// Holds the default preprocessor list and composes caller-supplied
/// preprocessors with it.
///
/// The default list is fixed when the registry is built. Composition always
/// allocates a new list, so concurrent callers never observe a list that
/// another caller has extended.
pub struct PreprocessorRegistry {
    defaults: PreprocessorList,
}

impl PreprocessorRegistry {
    pub fn new(defaults: Vec<Arc<dyn Preprocessor>>) -> Self {
        let names: Vec<&'static str> = defaults.iter().map(|p| p.name()).collect();
        DefaultPreprocessorsInitialized { names: &names }.log();

        Self {
            defaults: defaults.into(),
        }
    }

    /// Registry whose defaults are the built-in preprocessors.
    pub fn builtin() -> Self {
        Self::new(vec![Arc::new(RandStrPreprocessor::new())])
    }

    /// Build the default list from preprocessor names, in the given order.
    pub fn from_names<S: AsRef<str>>(names: &[S]) -> Result<Self, RegistryError> {
        let mut seen = HashSet::new();
        let mut defaults = Vec::with_capacity(names.len());

        for name in names {
            let name = name.as_ref();
            if !seen.insert(name) {
                return Err(RegistryError::DuplicatePreprocessor(name.to_string()));
            }
            let preprocessor = PreprocessorFactory::create_preprocessor(name).map_err(|e| {
                PreprocessorInstantiationFailed { name, error: &e }.log();
                e
            })?;
            defaults.push(preprocessor);
        }

        Ok(Self::new(defaults))
    }

    /// Build from configuration, falling back to the built-in defaults when
    /// the configuration does not name any.
    pub fn from_config(cfg: &Config) -> Result<Self, RegistryError> {
        match &cfg.defaults {
            Some(names) => Self::from_names(names),
            None => Ok(Self::builtin()),
        }
    }

    pub fn defaults(&self) -> &PreprocessorList {
        &self.defaults
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.defaults.iter().map(|p| p.name()).collect()
    }

    /// Ordered preprocessors for one render.
    ///
    /// With a caller-supplied preprocessor, returns a new list holding it
    /// first followed by the defaults. Without one, returns the shared
    /// default list itself.
    pub fn get_preprocessors(&self, preprocessor: Option<Arc<dyn Preprocessor>>) -> PreprocessorList {
        match preprocessor {
            Some(preprocessor) => {
                let mut list = Vec::with_capacity(self.defaults.len() + 1);
                list.push(preprocessor);
                list.extend(self.defaults.iter().cloned());
                list.into()
            }
            None => Arc::clone(&self.defaults),
        }
    }
}

/// Process-wide registry holding the built-in defaults, initialized on first use.
pub fn default_registry() -> &'static PreprocessorRegistry {
    &DEFAULT_REGISTRY
}

/// [`PreprocessorRegistry::get_preprocessors`] against the process-wide registry.
pub fn get_preprocessors(preprocessor: Option<Arc<dyn Preprocessor>>) -> PreprocessorList {
    default_registry().get_preprocessors(preprocessor)
}
