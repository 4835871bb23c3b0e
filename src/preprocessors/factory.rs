// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::sync::Arc;

use super::rand_str::{RandStrPreprocessor, RANDSTR};
use crate::errors::RegistryError;
use crate::traits::Preprocessor;

/// Factory for creating built-in preprocessor instances by name
pub struct PreprocessorFactory;

impl PreprocessorFactory {
    /// Create a preprocessor instance from its configuration name
    ///
    /// - "randstr" -> RandStrPreprocessor
    pub fn create_preprocessor(name: &str) -> Result<Arc<dyn Preprocessor>, RegistryError> {
        match name {
            RANDSTR => Ok(Arc::new(RandStrPreprocessor::new())),
            _ => Err(RegistryError::UnknownImplementation(name.to_string())),
        }
    }

    /// List all available preprocessor implementations
    pub fn list_available_implementations() -> Vec<&'static str> {
        vec![RANDSTR]
    }

    /// Check if an implementation is available
    pub fn is_implementation_available(name: &str) -> bool {
        Self::list_available_implementations().contains(&name)
    }
}
