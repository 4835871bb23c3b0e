// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use thiserror::Error;

/// Errors raised when resolving preprocessors by name.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// No preprocessor implementation is registered under this name.
    #[error("Unknown preprocessor implementation: '{0}'")]
    UnknownImplementation(String),

    /// The same preprocessor was listed more than once.
    #[error("Duplicate preprocessor: '{0}'")]
    DuplicatePreprocessor(String),
}
