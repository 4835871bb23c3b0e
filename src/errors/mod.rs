// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Error types for the edges of the crate.
//!
//! Preprocessing itself is total and never produces an error. Failures only
//! arise while loading configuration or resolving preprocessor names.

mod config;
mod registry;

pub use config::ConfigError;
pub use registry::RegistryError;
