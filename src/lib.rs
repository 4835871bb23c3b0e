// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod config;         // config + registry
pub mod engine;         // applies preprocessor lists
pub mod errors;         // error handling
pub mod observability;
pub mod preprocessors;  // built-in preprocessors
pub mod traits;         // unified abstractions
pub mod utils;

pub use crate::config::{get_preprocessors, PreprocessorList, PreprocessorRegistry};
pub use engine::apply_preprocessors;
pub use traits::Preprocessor;
