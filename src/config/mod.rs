// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod loader;
mod registry;


pub use loader::{load_config, load_registry, Config};
pub use registry::{default_registry, get_preprocessors, PreprocessorList, PreprocessorRegistry};
