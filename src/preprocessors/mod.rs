// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod factory;
pub mod rand_str;

pub use factory::PreprocessorFactory;
pub use rand_str::RandStrPreprocessor;
