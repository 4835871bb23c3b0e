// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod ksuid;

pub use ksuid::{generate as generate_ksuid, Ksuid};
