// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Observability module for structured logging and tracing.
//!
//! This module provides centralized message types for all diagnostic and operational
//! logging in the crate. Message types follow a struct-based pattern with a `Display`
//! implementation so that log text lives in one place instead of being scattered
//! through the code as format strings.
//!
//! # Architecture
//!
//! Messages are organized by subsystem:
//! * `messages::preprocessor` - Token scanning and replacement events
//! * `messages::registry` - Configuration loading and default list construction
//!
//! # Usage
//!
//! ```rust
//! use template_preprocessors::observability::messages::preprocessor::TokenSkipped;
//! use template_preprocessors::observability::messages::StructuredLog;
//!
//! let msg = TokenSkipped {
//!     preprocessor: "randstr",
//!     token: "{{name}}",
//!     reason: "unrecognized identifier",
//! };
//!
//! msg.log();
//! ```
//!
//! Subscribers are only installed by the binary; the library emits events and
//! leaves collection to the embedding application.

pub mod messages;
