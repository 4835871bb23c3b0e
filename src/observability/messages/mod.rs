// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Centralized message types for structured logging.
//!
//! Each message type implements `Display` for the human-readable line and
//! [`StructuredLog`] to emit it with its fields attached as tracing fields.
//!
//! * `preprocessor` - Token scanning and replacement events
//! * `registry` - Configuration loading and default list construction

use tracing::Span;

pub mod preprocessor;
pub mod registry;

/// Emit a message as a tracing event, or open a span carrying its fields.
pub trait StructuredLog {
    /// Log the message at its designated level.
    fn log(&self);

    /// Create a span carrying the message's fields.
    fn span(&self, name: &str) -> Span;
}
