// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for preprocessor execution events.
//!
//! This module contains message types for logging events related to:
//! * Preprocessing lifecycle (start, completion)
//! * Individual token replacement
//! * Tokens left untouched and why
//! * Preprocessors skipped by their existence pre-check

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// Preprocessing of a buffer started.
///
/// # Log Level
/// `debug!` - Runs once per template render, too chatty for `info!`
///
/// # Example
/// ```
/// use template_preprocessors::observability::messages::preprocessor::PreprocessingStarted;
///
/// let msg = PreprocessingStarted {
///     preprocessor: "randstr",
///     input_size: 1024,
/// };
///
/// tracing::debug!("{}", msg);
/// ```
pub struct PreprocessingStarted<'a> {
    pub preprocessor: &'a str,
    pub input_size: usize,
}

impl Display for PreprocessingStarted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Preprocessor '{}' started: input_size={} bytes",
            self.preprocessor, self.input_size
        )
    }
}

impl StructuredLog for PreprocessingStarted<'_> {
    fn log(&self) {
        tracing::debug!(
            preprocessor = self.preprocessor,
            input_size = self.input_size,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "preprocessing",
            span_name = name,
            preprocessor = self.preprocessor,
            input_size = self.input_size,
        )
    }
}

/// Preprocessing of a buffer completed.
///
/// # Log Level
/// `debug!`
///
/// # Example
/// ```
/// use template_preprocessors::observability::messages::preprocessor::PreprocessingCompleted;
/// use std::time::Duration;
///
/// let msg = PreprocessingCompleted {
///     preprocessor: "randstr",
///     input_size: 64,
///     output_size: 96,
///     replaced_tokens: 2,
///     duration: Duration::from_micros(15),
/// };
///
/// tracing::debug!("{}", msg);
/// ```
pub struct PreprocessingCompleted<'a> {
    pub preprocessor: &'a str,
    pub input_size: usize,
    pub output_size: usize,
    pub replaced_tokens: usize,
    pub duration: std::time::Duration,
}

impl Display for PreprocessingCompleted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Preprocessor '{}' completed: input={} bytes, output={} bytes, replaced_tokens={}, duration={:?}",
            self.preprocessor, self.input_size, self.output_size, self.replaced_tokens, self.duration
        )
    }
}

impl StructuredLog for PreprocessingCompleted<'_> {
    fn log(&self) {
        tracing::debug!(
            preprocessor = self.preprocessor,
            input_size = self.input_size,
            output_size = self.output_size,
            replaced_tokens = self.replaced_tokens,
            duration_us = self.duration.as_micros() as u64,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "preprocessing_completed",
            span_name = name,
            preprocessor = self.preprocessor,
            replaced_tokens = self.replaced_tokens,
            duration = ?self.duration,
        )
    }
}

/// A token was replaced with a generated value.
///
/// # Log Level
/// `debug!`
pub struct TokenReplaced<'a> {
    pub preprocessor: &'a str,
    pub token: &'a str,
    pub replacement: &'a str,
}

impl Display for TokenReplaced<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Preprocessor '{}' replaced token {} with '{}'",
            self.preprocessor, self.token, self.replacement
        )
    }
}

impl StructuredLog for TokenReplaced<'_> {
    fn log(&self) {
        tracing::debug!(
            preprocessor = self.preprocessor,
            token = self.token,
            replacement = self.replacement,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "token_replaced",
            span_name = name,
            preprocessor = self.preprocessor,
            token = self.token,
        )
    }
}

/// A token matched the placeholder grammar but was left untouched.
///
/// # Log Level
/// `trace!` - Expected for every placeholder that belongs to the renderer
pub struct TokenSkipped<'a> {
    pub preprocessor: &'a str,
    pub token: &'a str,
    pub reason: &'a str,
}

impl Display for TokenSkipped<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Preprocessor '{}' skipped token {}: {}",
            self.preprocessor, self.token, self.reason
        )
    }
}

impl StructuredLog for TokenSkipped<'_> {
    fn log(&self) {
        tracing::trace!(
            preprocessor = self.preprocessor,
            token = self.token,
            reason = self.reason,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::trace_span!(
            "token_skipped",
            span_name = name,
            preprocessor = self.preprocessor,
            token = self.token,
        )
    }
}

/// A preprocessor's existence pre-check found no trigger in the buffer.
///
/// # Log Level
/// `trace!`
pub struct PreprocessorNotTriggered<'a> {
    pub preprocessor: &'a str,
    pub input_size: usize,
}

impl Display for PreprocessorNotTriggered<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Preprocessor '{}' not triggered: no marker in {} bytes",
            self.preprocessor, self.input_size
        )
    }
}

impl StructuredLog for PreprocessorNotTriggered<'_> {
    fn log(&self) {
        tracing::trace!(
            preprocessor = self.preprocessor,
            input_size = self.input_size,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::trace_span!(
            "preprocessor_not_triggered",
            span_name = name,
            preprocessor = self.preprocessor,
        )
    }
}
