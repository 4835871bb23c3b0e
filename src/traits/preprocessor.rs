// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

/// A capability that detects and rewrites tokens in a template buffer before
/// the template is rendered.
///
/// Implementations are stateless with respect to their inputs and must be
/// safe to share across threads, since the default preprocessor list is a
/// process-wide snapshot handed to concurrent callers.
///
/// Neither operation can fail. Malformed or unrecognized input passes through
/// unchanged.
pub trait Preprocessor: Send + Sync {
    /// Rewrite the buffer, returning it unmodified when nothing applies.
    fn process(&self, data: Vec<u8>) -> Vec<u8>;

    /// Cheap pre-check: does the buffer contain this preprocessor's trigger?
    fn exists(&self, data: &[u8]) -> bool;

    /// Stable name used in configuration files and log output.
    fn name(&self) -> &'static str;
}
