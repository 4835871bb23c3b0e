// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use once_cell::sync::Lazy;
use regex::bytes::{Captures, Regex};
use std::borrow::Cow;
use std::collections::HashMap;
use std::time::Instant;

use crate::observability::messages::{preprocessor::*, StructuredLog};
use crate::traits::Preprocessor;
use crate::utils::generate_ksuid;

/// `{{identifier}}` placeholders. Identifiers are lowercase ASCII letters, digits and underscores.
static TOKEN_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"\{\{([a-z0-9_]+)\}\}").unwrap());

static MARKER_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(RANDSTR).unwrap());

pub const RANDSTR: &str = "randstr";
pub const RANDSTR_PREFIX: &str = "randstr_";

/// Random String preprocessor - replaces `{{randstr}}` and `{{randstr_*}}`
/// placeholders with freshly generated KSUIDs.
///
/// Every distinct token gets one value per call, and that value is written at
/// every occurrence of the token, so `{{randstr_a}}` can be referenced several
/// times in one template and stay consistent while `{{randstr_b}}` differs.
pub struct RandStrPreprocessor;

impl RandStrPreprocessor {
    pub fn new() -> Self {
        Self
    }

    /// Generated value for a token, or `None` when the token is left alone.
    fn resolve(&self, token: &[u8], identifier: &[u8]) -> Option<String> {
        let token = String::from_utf8_lossy(token);
        let identifier = String::from_utf8_lossy(identifier);

        if !is_random_string_identifier(&identifier) {
            let reason = if has_parameters(&identifier) {
                "parameterized identifiers are not supported"
            } else {
                "unrecognized identifier"
            };
            TokenSkipped {
                preprocessor: self.name(),
                token: &token,
                reason,
            }
            .log();
            return None;
        }

        let value = generate_ksuid();
        TokenReplaced {
            preprocessor: self.name(),
            token: &token,
            replacement: &value,
        }
        .log();
        Some(value)
    }
}

impl Default for RandStrPreprocessor {
    fn default() -> Self {
        Self::new()
    }
}

/// Whether an identifier names a random string.
///
/// The bare name compares case-insensitively while the `randstr_` prefix is
/// case-sensitive. Note that the token grammar only admits lowercase
/// identifiers, so the case-insensitive branch is only observable when this
/// predicate is called directly.
pub fn is_random_string_identifier(identifier: &str) -> bool {
    // Unreachable through TOKEN_REGEX, whose class excludes parentheses. Kept
    // so a widened token grammar cannot turn `randstr(..)` into a plain token.
    if has_parameters(identifier) {
        return false;
    }
    identifier.eq_ignore_ascii_case(RANDSTR) || identifier.starts_with(RANDSTR_PREFIX)
}

fn has_parameters(identifier: &str) -> bool {
    identifier.contains(|c: char| c == '(' || c == ')')
}

impl Preprocessor for RandStrPreprocessor {
    fn process(&self, data: Vec<u8>) -> Vec<u8> {
        let start_msg = PreprocessingStarted {
            preprocessor: self.name(),
            input_size: data.len(),
        };

        let span = start_msg.span("randstr_process");
        let _guard = span.enter();
        start_msg.log();

        let start_time = Instant::now();

        // Keyed by identifier so each distinct token is resolved once.
        let mut resolved: HashMap<Vec<u8>, Option<String>> = HashMap::new();

        let rewritten = TOKEN_REGEX.replace_all(&data, |caps: &Captures<'_>| -> Vec<u8> {
            let token = &caps[0];
            if caps.len() != 2 {
                return token.to_vec();
            }
            let identifier = &caps[1];

            let value = resolved
                .entry(identifier.to_vec())
                .or_insert_with(|| self.resolve(token, identifier));

            match value {
                Some(value) => value.as_bytes().to_vec(),
                None => token.to_vec(),
            }
        });

        let replaced_tokens = resolved.values().filter(|v| v.is_some()).count();
        let output = match rewritten {
            Cow::Owned(output) if replaced_tokens > 0 => Some(output),
            _ => None,
        };
        let output = output.unwrap_or(data);

        PreprocessingCompleted {
            preprocessor: self.name(),
            input_size: start_msg.input_size,
            output_size: output.len(),
            replaced_tokens,
            duration: start_time.elapsed(),
        }
        .log();

        output
    }

    fn exists(&self, data: &[u8]) -> bool {
        MARKER_REGEX.is_match(data)
    }

    fn name(&self) -> &'static str {
        RANDSTR
    }
}
