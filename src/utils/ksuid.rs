// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! K-Sortable Unique IDentifiers used as generated token values.
//!
//! The string form is 27 base62 characters, URL-safe, and sorts in the same
//! order as the underlying timestamp-prefixed bytes.

pub use svix_ksuid::{Ksuid, KsuidLike};

/// Length of the base62 string form.
pub const STRING_LEN: usize = 27;

/// Generate a fresh KSUID for the current time, in string form.
///
/// The payload comes from a per-call random draw, so concurrent callers never
/// contend on shared generator state.
pub fn generate() -> String {
    Ksuid::new(None, None).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    const KNOWN_STRING: &str = "0ujtsYcgvSTl8PAuAdqWYSMnLOv";

    #[test]
    fn test_known_string_round_trips() {
        let id = Ksuid::from_base62(KNOWN_STRING).unwrap();
        assert_eq!(id.to_string(), KNOWN_STRING);
    }

    #[test]
    fn test_generated_ids_are_fixed_length_and_url_safe() {
        for _ in 0..100 {
            let s = generate();
            assert_eq!(s.len(), STRING_LEN);
            assert!(s.chars().all(|c| c.is_ascii_alphanumeric()), "unexpected char in {}", s);
        }
    }

    #[test]
    fn test_generated_ids_parse_back() {
        let s = generate();
        let id = Ksuid::from_base62(&s).unwrap();
        assert_eq!(id.to_string(), s);
    }

    #[test]
    fn test_generated_ids_are_unique() {
        let ids: HashSet<String> = (0..1000).map(|_| generate()).collect();
        assert_eq!(ids.len(), 1000);
    }

    #[test]
    fn test_invalid_characters_rejected() {
        for input in ["0ujtsYcgvSTl8PAuAdqWYSMnLO-", "0ujtsYcgvSTl8PAuAdqWYSMnL/v"] {
            assert!(Ksuid::from_base62(input).is_err(), "Expected error for {:?}", input);
        }
    }
}
