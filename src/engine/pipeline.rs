// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::sync::Arc;

use crate::observability::messages::{preprocessor::PreprocessorNotTriggered, StructuredLog};
use crate::traits::Preprocessor;

/// Run an ordered list of preprocessors over a template buffer.
///
/// Each preprocessor sees the output of the one before it. A preprocessor
/// whose `exists` check finds no trigger in the current buffer is skipped.
pub fn apply_preprocessors(preprocessors: &[Arc<dyn Preprocessor>], data: Vec<u8>) -> Vec<u8> {
    preprocessors.iter().fold(data, |data, preprocessor| {
        if preprocessor.exists(&data) {
            preprocessor.process(data)
        } else {
            PreprocessorNotTriggered {
                preprocessor: preprocessor.name(),
                input_size: data.len(),
            }
            .log();
            data
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PreprocessorRegistry;
    use crate::utils::ksuid::STRING_LEN;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Appends a suffix when the buffer contains a marker, counting calls.
    struct SuffixPreprocessor {
        marker: &'static str,
        suffix: &'static str,
        calls: AtomicUsize,
    }

    impl SuffixPreprocessor {
        fn new(marker: &'static str, suffix: &'static str) -> Self {
            Self {
                marker,
                suffix,
                calls: AtomicUsize::new(0),
            }
        }
    }

    impl Preprocessor for SuffixPreprocessor {
        fn process(&self, mut data: Vec<u8>) -> Vec<u8> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            data.extend_from_slice(self.suffix.as_bytes());
            data
        }

        fn exists(&self, data: &[u8]) -> bool {
            data.windows(self.marker.len()).any(|w| w == self.marker.as_bytes())
        }

        fn name(&self) -> &'static str {
            "suffix"
        }
    }

    #[test]
    fn test_empty_list_is_identity() {
        let output = apply_preprocessors(&[], b"{{randstr}}".to_vec());
        assert_eq!(output, b"{{randstr}}".to_vec());
    }

    #[test]
    fn test_preprocessors_run_in_order_on_previous_output() {
        let first = Arc::new(SuffixPreprocessor::new("a", "b"));
        let second = Arc::new(SuffixPreprocessor::new("b", "c"));
        let list: Vec<Arc<dyn Preprocessor>> = vec![first.clone(), second.clone()];

        let output = apply_preprocessors(&list, b"a".to_vec());

        assert_eq!(output, b"abc".to_vec());
        assert_eq!(first.calls.load(Ordering::SeqCst), 1);
        assert_eq!(second.calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_untriggered_preprocessor_is_skipped() {
        let skipped = Arc::new(SuffixPreprocessor::new("zzz", "!"));
        let list: Vec<Arc<dyn Preprocessor>> = vec![skipped.clone()];

        let output = apply_preprocessors(&list, b"hello".to_vec());

        assert_eq!(output, b"hello".to_vec());
        assert_eq!(skipped.calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_caller_preprocessor_runs_before_defaults() {
        // The caller's output introduces a token that the default randstr
        // preprocessor then replaces.
        let caller: Arc<dyn Preprocessor> = Arc::new(SuffixPreprocessor::new("id=", "{{randstr}}"));
        let registry = PreprocessorRegistry::builtin();
        let list = registry.get_preprocessors(Some(caller));

        let output = apply_preprocessors(&list, b"id=".to_vec());
        let output = String::from_utf8(output).unwrap();

        assert!(output.starts_with("id="));
        assert!(!output.contains("{{randstr}}"));
        assert_eq!(output.len(), 3 + STRING_LEN);
    }
}
