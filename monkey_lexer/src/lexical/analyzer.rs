//! Lexical analyzer wrapping the scanner with metrics and logging
//!
//! The scanner itself is infallible and silent; this layer drains it into
//! a `TokenStream`, records distribution metrics according to runtime
//! preferences, and reports through the global logging system.

use std::collections::HashMap;

use crate::config::constants::compile_time::lexical::*;
use crate::config::runtime::LexicalPreferences;
use crate::file_processor::FileProcessingResult;
use crate::lexical::scanner::Scanner;
use crate::logging::{self, codes, LogEvent};
use crate::tokens::{Token, TokenClass, TokenStream};
use crate::{log_debug, log_success, log_warning};

/// Token distribution metrics for a single tokenization run
#[derive(Debug, Default, Clone)]
pub struct LexicalMetrics {
    pub total_tokens: usize,
    pub keyword_tokens: usize,
    pub identifier_tokens: usize,
    pub integer_tokens: usize,
    pub operator_tokens: usize,
    pub delimiter_tokens: usize,
    pub illegal_tokens: usize,
    pub max_identifier_length: usize,

    // Runtime preference-controlled metrics
    pub operator_usage_patterns: HashMap<String, usize>,
}

impl LexicalMetrics {
    pub(crate) fn record_token(&mut self, token: &Token, preferences: &LexicalPreferences) {
        self.total_tokens += 1;

        match token.token_class() {
            TokenClass::Keyword => self.keyword_tokens += 1,
            TokenClass::Identifier => {
                self.identifier_tokens += 1;
                if preferences.collect_detailed_metrics {
                    self.max_identifier_length =
                        self.max_identifier_length.max(token.literal.len());
                }
            }
            TokenClass::Literal => self.integer_tokens += 1,
            TokenClass::Operator => {
                self.operator_tokens += 1;

                // Track operator patterns if enabled
                if preferences.track_operator_patterns {
                    *self
                        .operator_usage_patterns
                        .entry(token.kind.as_str().to_string())
                        .or_insert(0) += 1;
                }
            }
            TokenClass::Delimiter => self.delimiter_tokens += 1,
            TokenClass::Special => {
                if token.is_illegal() {
                    self.illegal_tokens += 1;
                }
            }
        }
    }

    /// Check whether the run produced any tokens outside the language
    pub fn is_clean(&self) -> bool {
        self.illegal_tokens == 0
    }
}

/// Lexical analyzer with global logging integration
pub struct LexicalAnalyzer {
    metrics: LexicalMetrics,
    preferences: LexicalPreferences,
}

impl LexicalAnalyzer {
    pub fn new() -> Self {
        Self {
            metrics: LexicalMetrics::default(),
            preferences: LexicalPreferences::default(),
        }
    }

    pub fn with_preferences(preferences: LexicalPreferences) -> Self {
        Self {
            metrics: LexicalMetrics::default(),
            preferences,
        }
    }

    pub fn preferences(&self) -> &LexicalPreferences {
        &self.preferences
    }

    /// Metrics from the most recent tokenization
    pub fn metrics(&self) -> &LexicalMetrics {
        &self.metrics
    }

    /// Tokenize source text into a complete stream ending in `Eof`
    ///
    /// Never fails: unrecognized bytes surface as `Illegal` tokens in the
    /// stream and are counted in the metrics.
    pub fn tokenize(&mut self, source: &str) -> TokenStream {
        // Reset metrics for this tokenization
        self.metrics = LexicalMetrics::default();

        log_debug!("Starting tokenization",
            "source_bytes" => source.len()
        );

        let mut scanner = Scanner::new(source);
        let mut tokens = Vec::with_capacity(TOKEN_BUFFER_CAPACITY);

        loop {
            let token = scanner.next_token();
            self.metrics.record_token(&token, &self.preferences);

            if token.is_illegal() && self.preferences.log_illegal_tokens {
                // The cursor sits one past every returned token, so the
                // offending byte starts at position minus the literal length
                let offset = scanner.position() - token.literal.len();
                if let Some(logger) = logging::try_get_global_logger() {
                    let event = LogEvent::warning_with_code(
                        codes::lexical::ILLEGAL_CHARACTER,
                        "Unrecognized byte in source",
                    )
                    .with_context("literal", &token.literal)
                    .with_context("position", &offset.to_string());
                    logger.log_event(event);
                }
            }

            let done = token.is_eof();
            tokens.push(token);
            if done {
                break;
            }
        }

        if tokens.len() > LARGE_TOKEN_STREAM_THRESHOLD {
            log_warning!("Large token stream produced",
                "token_count" => tokens.len(),
                "threshold" => LARGE_TOKEN_STREAM_THRESHOLD
            );
        }

        log_success!(
            codes::success::TOKENIZATION_COMPLETE,
            "Tokenization complete",
            "total_tokens" => self.metrics.total_tokens,
            "illegal_tokens" => self.metrics.illegal_tokens
        );

        TokenStream::new(tokens)
    }

    /// Tokenize a loaded file with its processing context in the logs
    pub fn tokenize_file_result(&mut self, file_result: &FileProcessingResult) -> TokenStream {
        log_debug!("Tokenizing file",
            "path" => file_result.metadata.path.display(),
            "size_bytes" => file_result.metadata.size
        );

        self.tokenize(&file_result.source)
    }
}

impl Default for LexicalAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokens::TokenKind;

    #[test]
    fn test_tokenize_ends_in_eof() {
        let mut analyzer = LexicalAnalyzer::new();
        let stream = analyzer.tokenize("let x = 1;");
        assert_eq!(
            stream.tokens().last().map(|t| t.kind),
            Some(TokenKind::Eof)
        );
    }

    #[test]
    fn test_metrics_distribution() {
        let mut analyzer = LexicalAnalyzer::new();
        let stream = analyzer.tokenize("let five = 5;");
        assert_eq!(stream.len(), 6);

        let metrics = analyzer.metrics();
        assert_eq!(metrics.total_tokens, 6);
        assert_eq!(metrics.keyword_tokens, 1);
        assert_eq!(metrics.identifier_tokens, 1);
        assert_eq!(metrics.integer_tokens, 1);
        assert_eq!(metrics.operator_tokens, 1);
        assert_eq!(metrics.delimiter_tokens, 1);
        assert_eq!(metrics.illegal_tokens, 0);
        assert!(metrics.is_clean());
    }

    #[test]
    fn test_metrics_reset_between_runs() {
        let mut analyzer = LexicalAnalyzer::new();
        analyzer.tokenize("let x = 1;");
        analyzer.tokenize("y");
        // Ident + Eof only
        assert_eq!(analyzer.metrics().total_tokens, 2);
        assert_eq!(analyzer.metrics().keyword_tokens, 0);
    }

    #[test]
    fn test_illegal_tokens_counted_not_fatal() {
        let mut analyzer = LexicalAnalyzer::new();
        let stream = analyzer.tokenize("let @ = $;");
        assert!(stream.has_illegal_tokens());
        assert_eq!(analyzer.metrics().illegal_tokens, 2);
        assert!(!analyzer.metrics().is_clean());
        // Scanning continued past the bad bytes
        assert_eq!(stream.count_kind(TokenKind::Semicolon), 1);
    }

    #[test]
    fn test_operator_pattern_tracking() {
        let preferences = LexicalPreferences {
            track_operator_patterns: true,
            ..Default::default()
        };
        let mut analyzer = LexicalAnalyzer::with_preferences(preferences);
        analyzer.tokenize("1 + 2 + 3 == 6");

        let patterns = &analyzer.metrics().operator_usage_patterns;
        assert_eq!(patterns.get("+"), Some(&2));
        assert_eq!(patterns.get("=="), Some(&1));
    }

    #[test]
    fn test_operator_patterns_off_by_default() {
        let mut analyzer = LexicalAnalyzer::new();
        analyzer.tokenize("1 + 2");
        assert!(analyzer.metrics().operator_usage_patterns.is_empty());
    }

    #[test]
    fn test_illegal_byte_warning_code_and_offset() {
        use crate::logging::{LogLevel, LoggingService};
        use std::sync::Arc;

        let memory = crate::logging::service::create_test_logger();
        let service = Arc::new(LoggingService::new(memory.clone(), LogLevel::Debug));
        crate::logging::init_global_logging_with_service(service).unwrap();

        let mut analyzer = LexicalAnalyzer::new();
        analyzer.tokenize("a @ b");

        // "@" sits at byte offset 2 of "a @ b"
        let warnings = memory.get_warnings();
        assert!(
            warnings.iter().any(|e| {
                e.code.as_str() == "W020"
                    && e.context.get("literal").map(String::as_str) == Some("@")
                    && e.context.get("position").map(String::as_str) == Some("2")
            }),
            "expected a coded warning for the unrecognized byte"
        );
    }

    #[test]
    fn test_detailed_metrics_identifier_length() {
        let preferences = LexicalPreferences {
            collect_detailed_metrics: true,
            ..Default::default()
        };
        let mut analyzer = LexicalAnalyzer::with_preferences(preferences);
        analyzer.tokenize("a foobar xy");
        assert_eq!(analyzer.metrics().max_identifier_length, 6);
    }
}
