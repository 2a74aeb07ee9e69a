//! Lexical analysis for Monkey source text
//!
//! A single-pass, byte-oriented scanner plus an analyzer layer that adds
//! metrics and logging. Scanning never fails; unrecognized bytes become
//! in-band `Illegal` tokens for the parser to reject.

pub mod analyzer;
pub mod scanner;

use crate::config::runtime::LexicalPreferences;
use crate::file_processor::FileProcessingResult;
use crate::tokens::TokenStream;

pub use analyzer::{LexicalAnalyzer, LexicalMetrics};
pub use scanner::Scanner;

// ============================================================================
// MODULE API
// ============================================================================

/// Tokenize source text with default preferences
pub fn tokenize(source: &str) -> TokenStream {
    let mut analyzer = LexicalAnalyzer::new();
    analyzer.tokenize(source)
}

/// Tokenize with custom runtime preferences
pub fn tokenize_with_preferences(
    source: &str,
    preferences: LexicalPreferences,
) -> TokenStream {
    let mut analyzer = LexicalAnalyzer::with_preferences(preferences);
    analyzer.tokenize(source)
}

/// Tokenize a loaded file with its processing context in the logs
pub fn tokenize_file_result(file_result: &FileProcessingResult) -> TokenStream {
    let mut analyzer = LexicalAnalyzer::new();
    analyzer.tokenize_file_result(file_result)
}

/// Create a new lexical analyzer with default preferences
pub fn create_analyzer() -> LexicalAnalyzer {
    LexicalAnalyzer::new()
}

/// Create analyzer with custom runtime preferences
pub fn create_analyzer_with_preferences(preferences: LexicalPreferences) -> LexicalAnalyzer {
    LexicalAnalyzer::with_preferences(preferences)
}
