// Internal modules
pub mod config;
pub mod file_processor;
pub mod grammar;
pub mod lexical;
#[macro_use]
pub mod logging;
pub mod tokens;

// Re-export key types for library consumers
pub use lexical::{tokenize, LexicalAnalyzer, LexicalMetrics, Scanner};
pub use tokens::{Token, TokenClass, TokenKind, TokenStream};
