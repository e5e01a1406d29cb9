//! Lexical analysis for Lox source code.
//!
//! `scan_tokens` turns source text into the tokens the parser consumes, always
//! ending with a single `Eof` token. The first lexical error stops the scan and
//! nothing else is returned.
//!
//! ```
//! use lox_scanner::{scan_tokens, TokenType};
//!
//! let tokens = scan_tokens("a >= 2").unwrap();
//! let types: Vec<TokenType> = tokens.iter().map(|t| t.type_()).collect();
//! assert_eq!(vec![TokenType::Identifier, TokenType::GreaterEqual, TokenType::Number, TokenType::Eof], types);
//! ```

pub mod error;
pub mod scanner;
pub mod token;

pub use error::{report, report_runtime, ErrorType, RuntimeError};
pub use scanner::{scan_tokens, Scanner};
pub use token::{Literal, Token, TokenType};
