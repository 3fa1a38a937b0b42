//! Parser Trait
//!
//! This module defines the [`Parser`] trait, a generic interface for turning raw
//! input into a strongly-typed value, returning a [`ParseError`] when the input
//! cannot be interpreted.
//!
//! # Example
//!
//! ```rust
//! use grader::error::ParseError;
//! use grader::traits::parser::Parser;
//!
//! struct Trimmed;
//!
//! impl<'a> Parser<&'a str, String> for Trimmed {
//!     fn parse(&self, input: &'a str) -> Result<String, ParseError> {
//!         if input.trim().is_empty() {
//!             return Err(ParseError::NoJsonObject);
//!         }
//!         Ok(input.trim().to_string())
//!     }
//! }
//!
//! assert_eq!(Trimmed.parse("  x ").unwrap(), "x");
//! ```

use crate::error::ParseError;

/// A generic trait for parsing data into a strongly-typed Rust structure.
///
/// # Type Parameters
///
/// * `Input` - The input type to be parsed.
/// * `Output` - The output type produced by the parser.
pub trait Parser<Input, Output> {
    /// Parse an input value into the target type.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] if the input does not contain the expected structure.
    fn parse(&self, input: Input) -> Result<Output, ParseError>;
}
